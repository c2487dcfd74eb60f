use crate::constants::{HIDDEN_CLASS, LOADING_ID, PANEL_BODY_ID, PANEL_ID, PANEL_TITLE_ID};
use crate::core::PanelContent;
use crate::dom;
use web_sys as web;

#[inline]
fn set_visible(el: &web::HtmlElement, visible: bool) {
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.style().remove_property("display");
    } else {
        _ = cl.add_1(HIDDEN_CLASS);
        _ = el.style().set_property("display", "none");
    }
}

/// Fill and show the information panel. Missing elements are logged and skipped.
pub fn show(document: &web::Document, content: &PanelContent) {
    let Some(panel) = dom::element(document, PANEL_ID) else {
        return;
    };
    if let Some(title) = dom::element(document, PANEL_TITLE_ID) {
        title.set_text_content(Some(&content.title));
    }
    if let Some(body) = dom::element(document, PANEL_BODY_ID) {
        body.set_text_content(Some(&content.body));
    }
    set_visible(&panel, true);
}

pub fn hide(document: &web::Document) {
    if let Some(panel) = dom::element(document, PANEL_ID) {
        set_visible(&panel, false);
    }
}

/// Startup finished: drop the loading indicator.
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = dom::element(document, LOADING_ID) {
        set_visible(&el, false);
    }
}

/// Startup failed: replace the loading indicator with the error text.
pub fn show_fatal(document: &web::Document, message: &str) {
    match dom::element(document, LOADING_ID) {
        Some(el) => {
            el.set_text_content(Some(&format!("Unable to start the viewer: {}", message)));
            _ = el.class_list().add_1("error");
            set_visible(&el, true);
        }
        None => log::error!("[init] {}", message),
    }
}
