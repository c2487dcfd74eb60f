use crate::app::AppContext;
use crate::constants::AUTO_ROTATE_ID;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Auto-rotate checkbox: checked → automatic orbit, unchecked → drag to orbit.
/// The page's initial checkbox state wins over the default.
pub fn wire_auto_rotate_checkbox(ctx: &AppContext) {
    let Some(input) = ctx
        .document
        .get_element_by_id(AUTO_ROTATE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing #{}; auto-rotate stays on", AUTO_ROTATE_ID);
        return;
    };
    ctx.viewer.borrow_mut().set_auto_rotate(input.checked());

    let ctx_change = ctx.clone();
    let input_change = input.clone();
    dom::listen(&input, "change", move |_ev: web::Event| {
        let on = input_change.checked();
        ctx_change.viewer.borrow_mut().set_auto_rotate(on);
        log::info!("[camera] auto-rotate {}", if on { "on" } else { "off" });
    });
}

/// Keep the canvas backing store and camera aspect in step with the window.
pub fn wire_resize(ctx: &AppContext) {
    let (w, h) = dom::sync_canvas_backing_size(&ctx.canvas);
    ctx.viewer.borrow_mut().resize(w, h);

    let Some(window) = web::window() else {
        return;
    };
    let ctx_resize = ctx.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&ctx_resize.canvas);
        ctx_resize.viewer.borrow_mut().resize(w, h);
    });
}
