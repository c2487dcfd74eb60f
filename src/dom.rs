use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id, logging a warning when it is missing.
pub fn element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    match document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        Some(el) => Some(el),
        None => {
            log::warn!("[dom] missing #{}", id);
            None
        }
    }
}

/// Attach a long-lived listener. The closure is leaked, as listeners live for the page.
pub fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[dom] add_event_listener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, css: &str) {
    _ = canvas.style().set_property("cursor", css);
}

/// Element bounding box as `(left, top, width, height)` in CSS pixels.
pub fn client_rect(el: &web::Element) -> (f32, f32, f32, f32) {
    let rect = el.get_bounding_client_rect();
    (
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

pub fn set_checkbox(document: &web::Document, id: &str, checked: bool) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.set_checked(checked);
    }
}
