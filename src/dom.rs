use crate::constants::{HOST_SELECTOR, REDUCED_MOTION_QUERY};
use field_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Size the backing store to the viewport (pixel ratio clamped) and the CSS box to the viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

pub fn hide(canvas: &web::HtmlCanvasElement) {
    _ = canvas.style().set_property("display", "none");
}

/// Element whose visibility gates the loop: the enclosing section, else the parent, else the canvas.
pub fn host_element(canvas: &web::HtmlCanvasElement) -> web::Element {
    canvas
        .closest(HOST_SELECTOR)
        .ok()
        .flatten()
        .or_else(|| canvas.parent_element())
        .unwrap_or_else(|| canvas.clone().unchecked_into::<web::Element>())
}
