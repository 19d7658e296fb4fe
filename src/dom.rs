use crate::input::ScrollGeometry;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Measure the pinned section against the current layout.
pub fn measure_pin(window: &web::Window, pin: &web::Element, length_viewports: f32) -> ScrollGeometry {
    let rect = pin.get_bounding_client_rect();
    let (_, viewport_height) = viewport_size(window);
    ScrollGeometry {
        pin_top: rect.top() as f32 + scroll_y(window),
        viewport_height,
        length_viewports,
    }
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("[dom] set {property} failed: {e:?}");
    }
}
