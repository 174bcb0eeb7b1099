//! Small DOM helpers shared across the page features.

use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport_size(window: &web::Window) -> (u32, u32) {
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
    (w as u32, h as u32)
}

/// Match the canvas backing store to the viewport; CSS lays the canvas out
/// full-bleed behind the page.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}

pub fn add_listener(element: &web::Element, event: &str, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn for_each_selected(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(web::Element),
) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    f(el);
                }
            }
        }
    }
}
