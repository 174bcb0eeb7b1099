//! Event wiring for the particle canvas: pointer tracking and debounced
//! resize.

use crate::field::FieldContext;
use crate::input::PointerState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_tracking(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut p = pointer.borrow_mut();
        p.x = ev.client_x() as f32;
        p.y = ev.client_y() as f32;
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Resize events only note the burst; the frame loop performs the rebuild
/// once the debouncer goes quiet.
pub fn wire_resize(window: &web::Window, field_ctx: Rc<RefCell<FieldContext>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        field_ctx.borrow_mut().note_resize(Instant::now());
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
