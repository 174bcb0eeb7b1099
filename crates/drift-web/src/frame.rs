//! requestAnimationFrame loop with an explicit cancellation handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a running loop. Cloned freely; any clone can stop it.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop scheduling further frames and cancel the pending one. A tick
    /// already dispatched still observes the flag and returns early.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Run `tick` once per animation frame until the returned handle is
/// stopped. Each tick requests exactly one future invocation.
pub fn start_loop(mut tick: impl FnMut() + 'static) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
        raf_id: Rc::new(Cell::new(None)),
    };

    let cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let cb_clone = cb.clone();
    let loop_handle = handle.clone();
    *cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !loop_handle.is_running() {
            return;
        }
        tick();
        if !loop_handle.is_running() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                cb_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                loop_handle.raf_id.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(cb.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            handle.raf_id.set(Some(id));
        }
    }
    handle
}
