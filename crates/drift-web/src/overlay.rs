//! Full-screen navigation overlay: hamburger toggle, close-on-navigate and
//! the Escape shortcut. Body scrolling is locked while the menu is open.

use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const MENU_ITEM_SELECTOR: &str = ".overlay-menu-item";

fn set_open(document: &web::Document, open: bool) {
    if let Some(toggle) = document.get_element_by_id("nav-toggle") {
        _ = toggle.class_list().toggle_with_force("is-active", open);
    }
    if let Some(overlay) = document.get_element_by_id("nav-overlay") {
        _ = overlay.class_list().toggle_with_force("is-open", open);
    }
    if let Some(body) = document.body() {
        let value = if open { "hidden" } else { "" };
        _ = body.style().set_property("overflow", value);
    }
}

pub fn wire(document: &web::Document) {
    let open = Rc::new(Cell::new(false));

    if let Some(toggle) = document.get_element_by_id("nav-toggle") {
        let doc = document.clone();
        let open_t = open.clone();
        dom::add_listener(&toggle, "click", move || {
            open_t.set(!open_t.get());
            set_open(&doc, open_t.get());
        });
    }

    // Navigating from the overlay closes it.
    {
        let doc = document.clone();
        let open_m = open.clone();
        dom::for_each_selected(document, MENU_ITEM_SELECTOR, move |el| {
            let doc = doc.clone();
            let open_m = open_m.clone();
            dom::add_listener(&el, "click", move || {
                if open_m.get() {
                    open_m.set(false);
                    set_open(&doc, false);
                }
            });
        });
    }

    wire_escape_close(document, open);
}

fn wire_escape_close(document: &web::Document, open: Rc<Cell<bool>>) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" && open.get() {
            open.set(false);
            set_open(&doc, false);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
