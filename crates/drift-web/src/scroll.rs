//! Scroll-position effects: compact header, back-to-top button and active
//! section highlighting in the overlay menu. One listener, three updates;
//! the threshold decisions live in the core crate.

use crate::dom;
use drift_core::{header_compact, section_is_active, show_scroll_top};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(window: &web::Window, document: &web::Document) {
    let win = window.clone();
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        update_header(&doc, y);
        update_scroll_top(&doc, y);
        update_active_link(&doc, y);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn update_header(document: &web::Document, y: f64) {
    if let Some(header) = document.get_element_by_id("header") {
        _ = header
            .class_list()
            .toggle_with_force("scroll-header", header_compact(y));
    }
}

fn update_scroll_top(document: &web::Document, y: f64) {
    if let Some(btn) = document.get_element_by_id("scroll-up") {
        _ = btn
            .class_list()
            .toggle_with_force("show-scroll", show_scroll_top(y));
    }
}

fn update_active_link(document: &web::Document, y: f64) {
    let doc = document.clone();
    dom::for_each_selected(document, "section[id]", move |section| {
        let (top, height) = match section.dyn_ref::<web::HtmlElement>() {
            Some(sec) => (sec.offset_top() as f64, sec.offset_height() as f64),
            None => return,
        };
        let Some(id) = section.get_attribute("id") else {
            return;
        };
        let active = section_is_active(y, top, height);
        let href = format!("#{id}");
        dom::for_each_selected(&doc, ".overlay-menu-item", |item| {
            if item.get_attribute("href").as_deref() != Some(href.as_str()) {
                return;
            }
            if let Some(el) = item.dyn_ref::<web::HtmlElement>() {
                if active {
                    _ = el.style().set_property("color", "var(--accent-primary)");
                } else {
                    _ = el.style().remove_property("color");
                }
            }
        });
    });
}
