//! Custom cursor: the dot rides the pointer, the outline trails it with an
//! eased follow in its own frame loop, and both grow over interactive
//! elements.

use crate::{dom, frame};
use drift_core::{follow_step, CURSOR_TRAIL_EASE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HOVER_TARGETS: &str = "a, button, .service-card, .portfolio__card, .testimonial-card, \
                             .contact__card, .overlay-menu-item";

const OUTLINE_REST: &str = "42px";
const OUTLINE_HOVER: &str = "64px";
const BORDER_REST: &str = "rgba(177, 148, 76, 0.35)";
const BORDER_HOVER: &str = "rgba(177, 148, 76, 0.5)";

struct CursorState {
    pointer: (f32, f32),
    trail: (f32, f32),
}

pub fn wire(window: &web::Window, document: &web::Document) {
    let dot = query_html(document, "[data-cursor-dot]");
    let outline = query_html(document, "[data-cursor-outline]");
    if dot.is_none() && outline.is_none() {
        return;
    }

    if let Some(el) = outline.as_ref() {
        _ = el.style().set_property(
            "transition",
            "left 0.06s ease-out, top 0.06s ease-out, width 0.2s, height 0.2s, border-color 0.2s",
        );
    }

    let state = Rc::new(RefCell::new(CursorState {
        pointer: (0.0, 0.0),
        trail: (0.0, 0.0),
    }));

    {
        let state = state.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                state.borrow_mut().pointer = (ev.client_x() as f32, ev.client_y() as f32);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let dot = dot.clone();
        let outline = outline.clone();
        let state = state.clone();
        frame::start_loop(move || {
            let mut s = state.borrow_mut();
            s.trail.0 = follow_step(s.trail.0, s.pointer.0, CURSOR_TRAIL_EASE);
            s.trail.1 = follow_step(s.trail.1, s.pointer.1, CURSOR_TRAIL_EASE);
            if let Some(d) = &dot {
                _ = d.style().set_property("left", &format!("{}px", s.pointer.0));
                _ = d.style().set_property("top", &format!("{}px", s.pointer.1));
            }
            if let Some(o) = &outline {
                _ = o.style().set_property("left", &format!("{}px", s.trail.0));
                _ = o.style().set_property("top", &format!("{}px", s.trail.1));
            }
        });
    }

    wire_hover_growth(document, dot, outline);
}

fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn wire_hover_growth(
    document: &web::Document,
    dot: Option<web::HtmlElement>,
    outline: Option<web::HtmlElement>,
) {
    dom::for_each_selected(document, HOVER_TARGETS, move |el| {
        {
            let dot = dot.clone();
            let outline = outline.clone();
            dom::add_listener(&el, "mouseenter", move || {
                if let Some(o) = &outline {
                    let style = o.style();
                    _ = style.set_property("width", OUTLINE_HOVER);
                    _ = style.set_property("height", OUTLINE_HOVER);
                    _ = style.set_property("border-color", BORDER_HOVER);
                }
                if let Some(d) = &dot {
                    _ = d
                        .style()
                        .set_property("transform", "translate(-50%, -50%) scale(2)");
                }
            });
        }
        {
            let dot = dot.clone();
            let outline = outline.clone();
            dom::add_listener(&el, "mouseleave", move || {
                if let Some(o) = &outline {
                    let style = o.style();
                    _ = style.set_property("width", OUTLINE_REST);
                    _ = style.set_property("height", OUTLINE_REST);
                    _ = style.set_property("border-color", BORDER_REST);
                }
                if let Some(d) = &dot {
                    _ = d
                        .style()
                        .set_property("transform", "translate(-50%, -50%) scale(1)");
                }
            });
        }
    });
}
