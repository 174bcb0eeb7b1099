//! Intersection-driven entrance effects: staggered reveals and the
//! count-up stat numbers. Both observers fire once per element and then
//! let go of it.

use crate::{dom, frame};
use drift_core::Counter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_TARGETS: &str = ".section-header, .service-card, .portfolio__card, .process__step, \
                              .founder__profile-card, .founder__stat-card, .contact__info-side, \
                              .contact__form-side, .hero__stats";
const STAT_TARGETS: &str = ".hero__stat-number, .founder__stat-number";

const REVEAL_THRESHOLD: f64 = 0.1;
const STAT_THRESHOLD: f64 = 0.5;

pub fn wire(document: &web::Document) {
    wire_reveals(document);
    wire_counters(document);
}

fn make_observer(
    mut handler: impl FnMut(web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
    threshold: f64,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    handler(entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(_, _)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .ok()?;
    callback.forget();
    Some(observer)
}

fn wire_reveals(document: &web::Document) {
    let Some(observer) = make_observer(
        |entry, observer| {
            if entry.is_intersecting() {
                let target = entry.target();
                _ = target.class_list().add_1("revealed");
                observer.unobserve(&target);
            }
        },
        REVEAL_THRESHOLD,
    ) else {
        return;
    };

    dom::for_each_selected(document, REVEAL_TARGETS, move |el| {
        _ = el.class_list().add_1("reveal");
        observer.observe(&el);
    });
}

fn wire_counters(document: &web::Document) {
    let Some(observer) = make_observer(
        |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            observer.unobserve(&target);
            let Some(attr) = target.get_attribute("data-count") else {
                return;
            };
            let Ok(final_count) = attr.trim().parse::<u32>() else {
                return;
            };
            start_count_up(target, final_count);
        },
        STAT_THRESHOLD,
    ) else {
        return;
    };

    dom::for_each_selected(document, STAT_TARGETS, move |el| {
        observer.observe(&el);
    });
}

/// Per-element frame loop that writes the counter into the element and
/// stops itself once the target value lands.
fn start_count_up(target: web::Element, final_count: u32) {
    let mut counter = Counter::new(final_count);
    let handle: Rc<RefCell<Option<frame::LoopHandle>>> = Rc::new(RefCell::new(None));
    let handle_in = handle.clone();
    let started = frame::start_loop(move || {
        let shown = counter.step();
        target.set_text_content(Some(&shown.to_string()));
        if counter.is_done() {
            if let Some(h) = handle_in.borrow().as_ref() {
                h.stop();
            }
        }
    });
    *handle.borrow_mut() = Some(started);
}
