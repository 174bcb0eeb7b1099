//! Pointer tilt on cards, with the glow spot tracking the pointer.

use crate::dom;
use drift_core::{tilt_for_pointer, Tilt};
use wasm_bindgen::JsCast;
use web_sys as web;

const TILT_TARGETS: &str = ".service-card, .hero__stats, .portfolio__card, .testimonial-card, \
                            .contact__card, .hero__float-card";
const GLOW_SELECTOR: &str = ".service-card__glow";
const GLOW_HALF_PX: f32 = 110.0; // half the 220px glow sprite

pub fn wire(document: &web::Document) {
    dom::for_each_selected(document, TILT_TARGETS, wire_card);
}

fn wire_card(el: web::Element) {
    {
        let card = el.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                let rect = card.get_bounding_client_rect();
                let x = ev.client_x() as f32 - rect.left() as f32;
                let y = ev.client_y() as f32 - rect.top() as f32;
                let tilt = tilt_for_pointer(x, y, rect.width() as f32, rect.height() as f32);
                apply_tilt(&card, tilt, x, y);
            }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let card = el.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                reset_tilt(&card);
            }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply_tilt(card: &web::Element, tilt: Tilt, x: f32, y: f32) {
    if let Some(el) = card.dyn_ref::<web::HtmlElement>() {
        let style = el.style();
        _ = style.set_property(
            "transform",
            &format!(
                "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.02, 1.02, 1.02)",
                tilt.rotate_x_deg, tilt.rotate_y_deg
            ),
        );
        _ = style.set_property("transition", "transform 0.1s ease-out");
    }
    if let Ok(Some(glow)) = card.query_selector(GLOW_SELECTOR) {
        if let Some(glow) = glow.dyn_ref::<web::HtmlElement>() {
            let style = glow.style();
            _ = style.set_property("opacity", "1");
            _ = style.set_property("left", &format!("{}px", x - GLOW_HALF_PX));
            _ = style.set_property("top", &format!("{}px", y - GLOW_HALF_PX));
        }
    }
}

fn reset_tilt(card: &web::Element) {
    if let Some(el) = card.dyn_ref::<web::HtmlElement>() {
        let style = el.style();
        _ = style.set_property(
            "transform",
            "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
        );
        _ = style.set_property("transition", "transform 0.5s ease");
    }
    if let Ok(Some(glow)) = card.query_selector(GLOW_SELECTOR) {
        if let Some(glow) = glow.dyn_ref::<web::HtmlElement>() {
            _ = glow.style().set_property("opacity", "0");
        }
    }
}
