//! Canvas driver for the ambient particle background.
//!
//! The enable/disable decision is made exactly once, here: touch-first
//! devices and pages without a usable canvas run without the effect, and
//! that state never flips at runtime.

use crate::{dom, events, frame, input};
use drift_core::{
    Debouncer, FieldParams, Link, ParticleField, LINK_BASE_OPACITY, LINK_RGB, LINK_WIDTH,
    PARTICLE_LIGHTNESS_PCT, PARTICLE_SATURATION_PCT, RESIZE_DEBOUNCE_MS,
};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "particle-canvas";

pub struct FieldContext {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    pointer: Rc<RefCell<input::PointerState>>,
    resize_debounce: Debouncer,
    links: Vec<Link>,
}

impl FieldContext {
    pub fn note_resize(&mut self, now: Instant) {
        self.resize_debounce.trigger(now);
    }

    fn frame(&mut self) {
        if self.resize_debounce.fire(Instant::now()) {
            if let Some(window) = web::window() {
                let (w, h) = dom::viewport_size(&window);
                dom::size_canvas(&self.canvas, w, h);
                self.field.resize(w as f32, h as f32);
            }
        }

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        let pointer = {
            let p = self.pointer.borrow();
            Vec2::new(p.x, p.y)
        };
        self.field.step(pointer);
        self.draw_particles();
        self.draw_links();
    }

    fn draw_particles(&self) {
        for p in &self.field.particles {
            self.ctx.begin_path();
            _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(&format!(
                "hsla({}, {}%, {}%, {})",
                p.hue, PARTICLE_SATURATION_PCT, PARTICLE_LIGHTNESS_PCT, p.opacity
            ));
            self.ctx.fill();
        }
    }

    fn draw_links(&mut self) {
        self.field.collect_links(&mut self.links);
        let [r, g, b] = LINK_RGB;
        self.ctx.set_line_width(LINK_WIDTH as f64);
        for link in &self.links {
            let a = &self.field.particles[link.a].pos;
            let bp = &self.field.particles[link.b].pos;
            self.ctx.begin_path();
            self.ctx.set_stroke_style_str(&format!(
                "rgba({}, {}, {}, {})",
                r,
                g,
                b,
                LINK_BASE_OPACITY * link.strength
            ));
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(bp.x as f64, bp.y as f64);
            self.ctx.stroke();
        }
    }
}

/// Running background simulation. Dropping the handle leaves the loop
/// running for the page's lifetime; call [`FieldSim::stop`] to tear down.
pub struct FieldSim {
    loop_handle: frame::LoopHandle,
}

impl FieldSim {
    pub fn stop(&self) {
        self.loop_handle.stop();
    }

    pub fn is_running(&self) -> bool {
        self.loop_handle.is_running()
    }
}

/// Wire up and start the particle background. Returns `None` on
/// touch-first devices or when the canvas or its 2D context is
/// unavailable; the page simply runs without the effect.
pub fn start(window: &web::Window, document: &web::Document) -> Option<FieldSim> {
    if input::primary_input_is_touch(window) {
        log::info!("[field] touch-first device, particle background disabled");
        return None;
    }

    let canvas = document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;

    let (w, h) = dom::viewport_size(window);
    dom::size_canvas(&canvas, w, h);

    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(w as f32, h as f32, FieldParams::default(), seed);
    log::info!(
        "[field] {} particles on a {}x{} canvas",
        field.particles.len(),
        w,
        h
    );

    let pointer = Rc::new(RefCell::new(input::PointerState::parked()));
    let field_ctx = Rc::new(RefCell::new(FieldContext {
        canvas,
        ctx,
        field,
        pointer: pointer.clone(),
        resize_debounce: Debouncer::new(Duration::from_millis(RESIZE_DEBOUNCE_MS)),
        links: Vec::new(),
    }));

    events::wire_pointer_tracking(window, pointer);
    events::wire_resize(window, field_ctx.clone());

    let tick_ctx = field_ctx.clone();
    let loop_handle = frame::start_loop(move || tick_ctx.borrow_mut().frame());

    Some(FieldSim { loop_handle })
}
