//! Pointer state shared between event handlers and frame loops, plus the
//! touch capability probe consulted once at startup.

use drift_core::POINTER_PARKED;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Parked far off-canvas so nothing is repelled before the first
    /// pointer event.
    pub fn parked() -> Self {
        Self {
            x: POINTER_PARKED[0],
            y: POINTER_PARKED[1],
        }
    }
}

/// True when the primary input cannot hover. Pointer-proximity effects are
/// meaningless there, so the particle background stays off entirely.
pub fn primary_input_is_touch(window: &web::Window) -> bool {
    if let Ok(Some(mq)) = window.match_media("(pointer: coarse)") {
        if mq.matches() {
            return true;
        }
    }
    window.navigator().max_touch_points() > 0
}
