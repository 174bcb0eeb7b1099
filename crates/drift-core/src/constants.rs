use glam::Vec2;

// Shared tuning constants for the particle field and the page motion helpers.

// Field sizing
pub const DENSITY_DIVISOR: f32 = 15_000.0; // canvas area per particle
pub const MAX_PARTICLES: usize = 80; // hard cap; bounds the O(n^2) link pass

// Per-particle attribute ranges
pub const SPEED_SPREAD: f32 = 0.4; // per-axis velocity span, centered on zero
pub const SIZE_MIN: f32 = 0.3;
pub const SIZE_SPREAD: f32 = 1.5;
pub const OPACITY_MIN: f32 = 0.1;
pub const OPACITY_SPREAD: f32 = 0.4;

// The two hue families, equally likely per particle
pub const HUE_COOL: f32 = 221.0; // blue
pub const HUE_WARM: f32 = 42.0; // gold
pub const PARTICLE_SATURATION_PCT: f32 = 80.0;
pub const PARTICLE_LIGHTNESS_PCT: f32 = 70.0;

// Pointer interaction
pub const REPEL_RADIUS: f32 = 120.0; // particles inside this ring get pushed
pub const REPEL_STRENGTH: f32 = 2.0; // displacement at the center of the ring

// Particle links
pub const LINK_DISTANCE: f32 = 130.0; // longest drawn connection
pub const LINK_RGB: [u8; 3] = [177, 148, 76]; // gold
pub const LINK_BASE_OPACITY: f32 = 0.06;
pub const LINK_WIDTH: f32 = 0.5;

// Resize handling
pub const RESIZE_DEBOUNCE_MS: u64 = 100; // quiet period before a rebuild

// Pointer parking spot before the first pointer event, far enough out that
// no canvas position is within repel range
pub const POINTER_PARKED: [f32; 2] = [-1000.0, -1000.0];

// Page motion
pub const CURSOR_TRAIL_EASE: f32 = 0.4; // fraction of remaining distance per frame
pub const TILT_MAX_DEG: f32 = 10.0;
pub const HEADER_COMPACT_Y: f64 = 50.0; // scroll offset where the header shrinks
pub const SCROLL_TOP_Y: f64 = 400.0; // scroll offset where back-to-top appears
pub const SECTION_PROBE_OFFSET: f64 = 120.0; // lead used for active-section checks
pub const COUNTER_DURATION_MS: f32 = 2000.0;
pub const COUNTER_FRAME_MS: f32 = 16.0; // nominal 60fps frame

#[inline]
pub fn pointer_parked_vec2() -> Vec2 {
    Vec2::new(POINTER_PARKED[0], POINTER_PARKED[1])
}
