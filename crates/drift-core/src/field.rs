//! Ambient particle field: slow-drifting points that shy away from the
//! pointer and link up with near neighbours.
//!
//! All state lives on [`ParticleField`]. The frontend owns one instance,
//! steps it once per animation frame and draws whatever it reads back;
//! nothing here touches a platform API.

use crate::constants::{
    DENSITY_DIVISOR, HUE_COOL, HUE_WARM, LINK_DISTANCE, MAX_PARTICLES, OPACITY_MIN,
    OPACITY_SPREAD, REPEL_RADIUS, REPEL_STRENGTH, SIZE_MIN, SIZE_SPREAD, SPEED_SPREAD,
};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub hue: f32,
}

/// Field tuning. `Default` is the current production tuning; earlier
/// revisions of the page ran a 12000 divisor with a cap of 120.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub density_divisor: f32,
    pub max_particles: usize,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub link_distance: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density_divisor: DENSITY_DIVISOR,
            max_particles: MAX_PARTICLES,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            link_distance: LINK_DISTANCE,
        }
    }
}

/// A pair of particles close enough to draw a connecting line between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// 1.0 when the endpoints coincide, fading to 0.0 at `link_distance`.
    pub strength: f32,
}

/// How many particles a canvas of the given size gets: area over the
/// density divisor, capped.
#[inline]
pub fn particle_count_for(width: f32, height: f32, params: &FieldParams) -> usize {
    (((width * height) / params.density_divisor).floor() as usize).min(params.max_particles)
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    /// Seeded so tests can pin the exact initial attributes.
    pub fn new(width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            params,
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn spawn(&mut self) {
        let count = particle_count_for(self.width, self.height, &self.params);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let vel = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * SPEED_SPREAD,
                (self.rng.gen::<f32>() - 0.5) * SPEED_SPREAD,
            );
            self.particles.push(Particle {
                pos,
                vel,
                size: self.rng.gen::<f32>() * SIZE_SPREAD + SIZE_MIN,
                opacity: self.rng.gen::<f32>() * OPACITY_SPREAD + OPACITY_MIN,
                hue: if self.rng.gen::<f32>() > 0.5 {
                    HUE_COOL
                } else {
                    HUE_WARM
                },
            });
        }
    }

    /// Drop the old population and reseed a fresh one for the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.spawn();
        log::debug!(
            "[field] rebuilt {}x{} with {} particles",
            width,
            height,
            self.particles.len()
        );
    }

    /// Advance every particle one frame: drift, pointer repulsion, then
    /// elastic reflection at the canvas edges. Positions are not clamped;
    /// a particle may overshoot an edge by one frame's displacement before
    /// the flipped velocity carries it back.
    pub fn step(&mut self, pointer: Vec2) {
        let (w, h) = (self.width, self.height);
        let params = self.params;
        for p in &mut self.particles {
            p.pos += p.vel;

            let delta = p.pos - pointer;
            let dist = delta.length();
            // A particle exactly under the pointer has no direction to be
            // pushed in; leave it to its own drift.
            if dist < params.repel_radius && dist > 0.0 {
                let force = (params.repel_radius - dist) / params.repel_radius;
                p.pos += (delta / dist) * force * params.repel_strength;
            }

            if p.pos.x < 0.0 || p.pos.x > w {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > h {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Collect every unordered pair within link range into `out`. Quadratic
    /// over the field; `max_particles` keeps the pass affordable. Distances
    /// are compared squared, the root is only taken for pairs that link.
    pub fn collect_links(&self, out: &mut Vec<Link>) {
        out.clear();
        let max_dist = self.params.link_distance;
        let max_sq = max_dist * max_dist;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let d_sq = self.particles[i].pos.distance_squared(self.particles[j].pos);
                if d_sq < max_sq {
                    out.push(Link {
                        a: i,
                        b: j,
                        strength: 1.0 - d_sq.sqrt() / max_dist,
                    });
                }
            }
        }
    }
}
