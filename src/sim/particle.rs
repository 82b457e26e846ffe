//! Cosmetic gear particles
//!
//! Thrown out in bursts when enemies are hit. They fall under gravity, spin,
//! bounce at most twice near the bottom edge and never collide with anything.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Entity, SimContext};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// x is subtracted each frame (positive flies left), y is added
    pub vel: Vec2,
    pub gravity: f32,
    pub angle: f32,
    /// Angular velocity (radians per frame)
    pub spin: f32,
    /// Rendered edge length (sprite size times a random scale)
    pub size: f32,
    /// Sprite sheet cell
    pub frame: (u32, u32),
    pub bounces: u32,
    /// Distance above the screen bottom where this particle bounces
    pub bounce_boundary: f32,
    pub marked_for_deletion: bool,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        // Scale is quantized to one decimal (0.5, 0.6 .. 1.0)
        let scale = ((rng.random::<f32>() * 0.5 + 0.5) * 10.0).round() / 10.0;
        Self {
            pos,
            vel: Vec2::new(
                rng.random::<f32>() * 6.0 - 3.0,
                rng.random::<f32>() * -15.0,
            ),
            gravity: PARTICLE_GRAVITY,
            angle: 0.0,
            spin: rng.random::<f32>() * 0.2 - 0.1,
            size: PARTICLE_SPRITE_SIZE * scale,
            frame: (
                rng.random_range(0..PARTICLE_SHEET_CELLS),
                rng.random_range(0..PARTICLE_SHEET_CELLS),
            ),
            bounces: 0,
            bounce_boundary: rng.random::<f32>() * 80.0 + 60.0,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &SimContext) {
        self.angle += self.spin;
        self.vel.y += self.gravity;
        self.pos.x -= self.vel.x + ctx.speed;
        self.pos.y += self.vel.y;

        if self.pos.y > ctx.height + self.size || self.pos.x < -self.size {
            self.marked_for_deletion = true;
        }

        if self.pos.y > ctx.height - self.bounce_boundary && self.bounces < PARTICLE_MAX_BOUNCES {
            self.bounces += 1;
            self.vel.y *= PARTICLE_BOUNCE_DAMPING;
        }
    }
}

impl Entity for Particle {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }

    fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}
