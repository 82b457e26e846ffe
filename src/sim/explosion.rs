//! Explosion animations left behind by destroyed enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Entity, SimContext};
use super::gauge::Gauge;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub size: Vec2,
    /// Current sprite frame
    pub frame: u32,
    pub frame_timer: Gauge,
    pub marked_for_deletion: bool,
}

impl Explosion {
    /// Create an explosion centered on the given rectangle
    pub fn centered_on(bounds: &Rect) -> Self {
        let size = Vec2::splat(EXPLOSION_FRAME_SIZE);
        Self {
            pos: bounds.center() - size * 0.5,
            size,
            frame: 0,
            frame_timer: Gauge::new(1000.0 / EXPLOSION_FPS),
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &SimContext, dt: f32) {
        self.pos.x -= ctx.speed;
        if self.frame_timer.advance(dt) {
            self.frame += 1;
        }
        if self.frame > EXPLOSION_MAX_FRAME {
            self.marked_for_deletion = true;
        }
    }
}

impl Entity for Explosion {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}
