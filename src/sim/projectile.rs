//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Entity, SimContext};
use crate::consts::*;

/// A shot travelling right at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &SimContext) {
        self.pos.x += self.speed;
        if self.pos.x > ctx.width * PROJECTILE_RANGE {
            self.marked_for_deletion = true;
        }
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}
