//! The player's craft
//!
//! Moves vertically only, clamped so at most half of it leaves the screen.
//! Shots are limited by an ammo pool that refills over time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Entity, SimContext, retain_live};
use super::gauge::ResourceGauge;
use super::projectile::Projectile;
use crate::consts::*;
use crate::platform::{Key, KeySet};
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Current vertical speed (derived from held keys each frame)
    pub speed_y: f32,
    pub max_speed: f32,
    /// Sprite frame (cosmetic, wraps at `PLAYER_MAX_FRAME`)
    pub frame: u32,
    pub ammo: ResourceGauge,
    /// Active projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    start_ammo: u32,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed_y: 0.0,
            max_speed: PLAYER_MAX_SPEED,
            frame: 0,
            ammo: ResourceGauge::new(
                settings.start_ammo,
                settings.max_ammo,
                settings.ammo_interval_ms,
            ),
            projectiles: Vec::new(),
            start_ammo: settings.start_ammo,
        }
    }

    pub fn update(&mut self, keys: &KeySet, ctx: &SimContext, dt: f32) {
        self.speed_y = if keys.contains(Key::Up) {
            -self.max_speed
        } else if keys.contains(Key::Down) {
            self.max_speed
        } else {
            0.0
        };

        self.pos.y += self.speed_y;
        let half = self.size.y * 0.5;
        self.pos.y = self.pos.y.clamp(-half, ctx.height - half);

        for projectile in &mut self.projectiles {
            projectile.update(ctx);
        }
        retain_live(&mut self.projectiles);

        self.frame = if self.frame < PLAYER_MAX_FRAME {
            self.frame + 1
        } else {
            0
        };

        self.ammo.advance(dt);
    }

    /// Fire from the top muzzle. Without ammo nothing happens.
    pub fn shoot_top(&mut self) {
        if self.ammo.try_take() {
            self.projectiles.push(Projectile::new(
                self.pos + Vec2::new(MUZZLE_OFFSET_X, MUZZLE_OFFSET_Y),
            ));
        }
    }

    /// Back to the spawn point with a fresh magazine and no shots in flight
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.speed_y = 0.0;
        self.projectiles.clear();
        self.ammo.reset(self.start_ammo);
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    fn is_marked_for_deletion(&self) -> bool {
        false
    }
}
