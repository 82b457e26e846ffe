//! Enemy variants and their lifecycle
//!
//! Every enemy is `Active` until it runs out of lives or rams the player,
//! then `Dying` for a fixed number of frames (jittering in place), then
//! removed with an explosion. Enemies that scroll off the left edge while
//! active are removed quietly: no explosion, no score.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Entity, SimContext};
use crate::consts::*;

/// Enemy variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Angler1,
    Angler2,
    /// Releases drones when destroyed
    HiveWhale,
    /// Only ever released by a dying hive
    Drone,
}

/// Per-variant constants
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStats {
    pub size: Vec2,
    pub lives: i32,
    pub score: i32,
    /// Leftward speed magnitude range (pixels per frame)
    pub speed: Range<f32>,
    pub spawns_drones: bool,
}

impl EnemyKind {
    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Angler1 => EnemyStats {
                size: Vec2::new(100.0, 100.0),
                lives: 5,
                score: 5,
                speed: 0.5..2.0,
                spawns_drones: false,
            },
            EnemyKind::Angler2 => EnemyStats {
                size: Vec2::new(120.0, 120.0),
                lives: 6,
                score: 6,
                speed: 0.5..2.0,
                spawns_drones: false,
            },
            EnemyKind::HiveWhale => EnemyStats {
                size: Vec2::new(150.0, 150.0),
                lives: 20,
                score: 20,
                speed: 0.2..1.4,
                spawns_drones: true,
            },
            EnemyKind::Drone => EnemyStats {
                size: Vec2::new(115.0, 95.0),
                lives: 3,
                score: 3,
                speed: 0.5..4.7,
                spawns_drones: false,
            },
        }
    }

    /// Weighted spawn draw: 30% Angler1, 30% Angler2, 40% HiveWhale
    pub fn random_spawn(rng: &mut impl Rng) -> Self {
        let roll: f32 = rng.random();
        if roll < 0.3 {
            EnemyKind::Angler1
        } else if roll < 0.6 {
            EnemyKind::Angler2
        } else {
            EnemyKind::HiveWhale
        }
    }
}

/// What happened to an enemy during its own update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyEvent {
    None,
    /// Death animation finished; an explosion should be created
    Exploded,
    /// Scrolled off the left edge while active
    Escaped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (negative = leftward)
    pub speed_x: f32,
    pub lives: i32,
    pub score: i32,
    pub dying: bool,
    /// Frames spent dying
    pub dying_timer: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// Spawn a regular enemy at the right edge with a random height
    pub fn spawn(kind: EnemyKind, ctx: &SimContext, rng: &mut impl Rng) -> Self {
        let stats = kind.stats();
        let y = rng.random::<f32>() * (ctx.height * ENEMY_SPAWN_BAND - stats.size.y);
        Self::at(kind, Vec2::new(ctx.width, y), rng)
    }

    /// Spawn an enemy at an explicit position
    pub fn at(kind: EnemyKind, pos: Vec2, rng: &mut impl Rng) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos,
            size: stats.size,
            speed_x: -rng.random_range(stats.speed),
            lives: stats.lives,
            score: stats.score,
            dying: false,
            dying_timer: 0,
            marked_for_deletion: false,
        }
    }

    /// Release a hive's drones scattered over its upper half
    pub fn release_drones(&self, rng: &mut impl Rng) -> Vec<Enemy> {
        (0..HIVE_DRONE_COUNT)
            .map(|_| {
                let pos = Vec2::new(
                    self.pos.x + rng.random::<f32>() * self.size.x,
                    self.pos.y + rng.random::<f32>() * self.size.y * 0.5,
                );
                Enemy::at(EnemyKind::Drone, pos, rng)
            })
            .collect()
    }

    pub fn is_hive(&self) -> bool {
        self.kind.stats().spawns_drones
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Enter the dying state. Calling this again while dying does nothing.
    pub fn start_dying(&mut self) {
        if !self.dying {
            self.dying = true;
            self.lives = 0;
        }
    }

    pub fn update(&mut self, ctx: &SimContext, rng: &mut impl Rng) -> EnemyEvent {
        if self.marked_for_deletion {
            return EnemyEvent::None;
        }

        if self.dying {
            self.pos.x += rng.random_range(-ENEMY_DYING_JITTER..ENEMY_DYING_JITTER);
            self.pos.y += rng.random_range(-ENEMY_DYING_JITTER..ENEMY_DYING_JITTER);
            self.dying_timer += 1;
            if self.dying_timer > ENEMY_DYING_FRAMES {
                self.marked_for_deletion = true;
                return EnemyEvent::Exploded;
            }
            return EnemyEvent::None;
        }

        self.pos.x += self.speed_x - ctx.speed;
        if self.pos.x + self.size.x < 0.0 {
            self.marked_for_deletion = true;
            return EnemyEvent::Escaped;
        }
        EnemyEvent::None
    }
}

impl Entity for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}
