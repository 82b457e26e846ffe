//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies beyond the key-set

pub mod background;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod explosion;
pub mod gauge;
pub mod particle;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use background::{Background, Layer};
pub use collision::{CollisionReport, Rect, check_collision, resolve_enemy};
pub use enemy::{Enemy, EnemyEvent, EnemyKind, EnemyStats};
pub use entity::{Entity, SimContext, retain_live};
pub use explosion::Explosion;
pub use gauge::{Gauge, ResourceGauge};
pub use particle::Particle;
pub use player::Player;
pub use projectile::Projectile;
pub use state::{GamePhase, GameState, Outcome, Snapshot};
pub use tick::tick;
