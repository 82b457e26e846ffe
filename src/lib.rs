//! Steam Raider - A side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic frame simulation (entities, collisions, game state)
//! - `renderer`: Draw-surface capability and scene drawing
//! - `platform`: Input bindings, frame clock and host session glue
//! - `audio`: Fire-and-forget music playback
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Fixed entity geometry and timings
pub mod consts {
    /// Player sprite frame size
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 190.0;
    /// Player spawn position (x never changes)
    pub const PLAYER_START_X: f32 = 20.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Vertical speed while a movement key is held (pixels per frame)
    pub const PLAYER_MAX_SPEED: f32 = 3.0;
    /// Last frame of the player sprite sheet before wrapping to 0
    pub const PLAYER_MAX_FRAME: u32 = 37;
    /// Muzzle offset relative to the player's top-left corner
    pub const MUZZLE_OFFSET_X: f32 = 80.0;
    pub const MUZZLE_OFFSET_Y: f32 = 30.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 3.0;
    pub const PROJECTILE_SPEED: f32 = 3.0;
    /// Projectiles vanish once past this fraction of the screen width
    pub const PROJECTILE_RANGE: f32 = 0.8;

    /// Particle (gear) sprite cell size and sheet layout
    pub const PARTICLE_SPRITE_SIZE: f32 = 50.0;
    pub const PARTICLE_SHEET_CELLS: u32 = 3;
    pub const PARTICLE_GRAVITY: f32 = 0.5;
    pub const PARTICLE_MAX_BOUNCES: u32 = 2;
    /// Vertical speed multiplier applied on each bounce
    pub const PARTICLE_BOUNCE_DAMPING: f32 = -0.7;

    /// Frames an enemy spends dying before it explodes
    pub const ENEMY_DYING_FRAMES: u32 = 50;
    /// Max jitter per axis while dying (pixels per frame)
    pub const ENEMY_DYING_JITTER: f32 = 5.0;
    /// Enemies spawn within this fraction of the screen height
    pub const ENEMY_SPAWN_BAND: f32 = 0.95;
    /// Drones released when a hive dies
    pub const HIVE_DRONE_COUNT: usize = 5;

    /// Explosion sprite sheet
    pub const EXPLOSION_FRAME_SIZE: f32 = 200.0;
    pub const EXPLOSION_FPS: f32 = 15.0;
    pub const EXPLOSION_MAX_FRAME: u32 = 8;
    /// Fire overlay frames drawn over dying enemies
    pub const FIRE_OVERLAY_FRAMES: u32 = 8;

    /// Parallax layer image size
    pub const LAYER_WIDTH: f32 = 1768.0;
    pub const LAYER_HEIGHT: f32 = 500.0;
    /// Speed multipliers for the three background layers
    pub const BACKGROUND_LAYER_SPEEDS: [f32; 3] = [0.2, 0.4, 1.0];
    /// Speed multiplier for the foreground layer drawn over everything
    pub const FOREGROUND_LAYER_SPEED: f32 = 1.5;
}
