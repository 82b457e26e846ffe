//! Game settings and tuning
//!
//! Every field has a default, so a settings file only needs the values it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Global scroll speed (pixels per frame)
    pub scroll_speed: f32,

    // === Round ===
    /// Round length in milliseconds
    pub time_limit_ms: f32,
    /// Score the player must exceed to win
    pub winning_score: i32,
    /// Milliseconds between enemy spawns
    pub enemy_interval_ms: f32,

    // === Ammo ===
    pub start_ammo: u32,
    pub max_ammo: u32,
    /// Milliseconds to regenerate one round
    pub ammo_interval_ms: f32,

    // === Loop ===
    /// Frames whose delta exceeds this are dropped entirely
    pub max_frame_delta_ms: f64,

    // === Audio ===
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    /// RNG seed for the simulation
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 500.0,
            scroll_speed: 1.0,

            time_limit_ms: 30_000.0,
            winning_score: 80,
            enemy_interval_ms: 2000.0,

            start_ammo: 20,
            max_ammo: 50,
            ammo_interval_ms: 350.0,

            max_frame_delta_ms: 1000.0,

            music_volume: 0.5,

            seed: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "playfield must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.time_limit_ms <= 0.0 {
            return Err(SettingsError::Invalid("time_limit_ms must be positive".into()));
        }
        if self.enemy_interval_ms <= 0.0 || self.ammo_interval_ms <= 0.0 {
            return Err(SettingsError::Invalid("gauge intervals must be positive".into()));
        }
        if self.start_ammo > self.max_ammo {
            return Err(SettingsError::Invalid(format!(
                "start_ammo {} exceeds max_ammo {}",
                self.start_ammo, self.max_ammo
            )));
        }
        if self.max_frame_delta_ms <= 0.0 {
            return Err(SettingsError::Invalid("max_frame_delta_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(SettingsError::Invalid(format!(
                "music_volume {} outside 0.0 - 1.0",
                self.music_volume
            )));
        }
        Ok(())
    }
}
