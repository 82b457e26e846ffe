//! Game state and core simulation types
//!
//! `GameState` owns every entity collection. Entities get what they need
//! from it through a `SimContext` and never hold references back.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::enemy::{Enemy, EnemyKind};
use super::entity::{Entity, SimContext};
use super::explosion::Explosion;
use super::gauge::Gauge;
use super::particle::Particle;
use super::player::Player;
use crate::settings::Settings;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Clock running, scoring and spawning enabled
    Running,
    /// Time is up. Entities still animate but nothing scores or spawns.
    GameOver,
}

/// How a finished round went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Serializable summary of the state, for logs and tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: i32,
    pub game_time_ms: f32,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    pub ammo: u32,
    pub player_y: f32,
    pub projectiles: usize,
    pub enemies: usize,
    pub dying_enemies: usize,
    pub particles: usize,
    pub explosions: usize,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub width: f32,
    pub height: f32,
    /// Global scroll speed
    pub speed: f32,
    /// Elapsed round time (ms)
    pub game_time: f32,
    pub time_limit: f32,
    /// Score may go negative
    pub score: i32,
    pub winning_score: i32,
    pub phase: GamePhase,
    /// Draw hitboxes and enemy lives
    pub debug: bool,
    pub player: Player,
    pub background: Background,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    /// Enemy spawn cadence
    pub spawn_timer: Gauge,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "New game {}x{} (seed {}, limit {}ms)",
            settings.width,
            settings.height,
            settings.seed,
            settings.time_limit_ms
        );
        Self {
            seed: settings.seed,
            rng: Pcg32::seed_from_u64(settings.seed),
            width: settings.width,
            height: settings.height,
            speed: settings.scroll_speed,
            game_time: 0.0,
            time_limit: settings.time_limit_ms,
            score: 0,
            winning_score: settings.winning_score,
            phase: GamePhase::Running,
            debug: false,
            player: Player::new(settings),
            background: Background::default(),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            spawn_timer: Gauge::new(settings.enemy_interval_ms),
        }
    }

    /// Read-only view handed to entity updates
    pub fn context(&self) -> SimContext {
        SimContext {
            speed: self.speed,
            width: self.width,
            height: self.height,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Result of the round once time is up
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        Some(if self.score > self.winning_score {
            Outcome::Won
        } else {
            Outcome::Lost
        })
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        log::debug!("Debug overlay {}", if self.debug { "on" } else { "off" });
    }

    /// Start a new round
    ///
    /// Clears every entity collection and resets the clock and score. The
    /// player is moved back and re-armed rather than rebuilt, and the
    /// background keeps its scroll offsets.
    pub fn restart(&mut self) {
        self.score = 0;
        self.game_time = 0.0;
        self.phase = GamePhase::Running;
        self.enemies.clear();
        self.particles.clear();
        self.explosions.clear();
        self.spawn_timer.reset();
        self.player.reset();
        log::info!("Game restarted");
    }

    /// Spawn one enemy chosen by weighted draw
    pub fn add_enemy(&mut self) {
        let kind = EnemyKind::random_spawn(&mut self.rng);
        let ctx = self.context();
        let enemy = Enemy::spawn(kind, &ctx, &mut self.rng);
        log::debug!("Spawned {:?} at y={:.0}", kind, enemy.pos.y);
        self.enemies.push(enemy);
    }

    pub fn add_explosion(&mut self, enemy: &Enemy) {
        self.explosions.push(Explosion::centered_on(&enemy.bounds()));
    }

    /// Emit `count` particles at `pos`
    pub fn emit_particles(&mut self, pos: Vec2, count: u32) {
        for _ in 0..count {
            let particle = Particle::new(pos, &mut self.rng);
            self.particles.push(particle);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            game_time_ms: self.game_time,
            phase: self.phase,
            outcome: self.outcome(),
            ammo: self.player.ammo.amount(),
            player_y: self.player.pos.y,
            projectiles: self.player.projectiles.len(),
            enemies: self.enemies.len(),
            dying_enemies: self.enemies.iter().filter(|e| e.dying).count(),
            particles: self.particles.len(),
            explosions: self.explosions.len(),
        }
    }
}
