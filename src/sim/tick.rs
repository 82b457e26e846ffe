//! Per-frame simulation step
//!
//! Movement is in pixels per frame; timers (round clock, ammo, spawns,
//! explosion frames) run on the frame delta in milliseconds.

use super::collision::resolve_enemy;
use super::enemy::EnemyEvent;
use super::entity::retain_live;
use super::state::{GamePhase, GameState};
use crate::platform::KeySet;

/// Advance the game by one frame of `dt` milliseconds
pub fn tick(state: &mut GameState, keys: &KeySet, dt: f32) {
    // Round clock
    if !state.is_over() {
        state.game_time += dt;
        if state.game_time >= state.time_limit {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Time up: score {} ({:?})",
                state.score,
                state.outcome()
            );
        }
    }
    let game_over = state.is_over();
    let ctx = state.context();

    // Cosmetic layers and the player
    state.background.update(&ctx);
    state.player.update(keys, &ctx, dt);

    for particle in &mut state.particles {
        particle.update(&ctx);
    }
    retain_live(&mut state.particles);

    for explosion in &mut state.explosions {
        explosion.update(&ctx, dt);
    }
    retain_live(&mut state.explosions);

    // Enemies, in spawn order. Drones released this frame join the end of
    // the list after the pass and are first updated next frame.
    let mut released = Vec::new();
    for i in 0..state.enemies.len() {
        let event = state.enemies[i].update(&ctx, &mut state.rng);
        if event == EnemyEvent::Exploded {
            let enemy = state.enemies[i].clone();
            state.add_explosion(&enemy);
        }

        let report = resolve_enemy(&mut state.enemies[i], &mut state.player, game_over);
        if report.particles > 0 {
            let center = state.enemies[i].center();
            state.emit_particles(center, report.particles);
        }
        if report.release_drones {
            let drones = state.enemies[i].release_drones(&mut state.rng);
            log::debug!("Hive burst: {} drones released", drones.len());
            released.extend(drones);
        }
        state.score += report.score_delta;
    }
    state.enemies.extend(released);
    retain_live(&mut state.enemies);

    // Spawning
    if !game_over && state.spawn_timer.advance(dt) {
        state.add_enemy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::enemy::{Enemy, EnemyKind};
    use crate::sim::projectile::Projectile;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(&Settings {
            seed: 1234,
            ..Settings::default()
        })
    }

    fn place(state: &mut GameState, kind: EnemyKind, x: f32, y: f32) -> usize {
        let mut enemy = Enemy::at(kind, Vec2::new(x, y), &mut state.rng);
        // Stationary relative to the screen so positions are predictable
        enemy.speed_x = state.speed;
        state.enemies.push(enemy);
        state.enemies.len() - 1
    }

    #[test]
    fn test_projectile_kills_enemy_with_one_life() {
        let mut state = new_state();
        let idx = place(&mut state, EnemyKind::Angler1, 600.0, 100.0);
        state.enemies[idx].lives = 1;
        state
            .player
            .projectiles
            .push(Projectile::new(Vec2::new(595.0, 150.0)));

        tick(&mut state, &KeySet::default(), 16.0);

        assert!(state.enemies[0].dying);
        assert_eq!(state.score, 5);
        assert_eq!(state.particles.len(), 1);
        // Marked this frame, dropped by the player's next update
        assert!(state.player.projectiles[0].marked_for_deletion);
        tick(&mut state, &KeySet::default(), 16.0);
        assert!(state.player.projectiles.is_empty());
    }

    #[test]
    fn test_one_projectile_damages_one_enemy() {
        let mut state = new_state();
        place(&mut state, EnemyKind::Angler1, 600.0, 100.0);
        place(&mut state, EnemyKind::Angler2, 600.0, 100.0);
        state
            .player
            .projectiles
            .push(Projectile::new(Vec2::new(620.0, 150.0)));

        tick(&mut state, &KeySet::default(), 16.0);

        assert_eq!(state.enemies[0].lives, 4);
        assert_eq!(state.enemies[1].lives, 6);
    }

    #[test]
    fn test_ramming_costs_one_point_and_bursts_particles() {
        let mut state = new_state();
        place(&mut state, EnemyKind::Angler2, 100.0, 150.0);

        tick(&mut state, &KeySet::default(), 16.0);
        assert_eq!(state.score, -1);
        assert_eq!(state.particles.len(), 6);

        // Overlap persists but the penalty does not repeat
        tick(&mut state, &KeySet::default(), 16.0);
        assert_eq!(state.score, -1);
    }

    #[test]
    fn test_hive_death_spawns_five_drones() {
        let mut state = new_state();
        place(&mut state, EnemyKind::HiveWhale, 100.0, 150.0);

        tick(&mut state, &KeySet::default(), 16.0);

        let drones = state
            .enemies
            .iter()
            .filter(|e| e.kind == EnemyKind::Drone)
            .count();
        assert_eq!(drones, 5);
        assert_eq!(state.enemies.len(), 6);
        assert_eq!(state.enemies[0].kind, EnemyKind::HiveWhale);
    }

    #[test]
    fn test_dying_enemy_explodes_once() {
        let mut state = new_state();
        let idx = place(&mut state, EnemyKind::Angler1, 800.0, 300.0);
        state.enemies[idx].start_dying();

        for _ in 0..ENEMY_DYING_FRAMES {
            tick(&mut state, &KeySet::default(), 1.0);
        }
        assert_eq!(state.enemies.len(), 1);
        assert!(state.explosions.is_empty());

        tick(&mut state, &KeySet::default(), 1.0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.explosions.len(), 1);
    }

    #[test]
    fn test_escaped_enemy_leaves_quietly() {
        let mut state = new_state();
        let idx = place(&mut state, EnemyKind::Angler1, -99.5, 400.0);
        state.enemies[idx].speed_x = -1.0;

        tick(&mut state, &KeySet::default(), 16.0);
        assert!(state.enemies.is_empty());
        assert!(state.explosions.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_spawns_after_interval() {
        let mut state = new_state();
        for _ in 0..125 {
            tick(&mut state, &KeySet::default(), 16.0);
        }
        assert!(state.enemies.is_empty()); // 2000ms, not yet past the interval
        tick(&mut state, &KeySet::default(), 16.0);
        assert_eq!(state.enemies.len(), 1);
        assert_ne!(state.enemies[0].kind, EnemyKind::Drone);
    }

    #[test]
    fn test_game_over_exactly_at_limit() {
        let mut state = GameState::new(&Settings {
            time_limit_ms: 100.0,
            ..Settings::default()
        });
        tick(&mut state, &KeySet::default(), 50.0);
        assert!(!state.is_over());
        tick(&mut state, &KeySet::default(), 50.0);
        assert!(state.is_over());
        assert_eq!(state.game_time, 100.0);

        // Clock stops, no scoring, no spawning, but things keep moving
        let idx = place(&mut state, EnemyKind::Angler1, 600.0, 100.0);
        state.enemies[idx].lives = 1;
        state
            .player
            .projectiles
            .push(Projectile::new(Vec2::new(595.0, 150.0)));
        let layer_x = state.background.layers[2].x;
        for _ in 0..300 {
            tick(&mut state, &KeySet::default(), 16.0);
        }
        assert_eq!(state.game_time, 100.0);
        assert_eq!(state.score, 0);
        // The shot enemy still died and exploded, and nothing new arrived
        assert!(state.enemies.is_empty());
        assert_ne!(state.background.layers[2].x, layer_x);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = new_state();
        let mut b = new_state();
        let mut keys = KeySet::default();
        keys.press(crate::platform::Key::Down);
        for frame in 0..600 {
            if frame % 7 == 0 {
                a.player.shoot_top();
                b.player.shoot_top();
            }
            tick(&mut a, &keys, 16.7);
            tick(&mut b, &keys, 16.7);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    proptest! {
        #[test]
        fn prop_lives_frozen_once_dying(seed in any::<u64>(), frames in 50usize..400) {
            let mut state = GameState::new(&Settings { seed, ..Settings::default() });
            let keys = KeySet::default();
            for frame in 0..frames {
                if frame % 3 == 0 {
                    state.player.shoot_top();
                }
                tick(&mut state, &keys, 16.0);
                for e in state.enemies.iter().filter(|e| e.dying) {
                    prop_assert_eq!(e.lives, 0);
                    prop_assert_eq!(e.score, e.kind.stats().score);
                }
                for e in state.enemies.iter().filter(|e| !e.dying) {
                    prop_assert!(e.lives > 0);
                }
            }
        }
    }
}
