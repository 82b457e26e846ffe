//! Collision detection and scoring
//!
//! Axis-aligned boxes only. Each frame every enemy is tested against the
//! player, then against every live projectile, in that order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::Entity;
use super::player::Player;

/// Axis-aligned rectangle (top-left corner and size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// Test two entities for overlap
#[inline]
pub fn check_collision(a: &impl Entity, b: &impl Entity) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Side effects the caller must apply after resolving one enemy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Net score change (already suppressed when the game is over)
    pub score_delta: i32,
    /// Particles to emit at the enemy's center
    pub particles: u32,
    /// The enemy was a hive and just died: release its drones
    pub release_drones: bool,
    /// The enemy rammed the player this frame
    pub rammed_player: bool,
    /// Projectiles that hit this enemy
    pub hits: u32,
}

/// Resolve the player and all live projectiles against one enemy
///
/// Dying enemies are ignored entirely, so an enemy can be scored and can
/// release drones at most once.
pub fn resolve_enemy(enemy: &mut Enemy, player: &mut Player, game_over: bool) -> CollisionReport {
    let mut report = CollisionReport::default();

    if !enemy.dying && check_collision(player, enemy) {
        enemy.start_dying();
        report.rammed_player = true;
        report.particles += enemy.score.max(0) as u32;
        report.release_drones = enemy.is_hive();
        if !game_over {
            report.score_delta -= 1;
        }
    }

    for projectile in player.projectiles.iter_mut() {
        if enemy.dying || projectile.marked_for_deletion {
            continue;
        }
        if !check_collision(projectile, enemy) {
            continue;
        }

        enemy.lives -= 1;
        projectile.marked_for_deletion = true;
        report.hits += 1;
        report.particles += 1;

        if enemy.lives <= 0 {
            enemy.start_dying();
            report.release_drones = enemy.is_hive();
            if !game_over {
                report.score_delta += enemy.score;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::enemy::EnemyKind;
    use crate::sim::projectile::Projectile;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(kind: EnemyKind, x: f32, y: f32) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(1);
        Enemy::at(kind, Vec2::new(x, y), &mut rng)
    }

    fn player() -> Player {
        // Player occupies (20,100)-(140,290)
        Player::new(&Settings::default())
    }

    #[test]
    fn test_overlap_rules() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::from_xywh(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::from_xywh(10.0, 0.0, 10.0, 10.0))); // touching
        assert!(!a.overlaps(&Rect::from_xywh(0.0, 20.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::from_xywh(2.0, 2.0, 1.0, 1.0))); // contained
    }

    #[test]
    fn test_projectile_kills_last_life() {
        let mut p = player();
        let mut e = enemy_at(EnemyKind::Angler1, 600.0, 100.0);
        e.lives = 1;
        p.projectiles.push(Projectile::new(Vec2::new(610.0, 120.0)));

        let report = resolve_enemy(&mut e, &mut p, false);
        assert!(e.dying);
        assert_eq!(report.score_delta, 5);
        assert_eq!(report.particles, 1);
        assert_eq!(report.hits, 1);
        assert!(!report.release_drones);
        assert!(p.projectiles[0].marked_for_deletion);
    }

    #[test]
    fn test_projectiles_stop_once_dying() {
        let mut p = player();
        let mut e = enemy_at(EnemyKind::Drone, 600.0, 100.0);
        e.lives = 1;
        p.projectiles.push(Projectile::new(Vec2::new(610.0, 120.0)));
        p.projectiles.push(Projectile::new(Vec2::new(612.0, 130.0)));

        let report = resolve_enemy(&mut e, &mut p, false);
        assert_eq!(report.hits, 1);
        assert!(!p.projectiles[1].marked_for_deletion);
        assert_eq!(e.lives, 0);
    }

    #[test]
    fn test_spent_projectile_hits_nothing() {
        let mut p = player();
        let mut e = enemy_at(EnemyKind::Angler1, 600.0, 100.0);
        let mut shot = Projectile::new(Vec2::new(610.0, 120.0));
        shot.marked_for_deletion = true;
        p.projectiles.push(shot);

        let report = resolve_enemy(&mut e, &mut p, false);
        assert_eq!(report, CollisionReport::default());
        assert_eq!(e.lives, 5);
    }

    #[test]
    fn test_ramming_player_penalizes_once() {
        let mut p = player();
        let mut e = enemy_at(EnemyKind::Angler2, 100.0, 150.0);

        let first = resolve_enemy(&mut e, &mut p, false);
        assert!(first.rammed_player);
        assert_eq!(first.score_delta, -1);
        assert_eq!(first.particles, 6);
        assert!(e.dying);

        // Still overlapping next frame, but already dying
        let second = resolve_enemy(&mut e, &mut p, false);
        assert_eq!(second, CollisionReport::default());
    }

    #[test]
    fn test_hive_releases_drones_on_ram_and_kill() {
        let mut p = player();
        let mut hive = enemy_at(EnemyKind::HiveWhale, 100.0, 150.0);
        assert!(resolve_enemy(&mut hive, &mut p, false).release_drones);

        let mut p = player();
        let mut hive = enemy_at(EnemyKind::HiveWhale, 600.0, 100.0);
        hive.lives = 2;
        p.projectiles.push(Projectile::new(Vec2::new(610.0, 120.0)));
        p.projectiles.push(Projectile::new(Vec2::new(620.0, 140.0)));
        let report = resolve_enemy(&mut hive, &mut p, false);
        assert!(report.release_drones);
        assert_eq!(report.score_delta, 20);
    }

    #[test]
    fn test_no_scoring_after_game_over() {
        let mut p = player();
        let mut e = enemy_at(EnemyKind::Angler1, 600.0, 100.0);
        e.lives = 1;
        p.projectiles.push(Projectile::new(Vec2::new(610.0, 120.0)));
        let report = resolve_enemy(&mut e, &mut p, true);
        assert!(e.dying);
        assert_eq!(report.score_delta, 0);

        let mut p = player();
        let mut e = enemy_at(EnemyKind::Angler1, 100.0, 150.0);
        assert_eq!(resolve_enemy(&mut e, &mut p, true).score_delta, 0);
    }
}
