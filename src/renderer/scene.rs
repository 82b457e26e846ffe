//! Draws a frame from read-only game state
//!
//! Z-order: background layers, HUD, player with projectiles, particles,
//! enemies, explosions, foreground layer.

use glam::Vec2;

use super::hud::draw_hud;
use super::surface::{DrawSurface, ImageId};
use crate::consts::*;
use crate::sim::{Enemy, EnemyKind, Entity, Explosion, GameState, Layer, Particle, Player, Rect};

const BACKGROUND_IMAGES: [ImageId; 3] = [ImageId::Layer1, ImageId::Layer2, ImageId::Layer3];
const SKY_COLOR: &str = "#6fb3d2";

pub fn draw_game(state: &GameState, surface: &mut impl DrawSurface) {
    for (i, layer) in state.background.layers.iter().enumerate() {
        let image = BACKGROUND_IMAGES.get(i).copied().unwrap_or(ImageId::Layer3);
        draw_layer(layer, image, i == 0, surface);
    }
    draw_hud(state, surface);
    draw_player(&state.player, state.debug, surface);
    for particle in &state.particles {
        draw_particle(particle, surface);
    }
    for enemy in &state.enemies {
        draw_enemy(enemy, state.debug, surface);
    }
    for explosion in &state.explosions {
        draw_explosion(explosion, surface);
    }
    draw_layer(&state.background.foreground, ImageId::Layer4, false, surface);
}

pub fn enemy_image(kind: EnemyKind) -> ImageId {
    match kind {
        EnemyKind::Angler1 => ImageId::Enemy1,
        EnemyKind::Angler2 => ImageId::Enemy2,
        EnemyKind::HiveWhale => ImageId::Enemy2,
        EnemyKind::Drone => ImageId::Drone,
    }
}

/// Draw a scrolling layer twice so the seam is never visible
fn draw_layer(layer: &Layer, image: ImageId, is_far: bool, surface: &mut impl DrawSurface) {
    if surface.image_ready(image) {
        surface.draw_image(image, None, Rect::from_xywh(layer.x, 0.0, layer.width, layer.height));
        surface.draw_image(
            image,
            None,
            Rect::from_xywh(layer.x + layer.width, 0.0, layer.width, layer.height),
        );
    } else if is_far {
        surface.set_fill_color(SKY_COLOR);
        surface.fill_rect(Rect::from_xywh(0.0, 0.0, layer.width, layer.height));
    }
}

fn draw_player(player: &Player, debug: bool, surface: &mut impl DrawSurface) {
    if debug {
        surface.stroke_rect(player.bounds());
    }

    for projectile in &player.projectiles {
        if surface.image_ready(ImageId::Projectile) {
            surface.draw_image(ImageId::Projectile, None, projectile.bounds());
        } else {
            surface.set_fill_color("yellow");
            surface.fill_rect(projectile.bounds());
        }
    }

    if surface.image_ready(ImageId::Player) {
        let src = Rect::new(
            Vec2::new(player.frame as f32 * player.size.x, 0.0),
            player.size,
        );
        surface.draw_image(ImageId::Player, Some(src), player.bounds());
    } else {
        surface.set_fill_color("green");
        surface.fill_rect(player.bounds());
    }
}

fn draw_particle(particle: &Particle, surface: &mut impl DrawSurface) {
    let size = particle.size;
    surface.save();
    surface.translate(particle.pos);
    surface.rotate(particle.angle);
    if surface.image_ready(ImageId::Gears) {
        let cell = PARTICLE_SPRITE_SIZE;
        let src = Rect::from_xywh(
            particle.frame.0 as f32 * cell,
            particle.frame.1 as f32 * cell,
            cell,
            cell,
        );
        surface.draw_image(
            ImageId::Gears,
            Some(src),
            Rect::from_xywh(-size * 0.5, -size * 0.5, size, size),
        );
    } else {
        surface.set_fill_color("gold");
        surface.fill_rect(Rect::from_xywh(0.0, 0.0, size, size));
    }
    surface.restore();
}

fn draw_enemy(enemy: &Enemy, debug: bool, surface: &mut impl DrawSurface) {
    let bounds = enemy.bounds();
    if debug {
        surface.stroke_rect(bounds);
        surface.set_font("20px Helvetica");
        surface.fill_text(&enemy.lives.to_string(), enemy.pos);
    }

    let image = enemy_image(enemy.kind);
    if surface.image_ready(image) {
        surface.draw_image(image, None, bounds);
    } else {
        surface.set_fill_color("red");
        surface.fill_rect(bounds);
        surface.set_fill_color("white");
        surface.set_font("15px Arial");
        surface.fill_text("No Img", enemy.pos + Vec2::new(0.0, 20.0));
    }

    if enemy.dying && surface.image_ready(ImageId::FireExplosion) {
        let frame = enemy.dying_timer % FIRE_OVERLAY_FRAMES;
        let src = Rect::from_xywh(
            frame as f32 * EXPLOSION_FRAME_SIZE,
            0.0,
            EXPLOSION_FRAME_SIZE,
            EXPLOSION_FRAME_SIZE,
        );
        surface.draw_image(ImageId::FireExplosion, Some(src), bounds);
    }
}

fn draw_explosion(explosion: &Explosion, surface: &mut impl DrawSurface) {
    if surface.image_ready(ImageId::FireExplosion) {
        let src = Rect::from_xywh(
            explosion.frame as f32 * EXPLOSION_FRAME_SIZE,
            0.0,
            EXPLOSION_FRAME_SIZE,
            EXPLOSION_FRAME_SIZE,
        );
        surface.draw_image(ImageId::FireExplosion, Some(src), explosion.bounds());
    } else {
        surface.set_fill_color("orange");
        surface.fill_rect(explosion.bounds());
    }
}
