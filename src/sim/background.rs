//! Parallax scrolling layers
//!
//! Purely cosmetic: layers never collide and never get deleted.

use serde::{Deserialize, Serialize};

use super::entity::SimContext;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Horizontal offset in (-width, 0]
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Multiplier applied to the global scroll speed
    pub speed_modifier: f32,
}

impl Layer {
    pub fn new(speed_modifier: f32) -> Self {
        Self {
            x: 0.0,
            width: LAYER_WIDTH,
            height: LAYER_HEIGHT,
            speed_modifier,
        }
    }

    pub fn update(&mut self, ctx: &SimContext) {
        if self.x <= -self.width {
            self.x = 0.0;
        }
        self.x -= ctx.speed * self.speed_modifier;
    }
}

/// Three background layers plus one foreground layer drawn over the action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub layers: Vec<Layer>,
    pub foreground: Layer,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            layers: BACKGROUND_LAYER_SPEEDS.iter().map(|&s| Layer::new(s)).collect(),
            foreground: Layer::new(FOREGROUND_LAYER_SPEED),
        }
    }
}

impl Background {
    pub fn update(&mut self, ctx: &SimContext) {
        for layer in &mut self.layers {
            layer.update(ctx);
        }
        self.foreground.update(ctx);
    }
}
