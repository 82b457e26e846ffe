//! Draw-surface capability
//!
//! The scene code only computes geometry and calls into a [`DrawSurface`].
//! The browser backend forwards to a 2D canvas; [`RecordingSurface`] keeps
//! the calls for headless runs and tests.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::Rect;

/// Sprite sheets and layer images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Player,
    Projectile,
    Gears,
    Enemy1,
    Enemy2,
    Drone,
    FireExplosion,
    Layer1,
    Layer2,
    Layer3,
    Layer4,
}

impl ImageId {
    pub const ALL: [ImageId; 11] = [
        ImageId::Player,
        ImageId::Projectile,
        ImageId::Gears,
        ImageId::Enemy1,
        ImageId::Enemy2,
        ImageId::Drone,
        ImageId::FireExplosion,
        ImageId::Layer1,
        ImageId::Layer2,
        ImageId::Layer3,
        ImageId::Layer4,
    ];

    /// Element id of the `<img>` holding this image
    pub fn dom_id(self) -> &'static str {
        match self {
            ImageId::Player => "player",
            ImageId::Projectile => "projectile",
            ImageId::Gears => "gears",
            ImageId::Enemy1 => "enemy1",
            ImageId::Enemy2 => "enemy2",
            ImageId::Drone => "drone",
            ImageId::FireExplosion => "fireExplosion",
            ImageId::Layer1 => "layer1",
            ImageId::Layer2 => "layer2",
            ImageId::Layer3 => "layer3",
            ImageId::Layer4 => "layer4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// 2D drawing operations the renderer needs
pub trait DrawSurface {
    /// Whether an image is loaded and drawable. Callers fall back to flat
    /// shapes otherwise.
    fn image_ready(&self, image: ImageId) -> bool;
    /// Blit `src` (whole image if `None`) scaled into `dest`
    fn draw_image(&mut self, image: ImageId, src: Option<Rect>, dest: Rect);
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_shadow(&mut self, offset: Vec2, color: &str);
    fn fill_text(&mut self, text: &str, pos: Vec2);
    fn clear(&mut self, rect: Rect);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image {
        image: ImageId,
        src: Option<Rect>,
        dest: Rect,
    },
    FillColor(String),
    FillRect(Rect),
    StrokeRect(Rect),
    Font(String),
    TextAlign(TextAlign),
    Shadow(Vec2, String),
    Text(String, Vec2),
    Clear(Rect),
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
}

/// Surface that records every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    ready: HashSet<ImageId>,
}

impl RecordingSurface {
    /// Surface where no image has loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface where every image is available
    pub fn with_all_images() -> Self {
        Self {
            calls: Vec::new(),
            ready: ImageId::ALL.into_iter().collect(),
        }
    }

    pub fn set_ready(&mut self, image: ImageId, ready: bool) {
        if ready {
            self.ready.insert(image);
        } else {
            self.ready.remove(&image);
        }
    }

    /// Images blitted, in draw order
    pub fn images_drawn(&self) -> Vec<ImageId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image { image, .. } => Some(*image),
                _ => None,
            })
            .collect()
    }

    /// Text drawn, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn image_ready(&self, image: ImageId) -> bool {
        self.ready.contains(&image)
    }

    fn draw_image(&mut self, image: ImageId, src: Option<Rect>, dest: Rect) {
        self.calls.push(DrawCall::Image { image, src, dest });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(DrawCall::FillColor(color.to_string()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::StrokeRect(rect));
    }

    fn set_font(&mut self, font: &str) {
        self.calls.push(DrawCall::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.calls.push(DrawCall::TextAlign(align));
    }

    fn set_shadow(&mut self, offset: Vec2, color: &str) {
        self.calls.push(DrawCall::Shadow(offset, color.to_string()));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        self.calls.push(DrawCall::Text(text.to_string(), pos));
    }

    fn clear(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Clear(rect));
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.calls.push(DrawCall::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.calls.push(DrawCall::Rotate(angle));
    }
}
