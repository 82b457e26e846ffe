//! 2D rendering module
//!
//! Drawing is expressed against the [`DrawSurface`] trait. The browser build
//! backs it with a canvas 2D context.

pub mod hud;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_game;
pub use surface::{DrawCall, DrawSurface, ImageId, RecordingSurface, TextAlign};
