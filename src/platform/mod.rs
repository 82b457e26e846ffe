//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame timing
//! - Keyboard input
//! - The session wiring input, audio and drawing together

pub mod clock;
pub mod input;
pub mod session;

pub use clock::{FrameOutcome, GameLoop};
pub use input::{Key, KeyAction, KeySet};
pub use session::Session;
