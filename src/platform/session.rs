//! Host-facing game session
//!
//! One object per page: the host forwards key events, animation frames and
//! restart clicks. Music starts on the first interaction.

use crate::audio::{AudioSink, MusicPlayer};
use crate::platform::{FrameOutcome, GameLoop, KeyAction, KeySet};
use crate::renderer::{DrawSurface, draw_game};
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

pub struct Session<A: AudioSink> {
    game_loop: GameLoop,
    keys: KeySet,
    music: MusicPlayer<A>,
}

impl<A: AudioSink> Session<A> {
    pub fn new(settings: &Settings, sink: A) -> Self {
        Self {
            game_loop: GameLoop::new(settings),
            keys: KeySet::default(),
            music: MusicPlayer::new(sink, settings.music_volume),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.game_loop.state
    }

    pub fn is_running(&self) -> bool {
        self.game_loop.is_running()
    }

    pub fn music(&self) -> &MusicPlayer<A> {
        &self.music
    }

    /// Handle a `keydown` with its DOM key value
    pub fn key_down(&mut self, key: &str) {
        self.music.ensure_playing();
        match KeyAction::from_key(key) {
            Some(KeyAction::Move(k)) => self.keys.press(k),
            Some(KeyAction::Fire) => self.game_loop.state.player.shoot_top(),
            Some(KeyAction::ToggleDebug) => self.game_loop.state.toggle_debug(),
            None => {}
        }
    }

    /// Handle a `keyup` with its DOM key value
    pub fn key_up(&mut self, key: &str) {
        if let Some(KeyAction::Move(k)) = KeyAction::from_key(key) {
            self.keys.release(k);
        }
    }

    /// Clear, step and draw one animation frame
    pub fn frame(&mut self, timestamp: f64, surface: &mut impl DrawSurface) -> FrameOutcome {
        let outcome = self.game_loop.frame(timestamp, &self.keys);
        if outcome.simulated() {
            let state = &self.game_loop.state;
            surface.clear(Rect::from_xywh(0.0, 0.0, state.width, state.height));
            draw_game(state, surface);
        }
        outcome
    }

    /// Start a new round at host time `now`
    ///
    /// Returns true if the host must resume requesting frames.
    pub fn restart(&mut self, now: f64) -> bool {
        let was_halted = self.game_loop.restart(now);
        self.music.ensure_playing();
        was_halted
    }
}
