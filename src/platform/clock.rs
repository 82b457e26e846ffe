//! Frame loop driven by host timestamps
//!
//! The host calls [`GameLoop::frame`] with a monotonically increasing
//! timestamp (ms). The loop computes its own delta, drops frames whose delta
//! is implausibly large (stalled or backgrounded host) and tells the host
//! whether to keep requesting frames.

use crate::platform::KeySet;
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Delta too large: nothing was simulated. Request the next frame.
    Dropped,
    /// Simulated one step. Request the next frame.
    Advanced,
    /// Simulated one step and the round is over. Stop requesting frames.
    Halted,
}

impl FrameOutcome {
    pub fn wants_next_frame(self) -> bool {
        !matches!(self, FrameOutcome::Halted)
    }

    pub fn simulated(self) -> bool {
        !matches!(self, FrameOutcome::Dropped)
    }
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    pub state: GameState,
    last_time: f64,
    max_delta: f64,
    running: bool,
}

impl GameLoop {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings),
            last_time: 0.0,
            max_delta: settings.max_frame_delta_ms,
            running: true,
        }
    }

    /// Whether the host should still be scheduling frames
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame at host time `timestamp`
    pub fn frame(&mut self, timestamp: f64, keys: &KeySet) -> FrameOutcome {
        let delta = timestamp - self.last_time;
        self.last_time = timestamp;

        if delta > self.max_delta {
            log::debug!("Dropped frame with {:.0}ms delta", delta);
            return FrameOutcome::Dropped;
        }

        tick(&mut self.state, keys, delta as f32);

        if self.state.is_over() {
            self.running = false;
            FrameOutcome::Halted
        } else {
            FrameOutcome::Advanced
        }
    }

    /// Reset the round and re-arm the loop at host time `now`
    ///
    /// Returns true if the loop had halted, meaning the host must start
    /// requesting frames again.
    pub fn restart(&mut self, now: f64) -> bool {
        let was_halted = !self.running;
        self.state.restart();
        self.last_time = now;
        self.running = true;
        was_halted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Snapshot;

    fn game_loop() -> GameLoop {
        GameLoop::new(&Settings {
            seed: 77,
            ..Settings::default()
        })
    }

    fn snapshot_with_layers(l: &GameLoop) -> (Snapshot, Vec<f32>) {
        let layers = l.state.background.layers.iter().map(|l| l.x).collect();
        (l.state.snapshot(), layers)
    }

    #[test]
    fn test_stalled_frame_is_dropped() {
        let keys = KeySet::default();
        let mut l = game_loop();

        // dt sequence 0, 16, 1200, 16
        assert_eq!(l.frame(0.0, &keys), FrameOutcome::Advanced);
        assert_eq!(l.frame(16.0, &keys), FrameOutcome::Advanced);
        let before = snapshot_with_layers(&l);

        assert_eq!(l.frame(1216.0, &keys), FrameOutcome::Dropped);
        assert_eq!(snapshot_with_layers(&l), before);

        assert_eq!(l.frame(1232.0, &keys), FrameOutcome::Advanced);
        assert_eq!(l.state.game_time, 32.0);
    }

    #[test]
    fn test_halts_on_game_over_and_rearms() {
        let keys = KeySet::default();
        let mut l = GameLoop::new(&Settings {
            time_limit_ms: 100.0,
            ..Settings::default()
        });
        let mut t = 0.0;
        let mut outcome = FrameOutcome::Advanced;
        while outcome.wants_next_frame() {
            t += 16.0;
            outcome = l.frame(t, &keys);
        }
        assert_eq!(outcome, FrameOutcome::Halted);
        assert!(!l.is_running());

        assert!(l.restart(5000.0));
        assert!(l.is_running());
        assert_eq!(l.state.game_time, 0.0);
        // Delta measured from the restart time, so no dropped frame
        assert_eq!(l.frame(5016.0, &keys), FrameOutcome::Advanced);
        assert_eq!(l.state.game_time, 16.0);

        // Restarting a running loop needs no re-arm
        assert!(!l.restart(6000.0));
    }
}
