//! Background music
//!
//! Playback is fire-and-forget: the browser may refuse to play until the
//! user has interacted with the page, so failures are logged and ignored.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Something that can play a single looping track
pub trait AudioSink {
    fn play(&mut self) -> Result<(), AudioError>;
    fn is_paused(&self) -> bool;
    fn set_looping(&mut self, looping: bool);
    /// Volume in 0.0 - 1.0
    fn set_volume(&mut self, volume: f32);
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self) -> Result<(), AudioError> {
        (**self).play()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn set_looping(&mut self, looping: bool) {
        (**self).set_looping(looping)
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume)
    }
}

/// Looping music track
pub struct MusicPlayer<S: AudioSink> {
    sink: S,
}

impl<S: AudioSink> MusicPlayer<S> {
    pub fn new(mut sink: S, volume: f32) -> Self {
        sink.set_looping(true);
        sink.set_volume(volume.clamp(0.0, 1.0));
        Self { sink }
    }

    /// Start the track if it is not already playing
    pub fn ensure_playing(&mut self) {
        if !self.sink.is_paused() {
            return;
        }
        if let Err(e) = self.sink.play() {
            log::warn!("Music not started: {}", e);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Sink that plays nothing (headless runs)
#[derive(Debug, Default)]
pub struct SilentSink {
    playing: bool,
}

impl AudioSink for SilentSink {
    fn play(&mut self) -> Result<(), AudioError> {
        self.playing = true;
        Ok(())
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn set_looping(&mut self, _looping: bool) {}

    fn set_volume(&mut self, _volume: f32) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::HtmlAudioSink;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlAudioElement;

    use super::{AudioError, AudioSink};

    /// `<audio>` element backed sink
    pub struct HtmlAudioSink {
        element: HtmlAudioElement,
    }

    impl HtmlAudioSink {
        pub fn new(src: &str) -> Result<Self, AudioError> {
            let element = HtmlAudioElement::new_with_src(src)
                .map_err(|e| AudioError::Rejected(format!("{e:?}")))?;
            Ok(Self { element })
        }
    }

    impl AudioSink for HtmlAudioSink {
        fn play(&mut self) -> Result<(), AudioError> {
            let promise = self
                .element
                .play()
                .map_err(|e| AudioError::Rejected(format!("{e:?}")))?;
            // Autoplay policy rejections arrive asynchronously
            let on_reject = Closure::<dyn FnMut(JsValue)>::new(|e: JsValue| {
                log::warn!("Audio waiting for interaction: {:?}", e);
            });
            let _ = promise.catch(&on_reject);
            on_reject.forget();
            Ok(())
        }

        fn is_paused(&self) -> bool {
            self.element.paused()
        }

        fn set_looping(&mut self, looping: bool) {
            self.element.set_loop(looping);
        }

        fn set_volume(&mut self, volume: f32) {
            self.element.set_volume(volume as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls and can be told to reject playback
    #[derive(Default)]
    struct FakeSink {
        paused: bool,
        reject: bool,
        plays: u32,
        looping: bool,
        volume: f32,
    }

    impl AudioSink for FakeSink {
        fn play(&mut self) -> Result<(), AudioError> {
            self.plays += 1;
            if self.reject {
                return Err(AudioError::Rejected("autoplay".into()));
            }
            self.paused = false;
            Ok(())
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn set_looping(&mut self, looping: bool) {
            self.looping = looping;
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume;
        }
    }

    #[test]
    fn test_configures_track() {
        let music = MusicPlayer::new(FakeSink::default(), 0.5);
        assert!(music.sink().looping);
        assert_eq!(music.sink().volume, 0.5);
    }

    #[test]
    fn test_plays_only_when_paused() {
        let sink = FakeSink {
            paused: true,
            ..Default::default()
        };
        let mut music = MusicPlayer::new(sink, 0.5);
        music.ensure_playing();
        music.ensure_playing();
        assert_eq!(music.sink().plays, 1);
    }

    #[test]
    fn test_rejection_is_not_fatal() {
        let sink = FakeSink {
            paused: true,
            reject: true,
            ..Default::default()
        };
        let mut music = MusicPlayer::new(sink, 0.5);
        music.ensure_playing();
        music.ensure_playing();
        // Still paused, retried on the next lifecycle edge
        assert_eq!(music.sink().plays, 2);
        assert!(music.sink().is_paused());
    }
}
