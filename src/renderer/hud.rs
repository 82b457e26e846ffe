//! Score, timer, ammo and the end-of-round message

use glam::Vec2;

use super::surface::{DrawSurface, TextAlign};
use crate::sim::{GameState, Outcome, Rect};

const FONT_FAMILY: &str = "Bangers";
const FONT_SIZE: u32 = 25;
const TEXT_COLOR: &str = "white";

pub fn draw_hud(state: &GameState, surface: &mut impl DrawSurface) {
    surface.save();
    surface.set_fill_color(TEXT_COLOR);
    surface.set_shadow(Vec2::new(2.0, 2.0), "black");
    surface.set_font(&format!("{FONT_SIZE}px {FONT_FAMILY}"));

    surface.fill_text(&format!("Score: {}", state.score), Vec2::new(20.0, 40.0));
    surface.fill_text(
        &format!("Timer: {:.1}", state.game_time * 0.001),
        Vec2::new(20.0, 100.0),
    );

    // One bar per round
    for i in 0..state.player.ammo.amount() {
        surface.fill_rect(Rect::from_xywh(20.0 + 5.0 * i as f32, 50.0, 3.0, 20.0));
    }

    if let Some(outcome) = state.outcome() {
        let (headline, subtitle) = match outcome {
            Outcome::Won => ("MOST WONDERS!", "Well done explorer!"),
            Outcome::Lost => ("BLAZES!", "Get my repair kit and try again!"),
        };
        let center = Vec2::new(state.width * 0.5, state.height * 0.5);
        surface.set_text_align(TextAlign::Center);
        surface.set_font(&format!("70px {FONT_FAMILY}"));
        surface.fill_text(headline, center - Vec2::new(0.0, 20.0));
        surface.set_font(&format!("{FONT_SIZE}px {FONT_FAMILY}"));
        surface.fill_text(subtitle, center + Vec2::new(0.0, 20.0));
    }
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCall, RecordingSurface};
    use crate::settings::Settings;
    use crate::sim::GamePhase;

    #[test]
    fn test_score_timer_and_ammo_bars() {
        let mut state = GameState::new(&Settings::default());
        state.score = -3;
        state.game_time = 12_345.0;
        let mut surface = RecordingSurface::new();
        draw_hud(&state, &mut surface);

        assert_eq!(surface.texts(), vec!["Score: -3", "Timer: 12.3"]);
        let bars = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect(_)))
            .count();
        assert_eq!(bars, 20);
        assert_eq!(surface.calls.first(), Some(&DrawCall::Save));
        assert_eq!(surface.calls.last(), Some(&DrawCall::Restore));
    }

    #[test]
    fn test_end_messages() {
        let mut state = GameState::new(&Settings::default());
        state.phase = GamePhase::GameOver;
        state.score = 81;
        let mut surface = RecordingSurface::new();
        draw_hud(&state, &mut surface);
        assert!(surface.texts().contains(&"MOST WONDERS!"));
        assert!(surface.texts().contains(&"Well done explorer!"));

        state.score = 80;
        let mut surface = RecordingSurface::new();
        draw_hud(&state, &mut surface);
        assert!(surface.texts().contains(&"BLAZES!"));
        assert!(surface.calls.contains(&DrawCall::TextAlign(TextAlign::Center)));
    }
}
