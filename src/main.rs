//! Steam Raider entry point
//!
//! The browser build wires the session to a canvas, the keyboard and
//! `requestAnimationFrame`. The native build runs a headless autopilot round
//! and prints the final snapshot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use steam_raider::Settings;
    use steam_raider::audio::{AudioSink, HtmlAudioSink, SilentSink};
    use steam_raider::platform::Session;
    use steam_raider::renderer::CanvasSurface;

    const MUSIC_SRC: &str = "./assets/music.mp3";

    struct Game {
        session: Session<Box<dyn AudioSink>>,
        surface: CanvasSurface,
    }

    type SharedGame = Rc<RefCell<Game>>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {e}").into());
        }

        log::info!("Steam Raider starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings {
            seed: js_sys::Date::now() as u64,
            ..Settings::default()
        };

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(settings.width as u32);
        canvas.set_height(settings.height as u32);

        let surface = CanvasSurface::new(&canvas, &document).map_err(|e| JsValue::from_str(&e))?;

        let sink: Box<dyn AudioSink> = match HtmlAudioSink::new(MUSIC_SRC) {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                log::warn!("Music disabled: {}", e);
                Box::new(SilentSink::default())
            }
        };

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(&settings, sink),
            surface,
        }));

        setup_input_handlers(&window, game.clone())?;
        setup_restart_button(&document, game.clone())?;
        request_animation_frame(game);
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: SharedGame) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: SharedGame) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: SharedGame, time: f64) {
        let outcome = {
            let mut g = game.borrow_mut();
            let Game { session, surface } = &mut *g;
            session.frame(time, surface)
        };

        if outcome.wants_next_frame() {
            request_animation_frame(game);
        }
    }

    fn setup_restart_button(document: &web_sys::Document, game: SharedGame) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("restartBtn") else {
            log::warn!("No restart button");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let now = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or_default();
            let rearm = game.borrow_mut().session.restart(now);
            if rearm {
                request_animation_frame(game.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use steam_raider::Settings;
    use steam_raider::audio::SilentSink;
    use steam_raider::platform::Session;
    use steam_raider::renderer::RecordingSurface;

    env_logger::init();
    log::info!("Steam Raider (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let mut session = Session::new(&settings, SilentSink::default());
    let mut surface = RecordingSurface::new();
    let frame_ms = 1000.0 / 60.0;
    let mut frame = 0u64;
    // Every frame drops if max_frame_delta_ms is below one frame
    let max_frames = (settings.time_limit_ms as f64 / frame_ms).ceil() as u64 + 60;

    // Headless autopilot: sweep up and down, fire every 20 frames
    loop {
        frame += 1;
        if frame % 240 == 1 {
            session.key_up("ArrowUp");
            session.key_down("ArrowDown");
        } else if frame % 240 == 121 {
            session.key_up("ArrowDown");
            session.key_down("ArrowUp");
        }
        if frame % 20 == 0 {
            session.key_down(" ");
        }

        surface.clear_calls();
        let outcome = session.frame(frame as f64 * frame_ms, &mut surface);
        if !outcome.wants_next_frame() {
            break;
        }
        if frame >= max_frames {
            log::warn!("Round did not finish within {} frames", max_frames);
            break;
        }
    }

    log::info!("Round finished after {} frames", frame);
    match serde_json::to_string_pretty(&session.state().snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
