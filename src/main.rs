//! Lane Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use lane_hopper::highscores::LocalStorageStore;
    use lane_hopper::sim::{Command, Direction, GameEvent, GamePhase};
    use lane_hopper::{DifficultyPreset, Game, Settings};

    // Drawing is done by the page script; it registers `window.laneHopperRender`
    #[wasm_bindgen(inline_js = "
        export function render_snapshot(json) {
            const render = window.laneHopperRender;
            if (typeof render === 'function') {
                render(JSON.parse(json));
            }
        }
    ")]
    extern "C" {
        fn render_snapshot(json: &str);
    }

    type SharedGame = Rc<RefCell<Game<LocalStorageStore>>>;

    /// Map a key to a game command
    fn command_for_key(key: &str) -> Option<Command> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Command::Move(Direction::Up)),
            "ArrowDown" | "s" | "S" => Some(Command::Move(Direction::Down)),
            "ArrowLeft" | "a" | "A" => Some(Command::Move(Direction::Left)),
            "ArrowRight" | "d" | "D" => Some(Command::Move(Direction::Right)),
            "Enter" | " " | "r" | "R" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Number keys pick a difficulty preset
    fn preset_for_key(key: &str) -> Option<DifficultyPreset> {
        match key {
            "1" => Some(DifficultyPreset::Easy),
            "2" => Some(DifficultyPreset::Normal),
            "3" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(game: &Game<LocalStorageStore>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let snapshot = game.snapshot();

        if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
            el.set_text_content(Some(&snapshot.session.score.to_string()));
        }
        if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
            el.set_text_content(Some(&snapshot.session.lives.to_string()));
        }
        if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
            el.set_text_content(Some(&snapshot.session.high_score.to_string()));
        }

        // Show/hide overlays
        for (id, phase) in [
            ("victory", GamePhase::Victory),
            ("game-over", GamePhase::GameOver),
        ] {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = if snapshot.phase == phase {
                    el.class_list().remove_1("hidden")
                } else {
                    el.class_list().add_1("hidden")
                };
            }
        }
        if snapshot.phase == GamePhase::GameOver {
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&snapshot.session.score.to_string()));
            }
        }
    }

    fn log_events(events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Hopped(_) => {}
                other => log::info!("{:?}", other),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Lane Hopper starting...");

        let Some(window) = web_sys::window() else {
            return;
        };

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game: SharedGame = Rc::new(RefCell::new(Game::new(seed, settings, LocalStorageStore)));

        // Hide loading indicator
        if let Some(loading) = window
            .document()
            .and_then(|d| d.get_element_by_id("loading"))
        {
            let _ = loading.class_list().add_1("hidden");
        }

        setup_keyboard(&window, game.clone());
        setup_visibility(game.clone());
        request_animation_frame(game);

        log::info!("Lane Hopper running!");
    }

    fn setup_keyboard(window: &web_sys::Window, game: SharedGame) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            if let Some(preset) = preset_for_key(key.as_str()) {
                game.borrow_mut().change_preset(preset);
                return;
            }
            let Some(command) = command_for_key(key.as_str()) else {
                return;
            };
            // Keep arrow keys from scrolling the page
            event.prevent_default();
            let outcome = game.borrow_mut().handle_command(command);
            if let Some(outcome) = outcome {
                log_events(&[outcome]);
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_visibility(game: SharedGame) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            // Frames stop while hidden; don't replay the gap as one huge step
            game.borrow_mut().resync_clock();
            log::info!("Visibility changed, frame clock resynced");
        });
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }

    fn request_animation_frame(game: SharedGame) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: SharedGame, time: f64) {
        {
            let mut g = game.borrow_mut();
            let events = g.frame(time);
            log_events(&events);

            match serde_json::to_string(&g.snapshot()) {
                Ok(json) => render_snapshot(&json),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
            update_hud(&g);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_hopper::sim::{Command, Direction, GameEvent, GamePhase};
    use lane_hopper::{DifficultyPreset, Game, MemoryStore, Settings};

    env_logger::init();
    log::info!("Lane Hopper (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build to play");

    let preset = std::env::args()
        .nth(1)
        .and_then(|arg| DifficultyPreset::from_str(&arg))
        .unwrap_or_default();
    let mut game = Game::new(0x5EED, Settings::from_preset(preset), MemoryStore::default());

    // One minute at 60 fps, hopping up twice a second
    let frame_ms = 1000.0 / 60.0;
    for frame in 0..3600u32 {
        if frame % 30 == 29 {
            let phase = game.state().phase;
            match phase {
                GamePhase::Playing => {
                    game.handle_command(Command::Move(Direction::Up));
                }
                GamePhase::GameOver => {
                    game.handle_command(Command::Restart);
                }
                GamePhase::Victory => {}
            }
        }

        for event in game.frame(frame as f64 * frame_ms) {
            match event {
                GameEvent::Hopped(_) => {}
                other => log::info!("frame {}: {:?}", frame, other),
            }
        }
    }

    let snapshot = game.snapshot();
    println!(
        "{} preset: score {}, lives {}, best {}, round {}",
        preset.as_str(),
        snapshot.session.score,
        snapshot.session.lives,
        snapshot.session.high_score,
        snapshot.round
    );
    match serde_json::to_string_pretty(&snapshot.session) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Snapshot serialization failed: {}", e),
    }
}
