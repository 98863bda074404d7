//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use canvas_pong::assets::AssetGate;
    use canvas_pong::audio::{AudioManager, AudioSink, SilentAudio};
    use canvas_pong::input::Key;
    use canvas_pong::renderer::RenderState;
    use canvas_pong::{Game, Schedule, Settings};

    const RENDERER_ASSET: &str = "renderer";

    /// Everything the browser callbacks share
    struct Host {
        game: Game,
        renderer: Option<RenderState>,
        audio: Option<AudioManager>,
        /// A frame callback is pending
        looping: bool,
    }

    impl Host {
        fn frame(&mut self) -> Schedule {
            let Host {
                game,
                renderer,
                audio,
                ..
            } = self;
            let Some(renderer) = renderer.as_mut() else {
                return Schedule::Halt;
            };
            let mut silent = SilentAudio;
            let audio: &mut dyn AudioSink = match audio.as_mut() {
                Some(manager) => manager,
                None => &mut silent,
            };
            game.frame(renderer, audio)
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let settings = Settings::load();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store matches the playfield; CSS scales it
        let width = settings.game.width as u32;
        let height = settings.game.height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings.game.clone(), seed)
            .with_assets(AssetGate::requiring([RENDERER_ASSET]));
        log::info!("Game initialized with seed: {}", seed);

        // Audio is optional: without it the game is silent
        let audio = AudioManager::new(&settings.audio);

        let host = Rc::new(RefCell::new(Host {
            game,
            renderer: None,
            audio,
            looping: false,
        }));

        setup_input_handlers(host.clone());

        match RenderState::from_canvas(canvas, width, height).await {
            Ok(render_state) => {
                let mut h = host.borrow_mut();
                h.renderer = Some(render_state);
                h.game.assets_mut().mark_loaded(RENDERER_ASSET);
            }
            Err(e) => {
                log::error!("Renderer unavailable: {e}");
                host.borrow_mut().game.assets_mut().mark_failed(RENDERER_ASSET);
                return;
            }
        }

        // First frame draws the waiting screen (or auto-starts)
        host.borrow_mut().looping = true;
        request_animation_frame(host);

        log::info!("Canvas Pong ready");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().expect("no window");

        // Key down: track held keys, start/restart when stopped
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if matches!(key.as_str(), "ArrowUp" | "ArrowDown" | " ") {
                    event.prevent_default();
                }

                let mut h = host.borrow_mut();
                if let Some(audio) = &h.audio {
                    audio.resume();
                }
                let started = h.game.key_down(Key::from_dom(&key));
                if started && !h.looping {
                    h.looping = true;
                    drop(h);
                    request_animation_frame(host.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().game.key_up(&Key::from_dom(&event.key()));
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let schedule = host.borrow_mut().frame();
        match schedule {
            Schedule::Continue => request_animation_frame(host),
            Schedule::Halt => host.borrow_mut().looping = false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_pong::RenderError;
    use canvas_pong::renderer::{Renderer, Snapshot};
    use canvas_pong::sim::Score;

    /// Logs the score line instead of drawing
    #[derive(Default)]
    pub struct ScoreLog {
        last: Score,
    }

    impl Renderer for ScoreLog {
        fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
            if snapshot.score != self.last {
                log::info!("{} - {}", snapshot.score.left, snapshot.score.right);
                self.last = snapshot.score;
            }
            Ok(())
        }
    }
}

/// Give up on a demo rally that never ends
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_FRAMES: u64 = 1_000_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::audio::SilentAudio;
    use canvas_pong::input::Key;
    use canvas_pong::{Game, Schedule, Settings};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode plays an AI-vs-AI demo - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });
    log::info!("Seed: {seed}");

    let mut game = Game::new(Settings::load().game, seed);
    let mut renderer = headless::ScoreLog::default();
    let mut audio = SilentAudio;

    // Start, then hand the left paddle to the AI
    game.key_down(Key::Other("Enter".into()));
    game.key_down(Key::Autopilot);

    let mut frames = 0;
    while game.frame(&mut renderer, &mut audio) == Schedule::Continue {
        frames += 1;
        if frames >= MAX_DEMO_FRAMES {
            log::warn!("Demo stopped after {frames} frames without a winner");
            break;
        }
    }

    let score = game.state().score;
    println!(
        "Final score {} - {} after {} frames ({:?})",
        score.left,
        score.right,
        frames,
        game.phase()
    );
}
