//! Sky Siege entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sky_siege::Session;
    use sky_siege::Settings;
    use sky_siege::audio::WebAudio;
    use sky_siege::consts::*;
    use sky_siege::persistence::LocalStorageStore;
    use sky_siege::platform::{Intent, RawInput, translate};
    use sky_siege::renderer::{CanvasRenderer, Renderer, backing_size};

    /// Game instance holding the session and its renderer
    struct Game {
        session: Session<LocalStorageStore, WebAudio>,
        renderer: CanvasRenderer,
    }

    impl Game {
        fn handle(&mut self, raw: RawInput) -> bool {
            let Some(intent) = translate(&raw) else {
                return false;
            };
            // First gesture unlocks audio
            if intent == Intent::Activate {
                self.session.audio_mut().resume();
            }
            self.session.push(intent);
            true
        }

        fn frame(&mut self, time: f64) {
            self.session.step(time);
            self.renderer.render(self.session.state(), time);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Sky Siege starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document - cannot start");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element - cannot start");
            return;
        };

        fit_canvas(&canvas);

        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas 2D context unavailable - cannot start");
            return;
        };

        let store = LocalStorageStore::open();
        let settings = Settings::load(&store);
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let audio = WebAudio::new(&settings);

        let mut session = Session::new(seed, store, audio);
        session.set_autopilot(settings.autopilot);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game { session, renderer }));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());
        setup_auto_close_selector(game.clone());

        request_animation_frame(game);

        log::info!("Sky Siege running!");
    }

    /// Size the backing store at world aspect for the displayed height.
    /// Returns the new backing width.
    fn fit_canvas(canvas: &HtmlCanvasElement) -> u32 {
        let window = web_sys::window();
        let dpr = window.as_ref().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

        // Before layout the client height can still be 0
        let mut display_h = canvas.client_height() as f64;
        if display_h < 1.0 {
            display_h = window
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .filter(|h| *h >= 1.0)
                .unwrap_or(WORLD_HEIGHT as f64);
        }

        let (width, height) = backing_size(display_h, dpr);
        canvas.set_width(width);
        canvas.set_height(height);
        width
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let width = fit_canvas(&canvas);
            game.borrow_mut().renderer.resize(width);
            log::debug!("Canvas resized to {}x{}", width, canvas.height());
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle(RawInput::PointerDown);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().handle(RawInput::TouchStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else { return };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if game.borrow_mut().handle(RawInput::Key(event.key())) {
                    // Keep space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Leave the selector when the tab is hidden so a return lands on a
    /// stable screen
    fn setup_auto_close_selector(game: Rc<RefCell<Game>>) {
        use sky_siege::sim::GamePhase;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.session.state().phase == GamePhase::CharacterSelect {
                    g.session.push(Intent::CancelSelector);
                    log::info!("Closed selector (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_siege::audio::SilentAudio;
    use sky_siege::consts::FRAME_MS;
    use sky_siege::persistence::MemoryStore;
    use sky_siege::renderer::Hud;
    use sky_siege::sim::GamePhase;
    use sky_siege::Session;

    /// Ten minutes of simulated play
    const MAX_TICKS: u64 = 36_000;

    env_logger::init();
    log::info!("Sky Siege (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - serve the wasm build to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(1);

    let mut session = Session::new(seed, MemoryStore::new(), SilentAudio);
    session.set_autopilot(true);

    let mut now = 0.0;
    let mut started = false;
    for _ in 0..MAX_TICKS {
        session.step(now);
        now += FRAME_MS;
        match session.state().phase {
            GamePhase::Playing => started = true,
            GamePhase::GameOver if started => break,
            _ => {}
        }
    }

    let state = session.state();
    let hud = Hud::from_state(state);
    println!(
        "seed {}: {} after {} ticks ({:?}), {}",
        seed, hud.score, state.time_ticks, state.phase, hud.high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
