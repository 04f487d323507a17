//! Mini Game Arcade entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use mini_arcade::audio::AudioManager;
    use mini_arcade::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use mini_arcade::highscores::BestRuns;
    use mini_arcade::render::CanvasSurface;
    use mini_arcade::{Arcade, InputState};

    /// App instance holding all state for the frame loop
    struct App {
        arcade: Arcade,
        input: InputState,
        surface: CanvasSurface,
        audio: AudioManager,
        muted: bool,
    }

    impl App {
        fn new(seed: u64, best: BestRuns, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                arcade: Arcade::new(seed, best),
                input: InputState::new(),
                surface: CanvasSurface::new(ctx),
                audio: AudioManager::new(),
                muted: false,
            }
        }

        /// Advance one frame: simulate, draw, flush buffered cues.
        fn frame(&mut self) {
            self.arcade.tick(&mut self.input, &mut self.surface);
            for event in self.arcade.drain_cues() {
                self.audio.play_delayed(event.cue, event.delay_secs);
            }
        }

        fn toggle_mute(&mut self) {
            self.muted = !self.muted;
            self.audio.set_muted(self.muted);
            log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mini Game Arcade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let best = BestRuns::load();
        let app = Rc::new(RefCell::new(App::new(seed, best, ctx)));

        log::info!("Arcade initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Mini Game Arcade running!");
    }

    /// Pointer position relative to the canvas origin
    fn canvas_pos(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move - hover tracking
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_pos(
                    &canvas_clone,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
                app.borrow_mut().input.pointer_moved(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - the one-shot click for this frame
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_pos(
                    &canvas_clone,
                    event.client_x() as f32,
                    event.client_y() as f32,
                );
                let mut a = app.borrow_mut();
                // AudioContext stays suspended until a user gesture
                a.audio.resume();
                a.input.pointer_down(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - treated as a click at the touch point
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = canvas_pos(
                        &canvas_clone,
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                    );
                    let mut a = app.borrow_mut();
                    a.audio.resume();
                    a.input.pointer_down(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                // Keep Space/arrows from scrolling the page
                if matches!(code.as_str(), "Space" | "ArrowUp" | "ArrowDown") {
                    event.prevent_default();
                }
                let mut a = app.borrow_mut();
                if code == "KeyM" {
                    a.toggle_mute();
                    return;
                }
                a.audio.resume();
                a.input.key_down(&code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.key_up(&event.code());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            app.borrow_mut().frame();
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Mini Game Arcade (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning headless scroller smoke run...");
    smoke_run_scroller();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run_scroller() {
    use mini_arcade::InputState;
    use mini_arcade::scroller::{Phase, ScrollerState, tick::tick};

    let mut state = ScrollerState::new(7, 0);
    let mut cues = Vec::new();

    // Two presses: start screen, then the get-ready launch
    for _ in 0..2 {
        let mut input = InputState::new();
        input.key_down("Space");
        let _ = tick(&mut state, &mut input, &mut cues);
    }
    assert!(
        matches!(state.phase, Phase::Playing),
        "run should be live after two presses"
    );

    // Flap on a fixed cadence until the run ends
    let mut frames = 0u32;
    while matches!(state.phase, Phase::Playing) && frames < 10_000 {
        let mut input = InputState::new();
        if frames % 40 == 0 {
            input.key_down("Space");
        }
        let _ = tick(&mut state, &mut input, &mut cues);
        frames += 1;
    }

    println!(
        "✓ Smoke run ended after {} frames with score {}",
        frames, state.score
    );
}
