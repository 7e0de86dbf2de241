//! Heli Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use heli_dodge::platform::{canvas_size, is_lift_key, step_frame, viewport_for_canvas};
    use heli_dodge::renderer::{DrawCommand, RenderState, TextRole};
    use heli_dodge::sim::{GameState, TickInput};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                render_state: None,
                input: TickInput::default(),
            }
        }

        /// Render the current frame
        fn render(&mut self, commands: &[DrawCommand]) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(commands) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Adopt a new canvas size
        fn resize(&mut self, width: u32, height: u32) {
            match viewport_for_canvas(width, height) {
                Some(viewport) if self.state.resize(viewport.width, viewport.height) => {
                    if let Some(ref mut render_state) = self.render_state {
                        render_state.resize(width, height);
                    }
                    log::info!("Resized to {}x{}", width, height);
                }
                _ => log::warn!("Ignoring resize to {}x{}", width, height),
            }
        }
    }

    /// Show the frame's text commands in the DOM HUD
    fn update_hud(commands: &[DrawCommand]) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let mut game_over_shown = false;
        for command in commands {
            let DrawCommand::Text {
                role,
                content,
                pos,
                font_px,
                ..
            } = command
            else {
                continue;
            };

            let id = match role {
                TextRole::Score => "score",
                TextRole::GameOver => {
                    game_over_shown = true;
                    "game-over"
                }
            };
            let Some(el) = document.get_element_by_id(id) else {
                continue;
            };
            el.set_text_content(Some(content.as_str()));
            let _ = el.set_attribute("class", "hud-text");
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                // `pos` is the baseline; CSS positions the top edge
                let style = el.style();
                let _ = style.set_property("left", &format!("{}px", pos.x));
                let _ = style.set_property("top", &format!("{}px", pos.y - font_px));
                let _ = style.set_property("font-size", &format!("{}px", font_px));
            }
        }

        if !game_over_shown && let Some(el) = document.get_element_by_id("game-over") {
            let _ = el.set_attribute("class", "hud-text hidden");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Heli Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size canvas from the window
        let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let (width, height) = canvas_size(inner_w, inner_h);
        canvas.set_width(width);
        canvas.set_height(height);

        let Some(viewport) = viewport_for_canvas(width, height) else {
            log::error!("Canvas has no area ({}x{}), not starting", width, height);
            return;
        };

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(GameState::new(viewport, seed))));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Heli Dodge running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if is_lift_key(&event.code()) {
                    game.borrow_mut().input.lift = true;
                }
            });
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.lift = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.lift = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let (width, height) = canvas_size(inner_w, inner_h);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = {
            let mut g = game.borrow_mut();

            let input = g.input.clone();
            let frame = step_frame(&mut g.state, &input);
            // Clear one-shot inputs after processing
            g.input.lift = false;

            g.render(&frame.commands);
            update_hud(&frame.commands);

            frame.reschedule
        };

        // The final frame (with the game-over banner) is already drawn
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frames the native demo runs before giving up on a crash
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_FRAMES: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use heli_dodge::platform::autopilot_wants_lift;
    use heli_dodge::sim::{GameState, TickInput, Viewport, tick};

    env_logger::init();
    log::info!("Heli Dodge (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    let seed = 0x4845_4c49;
    let mut state = GameState::new(Viewport::new(800.0, 600.0), seed);
    log::info!("Demo seed: {}", seed);

    while !state.is_game_over() && state.frame < DEMO_MAX_FRAMES {
        let input = TickInput {
            lift: autopilot_wants_lift(&state),
        };
        tick(&mut state, &input);
    }

    if state.is_game_over() {
        log::info!("Autopilot crashed: score {} after {} frames", state.score, state.frame);
    } else {
        log::info!("Autopilot survived: score {} after {} frames", state.score, state.frame);
    }
    match serde_json::to_string(&state.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
