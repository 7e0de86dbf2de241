//! Platform glue shared by the browser and native builds
//!
//! Handles:
//! - Which input events count as lift
//! - Canvas sizing from the browser window
//! - One animation frame: tick, draw list, and whether to keep looping
//! - The autopilot driving the native demo

use crate::consts::{CANVAS_HEIGHT_FRACTION, CANVAS_WIDTH_FRACTION};
use crate::renderer::{DrawCommand, build_frame};
use crate::sim::{GameState, TickInput, Viewport, tick};

/// `KeyboardEvent.code` values that lift the vehicle
pub const LIFT_KEYS: &[&str] = &["Space"];

/// Whether a keyboard `code` should lift the vehicle
#[inline]
pub fn is_lift_key(code: &str) -> bool {
    LIFT_KEYS.contains(&code)
}

/// Canvas pixel size for a browser window (90% x 70%, truncated like the
/// canvas `width`/`height` attributes)
pub fn canvas_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    let w = (inner_width * CANVAS_WIDTH_FRACTION).max(0.0) as u32;
    let h = (inner_height * CANVAS_HEIGHT_FRACTION).max(0.0) as u32;
    (w, h)
}

/// Viewport for a canvas size, or None when either side is zero
pub fn viewport_for_canvas(width: u32, height: u32) -> Option<Viewport> {
    let viewport = Viewport::new(width as f32, height as f32);
    viewport.is_usable().then_some(viewport)
}

/// Output of one animation frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Draw list for the state after this frame's tick
    pub commands: Vec<DrawCommand>,
    /// Whether the loop should request another frame
    pub reschedule: bool,
}

/// Tick once and build the frame to present.
///
/// The frame that ends the run is still ticked and drawn (with the game-over
/// banner); it is the last one the loop schedules.
pub fn step_frame(state: &mut GameState, input: &TickInput) -> Frame {
    let was_over = state.is_game_over();
    tick(state, input);

    if !was_over && state.is_game_over() {
        log::info!("Game over: score {} after {} frames", state.score, state.frame);
    }

    Frame {
        commands: build_frame(state),
        reschedule: !state.is_game_over(),
    }
}

/// Headless pilot used by the native demo.
///
/// Aims for the centre of the nearest gate not yet passed (or the middle of
/// the screen when none is on screen) and lifts only while falling below it.
pub fn autopilot_wants_lift(state: &GameState) -> bool {
    let vehicle = &state.vehicle;
    let target = state
        .obstacles
        .iter()
        .find(|obs| obs.right() >= vehicle.x as f64)
        .map(|obs| obs.height + obs.gap / 2.0)
        .unwrap_or(state.viewport.height as f64 / 2.0);

    vehicle.velocity >= 0.0 && (vehicle.y + vehicle.height / 2.0) as f64 > target
}
