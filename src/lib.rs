//! Heli Dodge - A side-scrolling helicopter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, smoke, collisions)
//! - `renderer`: Render command generation and the WebGPU pipeline
//! - `platform`: Browser input mapping and canvas sizing
//! - `tuning`: Gameplay constants bundled for the simulation

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Values are per frame; the simulation runs one fixed step per display refresh.
pub mod consts {
    /// Downward acceleration added to the vehicle velocity every frame
    pub const GRAVITY: f32 = 0.3;
    /// Velocity the vehicle is set to on lift (negative = up)
    pub const LIFT_VELOCITY: f32 = -8.0;
    /// Fixed horizontal position of the vehicle (pixels)
    pub const VEHICLE_X: f32 = 50.0;
    /// Vehicle size as a fraction of the viewport (width, height)
    pub const VEHICLE_WIDTH_FRACTION: f32 = 0.05;
    pub const VEHICLE_HEIGHT_FRACTION: f32 = 0.05;

    /// Frames between obstacle spawns
    pub const OBSTACLE_INTERVAL_FRAMES: u64 = 90;
    /// Obstacle scroll speed at the reference viewport width
    pub const OBSTACLE_SPEED: f64 = 3.0;
    /// Viewport width the obstacle speed is calibrated for
    pub const REFERENCE_WIDTH: f64 = 800.0;
    /// Obstacle width as a fraction of viewport width
    pub const OBSTACLE_WIDTH_FRACTION: f64 = 0.05;
    /// Gate opening as a fraction of viewport height
    pub const GAP_FRACTION: f64 = 0.45;
    /// Top band height is drawn from [MIN, viewport height - BOTTOM_MARGIN]
    pub const OBSTACLE_MIN_HEIGHT: f64 = 50.0;
    pub const OBSTACLE_BOTTOM_MARGIN: f64 = 100.0;

    /// Smoke puff radius range
    pub const PARTICLE_MIN_SIZE: f32 = 5.0;
    pub const PARTICLE_MAX_SIZE: f32 = 10.0;
    /// Smoke drift speed range (pixels/frame, leftward)
    pub const PARTICLE_MIN_SPEED: f32 = 1.0;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    /// Radius lost per frame
    pub const PARTICLE_SHRINK: f32 = 0.05;
    /// Opacity lost per frame
    pub const PARTICLE_FADE: f32 = 0.02;

    /// Canvas size as a fraction of the browser window
    pub const CANVAS_WIDTH_FRACTION: f64 = 0.9;
    pub const CANVAS_HEIGHT_FRACTION: f64 = 0.7;
}
