//! Game balance
//!
//! Every gameplay constant the simulation reads lives here. The defaults are
//! the fixed constants from [`crate::consts`]; tests and the headless demo can
//! build a `GameState` with a modified copy.

use core::fmt;

use crate::consts::*;

/// Why a tuning set was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl TuningError {
    const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tuning field `{}` {}", self.field, self.reason)
    }
}

impl std::error::Error for TuningError {}

/// Gameplay constants (per-frame units)
///
/// Obstacle geometry is kept in `f64` so long scrolls land on the same frame
/// as a browser canvas computing in doubles.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    // === Vehicle ===
    pub gravity: f32,
    /// Velocity set on lift (negative = up)
    pub lift_velocity: f32,
    pub vehicle_x: f32,
    pub vehicle_width_fraction: f32,
    pub vehicle_height_fraction: f32,

    // === Obstacles ===
    pub obstacle_interval_frames: u64,
    /// Scroll speed at `reference_width`; scaled linearly with viewport width
    pub obstacle_speed: f64,
    pub reference_width: f64,
    pub obstacle_width_fraction: f64,
    pub gap_fraction: f64,
    pub obstacle_min_height: f64,
    pub obstacle_bottom_margin: f64,

    // === Smoke ===
    pub particle_min_size: f32,
    pub particle_max_size: f32,
    pub particle_min_speed: f32,
    pub particle_max_speed: f32,
    pub particle_shrink: f32,
    pub particle_fade: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lift_velocity: LIFT_VELOCITY,
            vehicle_x: VEHICLE_X,
            vehicle_width_fraction: VEHICLE_WIDTH_FRACTION,
            vehicle_height_fraction: VEHICLE_HEIGHT_FRACTION,

            obstacle_interval_frames: OBSTACLE_INTERVAL_FRAMES,
            obstacle_speed: OBSTACLE_SPEED,
            reference_width: REFERENCE_WIDTH,
            obstacle_width_fraction: OBSTACLE_WIDTH_FRACTION,
            gap_fraction: GAP_FRACTION,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_bottom_margin: OBSTACLE_BOTTOM_MARGIN,

            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,
            particle_min_speed: PARTICLE_MIN_SPEED,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_shrink: PARTICLE_SHRINK,
            particle_fade: PARTICLE_FADE,
        }
    }
}

impl Tuning {
    /// Check every field is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let values = [
            ("gravity", self.gravity as f64),
            ("lift_velocity", self.lift_velocity as f64),
            ("vehicle_x", self.vehicle_x as f64),
            ("vehicle_width_fraction", self.vehicle_width_fraction as f64),
            ("vehicle_height_fraction", self.vehicle_height_fraction as f64),
            ("obstacle_speed", self.obstacle_speed),
            ("reference_width", self.reference_width),
            ("obstacle_width_fraction", self.obstacle_width_fraction),
            ("gap_fraction", self.gap_fraction),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_bottom_margin", self.obstacle_bottom_margin),
            ("particle_min_size", self.particle_min_size as f64),
            ("particle_max_size", self.particle_max_size as f64),
            ("particle_min_speed", self.particle_min_speed as f64),
            ("particle_max_speed", self.particle_max_speed as f64),
            ("particle_shrink", self.particle_shrink as f64),
            ("particle_fade", self.particle_fade as f64),
        ];
        if let Some(&(field, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::new(field, "must be finite"));
        }

        if self.obstacle_interval_frames == 0 {
            return Err(TuningError::new("obstacle_interval_frames", "must be at least 1"));
        }
        // A stalled stream never prunes, so the obstacle list would grow forever
        if self.obstacle_speed <= 0.0 {
            return Err(TuningError::new("obstacle_speed", "must be positive"));
        }
        if self.reference_width <= 0.0 {
            return Err(TuningError::new("reference_width", "must be positive"));
        }

        let fractions = [
            ("vehicle_width_fraction", self.vehicle_width_fraction as f64),
            ("vehicle_height_fraction", self.vehicle_height_fraction as f64),
            ("obstacle_width_fraction", self.obstacle_width_fraction),
            ("gap_fraction", self.gap_fraction),
        ];
        if let Some(&(field, _)) = fractions.iter().find(|(_, v)| *v <= 0.0 || *v > 1.0) {
            return Err(TuningError::new(field, "must be in (0, 1]"));
        }

        if self.particle_min_size <= 0.0 || self.particle_min_size > self.particle_max_size {
            return Err(TuningError::new(
                "particle_min_size",
                "must be positive and not exceed particle_max_size",
            ));
        }
        if self.particle_min_speed > self.particle_max_speed {
            return Err(TuningError::new(
                "particle_min_speed",
                "must not exceed particle_max_speed",
            ));
        }
        if self.particle_shrink <= 0.0 && self.particle_fade <= 0.0 {
            return Err(TuningError::new(
                "particle_fade",
                "or particle_shrink must be positive",
            ));
        }

        Ok(())
    }

    /// Per-frame obstacle scroll for a viewport of the given width
    #[inline]
    pub fn obstacle_step(&self, viewport_width: f32) -> f64 {
        self.obstacle_speed * (viewport_width as f64 / self.reference_width)
    }
}
