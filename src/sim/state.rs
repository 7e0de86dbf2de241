//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; the renderer only
//! reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::breaches_floor;
use serde::Serialize;

use crate::tuning::{Tuning, TuningError};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Simulation advancing every frame
    Active,
    /// Run ended; one-way, nothing moves any more
    GameOver,
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative and non-finite sizes are ignored by resize
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The player's helicopter
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity, positive = down
    pub velocity: f32,
    pub gravity: f32,
    /// Velocity set on lift
    pub lift: f32,
}

impl Vehicle {
    /// Vehicle centred vertically, sized from the viewport
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            x: tuning.vehicle_x,
            y: viewport.height / 2.0,
            width: viewport.width * tuning.vehicle_width_fraction,
            height: viewport.height * tuning.vehicle_height_fraction,
            velocity: 0.0,
            gravity: tuning.gravity,
            lift: tuning.lift_velocity,
        }
    }

    /// Override the current velocity with the lift impulse
    #[inline]
    pub fn apply_lift(&mut self) {
        self.velocity = self.lift;
    }

    /// Integrate one frame of gravity (no bounds applied)
    #[inline]
    pub fn integrate(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
    }

    /// Apply the screen bounds after integrating.
    ///
    /// The ceiling clamps position but keeps velocity. Returns true when the
    /// vehicle has dropped through the floor.
    pub fn confine(&mut self, viewport_height: f32) -> bool {
        if self.y < 0.0 {
            self.y = 0.0;
            false
        } else {
            breaches_floor(self, viewport_height)
        }
    }

    /// Re-fit to a new viewport: recentre and rescale, velocity untouched
    pub fn rescale(&mut self, viewport: Viewport, tuning: &Tuning) {
        self.y = viewport.height / 2.0;
        self.width = viewport.width * tuning.vehicle_width_fraction;
        self.height = viewport.height * tuning.vehicle_height_fraction;
    }

    /// Point smoke is emitted from (left edge, vertical centre)
    #[inline]
    pub fn exhaust(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.height / 2.0)
    }
}

/// A gated wall scrolling in from the right
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f64,
    pub width: f64,
    /// Height of the top band (also the gate's top edge)
    pub height: f64,
    /// Vertical opening below the top band
    pub gap: f64,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge of the bottom band (gate's bottom edge)
    #[inline]
    pub fn gate_bottom(&self) -> f64 {
        self.height + self.gap
    }
}

/// A smoke puff trailing the vehicle (visual only)
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Radius
    pub size: f32,
    /// Leftward drift per frame
    pub speed: f32,
    /// 0-1, decreases over time
    pub opacity: f32,
    /// Radius lost per frame
    pub shrink: f32,
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.size > 0.0 && self.opacity > 0.0
    }
}

/// Outcome of a run, as reported by the headless demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: u64,
    pub game_over: bool,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames ticked so far, including the one that ended the run
    pub frame: u64,
    /// Obstacles passed
    pub score: u64,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub vehicle: Vehicle,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Smoke puffs, oldest first
    pub particles: Vec<Particle>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new run with default tuning
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self::build(viewport, Tuning::default(), seed)
    }

    /// Create a new run with modified tuning, rejecting unusable values
    pub fn with_tuning(viewport: Viewport, tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(viewport, tuning, seed))
    }

    fn build(viewport: Viewport, tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            frame: 0,
            score: 0,
            phase: GamePhase::Active,
            viewport,
            vehicle: Vehicle::new(viewport, &tuning),
            tuning,
            obstacles: Vec::new(),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Lift the vehicle. Ignored once the run has ended.
    pub fn apply_lift(&mut self) {
        if !self.is_game_over() {
            self.vehicle.apply_lift();
        }
    }

    /// Snapshot of the run's outcome
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            frames: self.frame,
            score: self.score,
            game_over: self.is_game_over(),
        }
    }

    /// End the run (idempotent)
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    /// Adopt a new viewport size.
    ///
    /// Existing obstacles keep their geometry; new ones and the scroll speed
    /// use the new size. Returns false (and changes nothing) for unusable sizes.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let viewport = Viewport::new(width, height);
        if !viewport.is_usable() {
            return false;
        }
        self.viewport = viewport;
        self.vehicle.rescale(viewport, &self.tuning);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Viewport::new(800.0, 600.0), 7)
    }

    #[test]
    fn test_new_state_geometry() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.frame, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.vehicle.x, 50.0);
        assert_eq!(state.vehicle.y, 300.0);
        assert!((state.vehicle.width - 40.0).abs() < 1e-4);
        assert!((state.vehicle.height - 30.0).abs() < 1e-4);
        assert_eq!(state.vehicle.velocity, 0.0);
    }

    #[test]
    fn test_lift_overrides_velocity() {
        let mut state = state();
        state.vehicle.velocity = 5.0;
        state.apply_lift();
        assert_eq!(state.vehicle.velocity, -8.0);

        // Already moving up faster: still overridden, not added
        state.vehicle.velocity = -12.0;
        state.apply_lift();
        assert_eq!(state.vehicle.velocity, -8.0);
    }

    #[test]
    fn test_lift_ignored_after_game_over() {
        let mut state = state();
        state.vehicle.velocity = 2.0;
        state.end_run();
        state.apply_lift();
        assert_eq!(state.vehicle.velocity, 2.0);
    }

    #[test]
    fn test_ceiling_clamps_without_killing_velocity() {
        let mut vehicle = state().vehicle;
        vehicle.y = 2.0;
        vehicle.velocity = -8.0;
        vehicle.integrate();
        assert!(vehicle.y < 0.0);
        let breached = vehicle.confine(600.0);
        assert!(!breached);
        assert_eq!(vehicle.y, 0.0);
        // Velocity keeps its upward momentum from the clamp frame
        assert!((vehicle.velocity - (-7.7)).abs() < 1e-5);
    }

    #[test]
    fn test_floor_breach_does_not_clamp() {
        let mut vehicle = state().vehicle;
        vehicle.y = 595.0;
        vehicle.velocity = 0.0;
        vehicle.integrate();
        assert!(vehicle.confine(600.0));
        assert!(vehicle.y > 595.0);
    }

    #[test]
    fn test_resize_rescales_vehicle() {
        let mut state = state();
        state.vehicle.velocity = 4.0;
        assert!(state.resize(1600.0, 400.0));
        assert_eq!(state.viewport, Viewport::new(1600.0, 400.0));
        assert_eq!(state.vehicle.y, 200.0);
        assert!((state.vehicle.width - 80.0).abs() < 1e-4);
        assert!((state.vehicle.height - 20.0).abs() < 1e-4);
        assert_eq!(state.vehicle.velocity, 4.0);
    }

    #[test]
    fn test_resize_rejects_unusable_sizes() {
        let mut state = state();
        assert!(!state.resize(0.0, 600.0));
        assert!(!state.resize(800.0, -1.0));
        assert!(!state.resize(f32::NAN, 600.0));
        assert_eq!(state.viewport, Viewport::new(800.0, 600.0));
        assert_eq!(state.vehicle.y, 300.0);
    }

    #[test]
    fn test_particle_alive() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            size: 1.0,
            speed: 1.0,
            opacity: 0.5,
            shrink: 0.05,
        };
        assert!(p.is_alive());
        p.opacity = 0.0;
        assert!(!p.is_alive());
        p.opacity = 0.5;
        p.size = -0.01;
        assert!(!p.is_alive());
    }

    #[test]
    fn test_with_tuning_rejects_stalled_stream() {
        let tuning = Tuning {
            obstacle_speed: 0.0,
            ..Default::default()
        };
        let err = GameState::with_tuning(Viewport::new(800.0, 600.0), tuning, 1).unwrap_err();
        assert_eq!(err.field, "obstacle_speed");
    }

    #[test]
    fn test_summary_serializes_outcome() {
        let mut state = state();
        state.frame = 412;
        state.score = 3;
        state.end_run();
        let summary = state.summary();
        assert_eq!(
            summary,
            RunSummary {
                seed: 7,
                frames: 412,
                score: 3,
                game_over: true,
            }
        );
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"seed":7,"frames":412,"score":3,"game_over":true}"#
        );
    }
}
