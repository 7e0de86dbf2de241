//! Obstacle stream: spawning, scrolling, scoring and gate collisions

use rand::Rng;

use super::collision::check_gate;
use super::state::{Obstacle, Vehicle, Viewport};
use crate::tuning::Tuning;

/// Outcome of one scroll pass over the obstacle list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleStep {
    /// Obstacles that left the screen this frame (one point each)
    pub passed: u32,
    /// At least one obstacle's solid band overlaps the vehicle
    pub collided: bool,
}

/// Random top-band height in [min, viewport height - margin].
///
/// Viewports too short for that range pin the height to `min`.
fn gate_height<R: Rng>(rng: &mut R, viewport: Viewport, tuning: &Tuning) -> f64 {
    let min = tuning.obstacle_min_height;
    let max = viewport.height as f64 - tuning.obstacle_bottom_margin;
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}

/// Push a new obstacle at the right edge, sized from the current viewport
pub fn spawn_obstacle<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    viewport: Viewport,
    tuning: &Tuning,
    rng: &mut R,
) {
    let (width, height) = (viewport.width as f64, viewport.height as f64);
    obstacles.push(Obstacle {
        x: width,
        width: width * tuning.obstacle_width_fraction,
        height: gate_height(rng, viewport, tuning),
        gap: height * tuning.gap_fraction,
    });
}

/// Scroll every obstacle left by `step`, test it against the vehicle at its
/// new position, and drop the ones whose right edge went past the left edge.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, vehicle: &Vehicle, step: f64) -> ObstacleStep {
    let mut outcome = ObstacleStep::default();

    obstacles.retain_mut(|obs| {
        obs.x -= step;

        if check_gate(vehicle, obs).is_hit() {
            outcome.collided = true;
        }

        if obs.right() < 0.0 {
            outcome.passed += 1;
            false
        } else {
            true
        }
    });

    outcome
}
