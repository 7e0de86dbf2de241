//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one rendered frame.

use super::obstacles::{advance_obstacles, spawn_obstacle};
use super::particles::{age_particles, spawn_particle};
use super::state::{GamePhase, GameState};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Lift requested (key, click or tap). Several in one frame act as one.
    pub lift: bool,
}

/// Advance the game state by one frame.
///
/// While active: gravity, smoke spawn, smoke aging, screen bounds, then the
/// obstacle pass (spawn, scroll, collide, prune, score). The frame counter advances even
/// after the run has ended.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Active {
        if input.lift {
            state.apply_lift();
        }

        state.vehicle.integrate();

        // Smoke leaves from the integrated position, before the ceiling clamp
        spawn_particle(
            &mut state.particles,
            &state.vehicle,
            &state.tuning,
            &mut state.rng,
        );
        age_particles(&mut state.particles, &state.tuning);

        if state.vehicle.confine(state.viewport.height) {
            state.end_run();
        }

        if state.frame.is_multiple_of(state.tuning.obstacle_interval_frames) {
            spawn_obstacle(
                &mut state.obstacles,
                state.viewport,
                &state.tuning,
                &mut state.rng,
            );
        }

        let step = state.tuning.obstacle_step(state.viewport.width);
        let outcome = advance_obstacles(&mut state.obstacles, &state.vehicle, step);
        state.score += u64::from(outcome.passed);
        if outcome.collided {
            state.end_run();
        }
    }

    state.frame += 1;
}
