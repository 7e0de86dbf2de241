//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (oldest entity first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{GateCheck, breaches_floor, check_gate};
pub use obstacles::{ObstacleStep, advance_obstacles, spawn_obstacle};
pub use particles::{age_particles, spawn_particle};
pub use state::{GamePhase, GameState, Obstacle, Particle, Vehicle, Viewport};
pub use tick::{TickInput, tick};
