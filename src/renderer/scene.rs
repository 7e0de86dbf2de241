//! Per-frame render command list
//!
//! Turns a [`GameState`] into the ordered draw calls for one frame. The list is
//! backend-agnostic: shapes go to the GPU pipeline, text goes to the DOM HUD.

use glam::Vec2;

use super::vertex::colors;
use crate::sim::GameState;

/// Score label position and size
pub const SCORE_POS: Vec2 = Vec2::new(10.0, 30.0);
pub const SCORE_FONT_PX: f32 = 20.0;
/// Game-over banner size; positioned from the viewport centre
pub const GAME_OVER_FONT_PX: f32 = 40.0;
/// Horizontal offset of the banner's left edge from the centre
pub const GAME_OVER_OFFSET_X: f32 = 100.0;

/// Which HUD line a text command fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Score,
    GameOver,
}

/// A single draw call in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear,
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Text with its baseline-left anchor at `pos`
    Text {
        role: TextRole,
        content: String,
        pos: Vec2,
        font_px: f32,
        color: [f32; 4],
    },
}

/// Build the draw list: clear, vehicle, smoke, obstacles, score, game over
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let viewport = state.viewport;
    let mut commands = Vec::with_capacity(4 + state.particles.len() + state.obstacles.len() * 2);

    commands.push(DrawCommand::Clear);

    let v = &state.vehicle;
    commands.push(DrawCommand::FillRect {
        pos: Vec2::new(v.x, v.y),
        size: Vec2::new(v.width, v.height),
        color: colors::VEHICLE,
    });

    commands.extend(state.particles.iter().map(|p| DrawCommand::FillCircle {
        center: p.pos,
        radius: p.size,
        color: colors::smoke(p.opacity),
    }));

    for obs in &state.obstacles {
        let (x, width) = (obs.x as f32, obs.width as f32);
        commands.push(DrawCommand::FillRect {
            pos: Vec2::new(x, 0.0),
            size: Vec2::new(width, obs.height as f32),
            color: colors::OBSTACLE,
        });
        let bottom = obs.gate_bottom() as f32;
        commands.push(DrawCommand::FillRect {
            pos: Vec2::new(x, bottom),
            size: Vec2::new(width, (viewport.height - bottom).max(0.0)),
            color: colors::OBSTACLE,
        });
    }

    commands.push(DrawCommand::Text {
        role: TextRole::Score,
        content: format!("Score: {}", state.score),
        pos: SCORE_POS,
        font_px: SCORE_FONT_PX,
        color: colors::TEXT,
    });

    if state.is_game_over() {
        commands.push(DrawCommand::Text {
            role: TextRole::GameOver,
            content: "Game Over".to_string(),
            pos: Vec2::new(
                viewport.width / 2.0 - GAME_OVER_OFFSET_X,
                viewport.height / 2.0,
            ),
            font_px: GAME_OVER_FONT_PX,
            color: colors::TEXT,
        });
    }

    commands
}
