//! Shape generation for 2D primitives
//!
//! Produces triangle lists in screen pixels; the pipeline maps them to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::DrawCommand;
use super::vertex::Vertex;

/// Segments used for smoke puffs (small circles, so few are enough)
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Flatten a frame's shape commands into one triangle list.
///
/// `Clear` is handled by the render pass load op and text by the HUD, so
/// neither produces geometry. Empty shapes are skipped.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in commands {
        match command {
            DrawCommand::FillRect { pos, size, color } => {
                if size.x > 0.0 && size.y > 0.0 {
                    vertices.extend(rect(*pos, *size, *color));
                }
            }
            DrawCommand::FillCircle { center, radius, color } => {
                if *radius > 0.0 {
                    vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS));
                }
            }
            DrawCommand::Clear | DrawCommand::Text { .. } => {}
        }
    }

    vertices
}
