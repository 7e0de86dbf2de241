//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, straight alpha)
pub mod colors {
    pub const VEHICLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0]; // #f00
    pub const OBSTACLE: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // #0f0
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // #fff
    /// rgb(128, 128, 128)
    pub const SMOKE_RGB: [f32; 3] = [128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Smoke color at the given opacity
    #[inline]
    pub fn smoke(opacity: f32) -> [f32; 4] {
        [SMOKE_RGB[0], SMOKE_RGB[1], SMOKE_RGB[2], opacity.clamp(0.0, 1.0)]
    }
}
