//! Rendering module
//!
//! `scene` turns game state into draw commands; `pipeline` rasterizes the
//! shape commands with WebGPU. Text commands are shown by the DOM HUD.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, TextRole, build_frame};
