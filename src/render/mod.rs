//! Rasterization of generated mazes against source imagery

/// Wall color sampling and near-white adjustment
pub mod color;
/// Canvas drawing of standing walls
pub mod renderer;

pub use renderer::{MazeRenderer, RenderOptions};
