//! Perfect-maze generation over raster images with source-sampled wall colors
//!
//! The pipeline derives a cell grid from a source image, carves a spanning-tree
//! maze with a seeded depth-first backtracker, and rasterizes the standing walls
//! in colors sampled from the source at each wall's midpoint.

#![forbid(unsafe_code)]

/// Maze carving algorithms
pub mod algorithm;
/// Mask, wall, and maze data structures
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Rasterization of generated mazes against source imagery
pub mod render;

pub use io::error::{MazeError, Result};
