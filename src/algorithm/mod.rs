//! Maze carving algorithms

/// Randomized depth-first carving
pub mod generator;

pub use generator::MazeGenerator;
