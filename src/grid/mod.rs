//! Grid data model shared by generation and rendering
//!
//! This module contains the rectangular-grid structures the pipeline operates
//! on: the eligibility mask consulted during carving and the per-cell wall
//! field produced by generation.

/// Cell eligibility masks
pub mod mask;
/// Directions, wall flags, and the maze field
pub mod maze;

pub use mask::Mask;
pub use maze::{Direction, Maze, WallSet};
