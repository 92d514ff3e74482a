//! Randomized depth-first maze carving
//!
//! Implements the recursive-backtracker algorithm with an explicit frame stack
//! instead of call-frame recursion, so traversal depth is bounded by heap
//! rather than call stack while visiting cells in the exact order the
//! recursive form would. Randomness comes from a seeded generator owned by
//! [`MazeGenerator`], never from ambient process-wide state.

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::grid::{Direction, Mask, Maze};
use crate::io::error::{MazeError, Result};

/// One in-flight cell during traversal
///
/// `next` indexes into `directions`; a frame is exhausted once all four
/// shuffled directions have been tried, at which point control backtracks to
/// the frame below it.
struct Frame {
    x: usize,
    y: usize,
    directions: [Direction; 4],
    next: usize,
}

/// Seeded depth-first maze generator
///
/// Equal seeds produce bit-identical wall configurations for equal inputs.
pub struct MazeGenerator {
    rng: StdRng,
}

impl MazeGenerator {
    /// Create a generator with a deterministic random stream
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Carve a spanning-tree maze over the mask's grid from `(start_x, start_y)`
    ///
    /// Every carve is a visited-to-unvisited transition, so each connected
    /// eligible region containing the start ends up spanned by a cycle-free
    /// tree of passages. Cells unreachable from the start through eligible
    /// cells keep all four walls. An ineligible start cell is marked visited
    /// but carves no outgoing passage, yielding a fully walled maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::StartOutOfBounds`] when the start coordinate lies
    /// outside the grid. No clamping is applied.
    pub fn generate(&mut self, mask: &Mask, start_x: usize, start_y: usize) -> Result<Maze> {
        let (width, height) = (mask.width(), mask.height());
        if start_x >= width || start_y >= height {
            return Err(MazeError::StartOutOfBounds {
                start: (start_x, start_y),
                grid_dimensions: (width, height),
            });
        }

        let mut maze = Maze::sealed(width, height);
        let mut visited = Array2::from_elem((height, width), false);
        if let Some(flag) = visited.get_mut((start_y, start_x)) {
            *flag = true;
        }

        let mut stack = Vec::new();
        if mask.is_eligible(start_x, start_y) {
            stack.push(self.open_frame(start_x, start_y));
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&direction) = frame.directions.get(frame.next) else {
                // All four directions tried; backtrack
                stack.pop();
                continue;
            };
            frame.next += 1;
            let (x, y) = (frame.x, frame.y);

            let Some((nx, ny)) = maze.neighbor(x, y, direction) else {
                continue;
            };
            let unvisited = !visited.get((ny, nx)).copied().unwrap_or(true);
            if unvisited && mask.is_eligible(nx, ny) {
                maze.remove_wall_pair(x, y, direction);
                if let Some(flag) = visited.get_mut((ny, nx)) {
                    *flag = true;
                }
                // Descend immediately; remaining directions of the current
                // cell resume after the new branch is exhausted
                stack.push(self.open_frame(nx, ny));
            }
        }

        Ok(maze)
    }

    /// New frame with an independently shuffled direction order
    fn open_frame(&mut self, x: usize, y: usize) -> Frame {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);
        Frame {
            x,
            y,
            directions,
            next: 0,
        }
    }
}
