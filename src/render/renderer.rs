//! Canvas drawing of standing walls
//!
//! The renderer draws only East and South flags plus an unconditional top and
//! left border. Each North or West wall is the mirrored East/South wall of a
//! neighboring cell or part of the border, so one pass over two flags covers
//! every wall while the mutual-consistency invariant keeps the picture
//! identical to drawing all four.

use image::{Rgb, RgbImage};

use crate::grid::{Direction, Maze};
use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_WALL_THICKNESS};
use crate::io::error::{Result, invalid_parameter};
use crate::render::color::{adjust_wall_color, sample_clamped};

/// Canvas geometry for rendering
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Interior size of one cell in pixels
    pub cell_size: u32,
    /// Stroke width of drawn walls in pixels
    pub wall_thickness: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

/// Draws the standing walls of a maze, colored from a source image
///
/// Holds a read-only reference to the source; rendering mutates nothing and
/// produces a fresh canvas per call.
#[derive(Debug)]
pub struct MazeRenderer<'a> {
    source: &'a RgbImage,
    options: RenderOptions,
}

impl<'a> MazeRenderer<'a> {
    /// Create a renderer sampling wall colors from `source`
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidParameter`] when the cell size or
    /// wall thickness is zero.
    pub fn new(source: &'a RgbImage, options: RenderOptions) -> Result<Self> {
        if options.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &options.cell_size,
                &"must be positive",
            ));
        }
        if options.wall_thickness == 0 {
            return Err(invalid_parameter(
                "wall_thickness",
                &options.wall_thickness,
                &"must be positive",
            ));
        }
        Ok(Self { source, options })
    }

    /// Rasterize the maze onto a fresh white canvas
    ///
    /// The canvas spans `grid * cell_size + wall_thickness` pixels per axis.
    /// Wall segments extend one wall thickness past the cell span so junction
    /// pixels connect.
    pub fn render(&self, maze: &Maze) -> RgbImage {
        let cell = self.options.cell_size;
        let wall = self.options.wall_thickness;
        let width = maze.width() as u32 * cell + wall;
        let height = maze.height() as u32 * cell + wall;
        let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

        // The top and left borders are always standing, regardless of flags
        let top = self.wall_color(width / 2, wall / 2);
        fill_rect(&mut canvas, 0, 0, width, wall, top);
        let left = self.wall_color(wall / 2, height / 2);
        fill_rect(&mut canvas, 0, 0, wall, height, left);

        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let cx = x as u32 * cell;
                let cy = y as u32 * cell;
                if maze.wall(x, y, Direction::East) {
                    let color = self.wall_color(cx + cell, cy + cell / 2);
                    fill_rect(&mut canvas, cx + cell, cy, wall, cell + wall, color);
                }
                if maze.wall(x, y, Direction::South) {
                    let color = self.wall_color(cx + cell / 2, cy + cell);
                    fill_rect(&mut canvas, cx, cy + cell, cell + wall, wall, color);
                }
            }
        }

        canvas
    }

    /// Adjusted source sample at a wall midpoint
    fn wall_color(&self, x: u32, y: u32) -> Rgb<u8> {
        adjust_wall_color(sample_clamped(self.source, x, y))
    }
}

// Clips to the canvas so border and edge walls never write out of range
fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(width).min(canvas.width());
    let y_end = y.saturating_add(height).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}
