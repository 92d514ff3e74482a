//! Source image loading, grid sizing, and PNG export

use std::path::Path;

use image::RgbImage;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter};

/// Decode the source image into RGB pixels
///
/// # Errors
///
/// Returns [`MazeError::ImageLoad`] when the file is missing, unreadable, or
/// not decodable as an image.
pub fn load_source_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MazeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Cell-grid dimensions spanned by a source image
///
/// Integer division; remainder pixels past the last full cell are not
/// represented in the grid and are absent from the output canvas.
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The image is smaller than one cell along either axis
/// - The derived grid exceeds the per-axis dimension limit
pub fn derived_grid_size(image: &RgbImage, cell_size: u32) -> Result<(usize, usize)> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be positive",
        ));
    }

    let grid_width = (image.width() / cell_size) as usize;
    let grid_height = (image.height() / cell_size) as usize;
    if grid_width == 0 || grid_height == 0 {
        return Err(MazeError::DegenerateGrid {
            image_dimensions: (image.width(), image.height()),
            cell_size,
        });
    }
    if grid_width > MAX_GRID_DIMENSION || grid_height > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!(
                "yields a {grid_width}x{grid_height} grid, above the {MAX_GRID_DIMENSION} per-axis limit"
            ),
        ));
    }

    Ok((grid_width, grid_height))
}

/// Write the rendered maze to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_image(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
