//! Error types for the maze generation pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
///
/// None of these are recoverable internally; each stage signals its failure
/// and the caller reports which stage broke and why.
#[derive(Debug)]
pub enum MazeError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source image spans zero cells along some axis
    DegenerateGrid {
        /// Source image dimensions in pixels (width, height)
        image_dimensions: (u32, u32),
        /// Cell size the grid was derived with
        cell_size: u32,
    },

    /// Generation start coordinate outside the derived grid
    StartOutOfBounds {
        /// The rejected start coordinate (x, y)
        start: (usize, usize),
        /// Grid dimensions in cells (width, height)
        grid_dimensions: (usize, usize),
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DegenerateGrid {
                image_dimensions,
                cell_size,
            } => {
                write!(
                    f,
                    "Image {}x{} is smaller than one {cell_size}px cell along an axis",
                    image_dimensions.0, image_dimensions.1
                )
            }
            Self::StartOutOfBounds {
                start,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Start cell ({}, {}) is outside the {}x{} grid",
                    start.0, start.1, grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_out_of_bounds_display() {
        let err = MazeError::StartOutOfBounds {
            start: (7, 2),
            grid_dimensions: (5, 5),
        };
        assert_eq!(err.to_string(), "Start cell (7, 2) is outside the 5x5 grid");
    }

    #[test]
    fn test_degenerate_grid_display_names_both_sizes() {
        let err = MazeError::DegenerateGrid {
            image_dimensions: (4, 9),
            cell_size: 5,
        };
        let message = err.to_string();
        assert!(message.contains("4x9"));
        assert!(message.contains("5px"));
    }

    #[test]
    fn test_file_system_error_exposes_source() {
        let err: MazeError = std::io::Error::other("disk full").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
