//! Cell eligibility masks for maze generation

use ndarray::Array2;

/// Per-cell eligibility field consulted during carving
///
/// Immutable once built. The standard pipeline derives an all-passable mask
/// from the source image dimensions; [`Mask::from_cells`] exists for callers
/// supplying their own eligibility field, with no particular rule assumed.
#[derive(Clone, Debug)]
pub struct Mask {
    cells: Array2<bool>,
}

impl Mask {
    /// Create a mask marking every cell of a `width` x `height` grid eligible
    pub fn all_passable(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), true),
        }
    }

    /// Wrap an explicit eligibility field, indexed `(row, column)`
    pub const fn from_cells(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Number of cells per row
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of cells per column
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether `(x, y)` may be carved; out-of-bounds coordinates read as ineligible
    pub fn is_eligible(&self, x: usize, y: usize) -> bool {
        self.cells.get((y, x)).copied().unwrap_or(false)
    }
}
