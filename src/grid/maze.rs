//! Wall flags and the maze field
//!
//! A maze is a rectangular field of per-cell wall flags. The central invariant
//! is mutual consistency: the wall between two adjacent cells is stored twice,
//! once on each side, and [`Maze::remove_wall_pair`] always clears both flags
//! so the two records never disagree.

use ndarray::Array2;

/// Cardinal directions over the cell grid, with y growing downward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller y
    North,
    /// Toward larger y
    South,
    /// Toward larger x
    East,
    /// Toward smaller x
    West,
}

impl Direction {
    /// All four directions in declaration order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Direction pointing back at the originating cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Coordinate offset as `(dx, dy)`
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

/// Per-cell wall flags, true meaning the wall is standing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSet {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

impl Default for WallSet {
    fn default() -> Self {
        Self::SEALED
    }
}

impl WallSet {
    /// Fully enclosed cell, all four walls standing
    pub const SEALED: Self = Self {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    /// Whether the wall toward `direction` is standing
    pub const fn has(self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Knock down the wall toward `direction`
    pub const fn remove(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = false,
            Direction::South => self.south = false,
            Direction::East => self.east = false,
            Direction::West => self.west = false,
        }
    }

    /// Whether all four walls are standing
    pub const fn is_sealed(self) -> bool {
        self.north && self.south && self.east && self.west
    }
}

/// Rectangular field of per-cell wall flags produced by generation
///
/// Built once by the generator and read-only afterward; the renderer consumes
/// it without further mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    walls: Array2<WallSet>,
    /// Grid dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl Maze {
    /// Create a fully walled maze of `width` x `height` cells
    pub fn sealed(width: usize, height: usize) -> Self {
        Self {
            walls: Array2::from_elem((height, width), WallSet::SEALED),
            dimensions: (height, width),
        }
    }

    /// Number of cells per row
    pub const fn width(&self) -> usize {
        self.dimensions.1
    }

    /// Number of cells per column
    pub const fn height(&self) -> usize {
        self.dimensions.0
    }

    /// Wall flags for one cell; out-of-bounds coordinates read as sealed
    pub fn cell(&self, x: usize, y: usize) -> WallSet {
        self.walls.get((y, x)).copied().unwrap_or(WallSet::SEALED)
    }

    /// Whether the wall of `(x, y)` toward `direction` is standing
    pub fn wall(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.cell(x, y).has(direction)
    }

    /// In-bounds neighbor of `(x, y)` toward `direction`
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.delta();
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        let in_bounds =
            nx >= 0 && ny >= 0 && (nx as usize) < self.width() && (ny as usize) < self.height();
        in_bounds.then_some((nx as usize, ny as usize))
    }

    /// Remove the wall between `(x, y)` and its neighbor toward `direction`
    ///
    /// Clears both mirrored flags so the two cells never disagree about the
    /// shared wall. Without an in-bounds neighbor nothing changes, keeping the
    /// grid perimeter intact.
    pub fn remove_wall_pair(&mut self, x: usize, y: usize, direction: Direction) {
        let Some((nx, ny)) = self.neighbor(x, y, direction) else {
            return;
        };
        if let Some(cell) = self.walls.get_mut((y, x)) {
            cell.remove(direction);
        }
        if let Some(cell) = self.walls.get_mut((ny, nx)) {
            cell.remove(direction.opposite());
        }
    }

    /// Count of removed wall-pairs, one per carved passage
    ///
    /// Every passage is recorded exactly once as a missing East or South flag
    /// (the mirrored West/North flag belongs to the same pair), so this equals
    /// the carving tree's edge count.
    pub fn removed_wall_pairs(&self) -> usize {
        self.walls
            .iter()
            .map(|cell| {
                usize::from(!cell.has(Direction::East)) + usize::from(!cell.has(Direction::South))
            })
            .sum()
    }
}
