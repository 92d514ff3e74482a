//! Pipeline constants and runtime configuration defaults

// Rendering geometry
/// Interior size of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 5;
/// Stroke width of drawn walls in pixels
pub const DEFAULT_WALL_THICKNESS: u32 = 1;

// Wall color handling
/// Minimum per-channel intensity treated as near-white
pub const NEAR_WHITE_THRESHOLD: u8 = 240;
/// Fallback wall color substituted for near-white samples
pub const WALL_FALLBACK_COLOR: [u8; 3] = [220, 220, 220];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed cells along either grid axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_maze";
