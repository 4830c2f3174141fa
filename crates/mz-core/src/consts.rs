//! Generator constants
//!
//! The tuning factors below were chosen empirically. Changing them changes the
//! character of the mazes, not their correctness.

/// Smallest legal number of rows or columns
pub const MIN_DIMENSION: usize = 3;

/// Default tuning factors
pub const DEFAULT_COMPLEXITY: f64 = 0.5;
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Upper bound on the share of branch points that receive an extra spur
pub const MAX_BRANCH_FACTOR: f64 = 0.3;

/// Multiplier applied to complexity to derive the branch factor
pub const BRANCH_FACTOR_SCALE: f64 = 0.4;

/// Multiplier applied to density to derive the wall removal probability
pub const CYCLE_PROBABILITY_SCALE: f64 = 0.15;

/// Carving moves two cells at a time so walls land between rooms
pub const CARVE_STEP: isize = 2;

/// Dead-end spur length range, in rooms
pub const MIN_SPUR_LENGTH: usize = 1;
pub const MAX_SPUR_LENGTH: usize = 3;

/// Default rendered cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 30;

/// Largest accepted cell size in pixels
pub const MAX_CELL_SIZE: u32 = 1024;
