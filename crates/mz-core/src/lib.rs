//! mz-core: procedural maze generation
//!
//! Builds a wall/path grid in five stages: a randomized depth-first carve over
//! the odd lattice, optional dead-end spurs, probabilistic cycle injection,
//! start/goal selection and a final connectivity check that repairs the maze
//! if start and goal ended up disconnected.
//!
//! All randomness flows through a single seedable [`MazeRng`], so a fixed seed
//! reproduces an identical maze. The crate performs no rendering; collaborators
//! read the result through [`MazeQuery`].

pub mod config;
pub mod generator;
pub mod grid;
pub mod layout;

mod consts;
mod error;
mod query;
mod rng;

pub use config::{Difficulty, DifficultySettings, MazeConfig, MazeParams};
pub use consts::*;
pub use error::{ConfigError, MazeError};
pub use generator::{MazeResult, MazeStats, generate, generate_with_rng};
pub use grid::{CellState, Direction, Grid, Position};
pub use layout::CellLayout;
pub use query::MazeQuery;
pub use rng::MazeRng;
