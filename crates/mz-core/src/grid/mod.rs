//! Grid storage
//!
//! Contains the wall/path array, cell states, positions and directions.

mod cell;
mod position;
mod storage;

pub use cell::CellState;
pub use position::{Direction, Position};
pub use storage::Grid;
