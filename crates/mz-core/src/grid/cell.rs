//! Cell states

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of a single grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Wall = 0,
    Path = 1,
}

impl CellState {
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellState::Wall)
    }

    pub const fn is_path(&self) -> bool {
        matches!(self, CellState::Path)
    }

    /// Plain text symbol for this state
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Path => '.',
        }
    }
}
