//! Read-only query surface for collaborators (renderers, movement, HUD)

use crate::generator::MazeResult;
use crate::grid::Position;

/// What a consumer of a finished maze is allowed to ask
pub trait MazeQuery {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// True for wall cells and for any coordinate outside the maze
    fn is_wall(&self, row: isize, col: isize) -> bool;

    fn is_goal(&self, row: isize, col: isize) -> bool {
        let goal = self.goal();
        row == goal.row as isize && col == goal.col as isize
    }

    fn start(&self) -> Position;
    fn goal(&self) -> Position;
}

impl MazeQuery for MazeResult {
    fn rows(&self) -> usize {
        self.grid().rows()
    }

    fn cols(&self) -> usize {
        self.grid().cols()
    }

    fn is_wall(&self, row: isize, col: isize) -> bool {
        self.grid().is_wall(row, col)
    }

    fn start(&self) -> Position {
        MazeResult::start(self)
    }

    fn goal(&self) -> Position {
        MazeResult::goal(self)
    }
}
