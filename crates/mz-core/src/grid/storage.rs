//! Wall/path storage

use std::fmt;

use super::{CellState, Direction, Position};
use crate::MIN_DIMENSION;
use crate::error::MazeError;

/// Rectangular wall/path grid, one byte per cell, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocate a grid with every cell set to Wall
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions {
                rows,
                cols,
                min: MIN_DIMENSION,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Wall; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Check if a signed coordinate lies on the grid
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Check if a position is strictly inside the outer ring
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.col >= 1 && pos.row + 1 < self.rows && pos.col + 1 < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.index(pos.row, pos.col).map(|i| self.cells[i])
    }

    /// Wall check where everything outside the grid counts as wall
    pub fn is_wall(&self, row: isize, col: isize) -> bool {
        if !self.in_bounds(row, col) {
            return true;
        }
        self.cells[row as usize * self.cols + col as usize].is_wall()
    }

    /// Path check; false outside the grid
    pub fn is_path(&self, row: isize, col: isize) -> bool {
        !self.is_wall(row, col)
    }

    pub fn is_wall_at(&self, pos: Position) -> bool {
        self.get(pos).is_none_or(|state| state.is_wall())
    }

    pub fn is_path_at(&self, pos: Position) -> bool {
        !self.is_wall_at(pos)
    }

    /// Set a cell; out-of-range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = state;
        }
    }

    pub fn set_at(&mut self, pos: Position, state: CellState) {
        self.set(pos.row, pos.col, state);
    }

    /// Turn a cell into Path
    pub fn carve(&mut self, pos: Position) {
        self.set_at(pos, CellState::Path);
    }

    pub fn path_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_path()).count()
    }

    pub fn wall_count(&self) -> usize {
        self.size() - self.path_count()
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Position::new(i / self.cols, i % self.cols), state))
    }

    /// Path cells strictly inside the outer ring, row-major
    pub fn interior_paths(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |&(pos, state)| state.is_path() && self.is_interior(pos))
            .map(|(pos, _)| pos)
    }

    /// In-bounds orthogonal neighbours of a position
    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir, 1))
            .filter(move |&p| self.contains(p))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(CellState::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_wall() {
        let grid = Grid::new(5, 7).unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.size(), 35);
        assert_eq!(grid.path_count(), 0);
        assert!(grid.iter().all(|(_, s)| s == CellState::Wall));
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Grid::new(2, 2),
            Err(MazeError::InvalidDimensions {
                rows: 2,
                cols: 2,
                min: 3
            })
        );
        assert!(Grid::new(3, 2).is_err());
        assert!(Grid::new(2, 3).is_err());
        assert!(Grid::new(3, 3).is_ok());
    }

    #[test]
    fn test_exterior_is_wall() {
        let mut grid = Grid::new(4, 6).unwrap();
        for r in 0..4 {
            for c in 0..6 {
                grid.set(r, c, CellState::Path);
            }
        }
        assert!(grid.is_wall(-1, 0));
        assert!(grid.is_wall(0, -1));
        assert!(grid.is_wall(4, 0));
        assert!(grid.is_wall(0, 6));
        assert!(!grid.is_path(-1, 0));
        assert!(grid.is_path(3, 5));
    }

    #[test]
    fn test_set_out_of_range_ignored() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(3, 0, CellState::Path);
        grid.set(0, 99, CellState::Path);
        assert_eq!(grid.path_count(), 0);

        grid.set(1, 1, CellState::Path);
        assert!(grid.is_path(1, 1));
        assert!(grid.is_path_at(Position::new(1, 1)));
        grid.set(1, 1, CellState::Wall);
        assert!(grid.is_wall(1, 1));
    }

    #[test]
    fn test_interior_paths_skip_border() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.carve(Position::new(0, 1));
        grid.carve(Position::new(1, 1));
        grid.carve(Position::new(2, 2));
        grid.carve(Position::new(3, 3));
        let interior: Vec<_> = grid.interior_paths().collect();
        assert_eq!(interior, vec![Position::new(1, 1), Position::new(2, 2)]);
    }

    #[test]
    fn test_neighbours_clip_to_grid() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbours(Position::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbours(Position::new(1, 1)).count(), 4);
        assert_eq!(grid.neighbours(Position::new(2, 1)).count(), 3);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.carve(Position::new(1, 1));
        assert_eq!(grid.to_string(), "###\n#.#\n###\n");
    }
}
