//! Pixel geometry for renderers
//!
//! Generation never looks at pixels; these helpers only translate between
//! cell coordinates and screen coordinates for whoever draws the maze.

use crate::{DEFAULT_CELL_SIZE, MAX_CELL_SIZE};
use crate::grid::Position;

/// Square cell size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    cell_size: u32,
}

impl CellLayout {
    /// Layout with the given cell size, clamped to `1..=MAX_CELL_SIZE`
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Largest cell size that fits `rows × cols` into a viewport
    pub fn fit(viewport_width: u32, viewport_height: u32, rows: usize, cols: usize) -> Self {
        let by_width = viewport_width / pixels(cols.max(1));
        let by_height = viewport_height / pixels(rows.max(1));
        Self::new(by_width.min(by_height))
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Width and height in pixels of a `rows × cols` maze
    ///
    /// Saturates at `u32::MAX` instead of overflowing.
    pub fn pixel_size(&self, rows: usize, cols: usize) -> (u32, u32) {
        (
            pixels(cols).saturating_mul(self.cell_size),
            pixels(rows).saturating_mul(self.cell_size),
        )
    }

    /// Pixel (x, y) at the centre of a cell, saturating like `pixel_size`
    pub fn cell_center(&self, pos: Position) -> (u32, u32) {
        let s = self.cell_size;
        let centre = |n: usize| pixels(n).saturating_mul(s).saturating_add(s / 2);
        (centre(pos.col), centre(pos.row))
    }

    /// Cell containing pixel (x, y)
    pub fn cell_at(&self, x: u32, y: u32) -> Position {
        Position::new((y / self.cell_size) as usize, (x / self.cell_size) as usize)
    }
}

fn pixels(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center() {
        let layout = CellLayout::new(30);
        assert_eq!(layout.cell_center(Position::new(0, 0)), (15, 15));
        assert_eq!(layout.cell_center(Position::new(2, 3)), (105, 75));
    }

    #[test]
    fn test_cell_at_inverts_center() {
        let layout = CellLayout::new(30);
        assert_eq!(layout.cell_at(15, 15), Position::new(0, 0));
        assert_eq!(layout.cell_at(95, 65), Position::new(2, 3));
        let pos = Position::new(7, 4);
        let (x, y) = layout.cell_center(pos);
        assert_eq!(layout.cell_at(x, y), pos);
    }

    #[test]
    fn test_pixel_size() {
        let layout = CellLayout::default();
        assert_eq!(layout.pixel_size(15, 20), (600, 450));
    }

    #[test]
    fn test_fit_viewport() {
        // 800x520 play area, 25x25 maze -> min(32, 20)
        assert_eq!(CellLayout::fit(800, 520, 25, 25).cell_size(), 20);
        assert_eq!(CellLayout::fit(10, 10, 55, 55).cell_size(), 1);
    }

    #[test]
    fn test_huge_cell_size_is_clamped() {
        let layout = CellLayout::new(200_000_000);
        assert_eq!(layout.cell_size(), MAX_CELL_SIZE);
        assert_eq!(layout.pixel_size(25, 25), (25 * 1024, 25 * 1024));
        assert_eq!(CellLayout::new(0).cell_size(), 1);
    }

    #[test]
    fn test_geometry_saturates() {
        let layout = CellLayout::new(MAX_CELL_SIZE);
        assert_eq!(layout.pixel_size(usize::MAX, 5_000_000), (u32::MAX, u32::MAX));
        let far = Position::new(usize::MAX, 10);
        assert_eq!(layout.cell_center(far), (10 * 1024 + 512, u32::MAX));
        assert_eq!(CellLayout::fit(800, 600, usize::MAX, 10).cell_size(), 1);
    }
}
