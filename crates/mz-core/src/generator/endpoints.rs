//! Start and goal selection
//!
//! Start goes near the top-left corner and goal near the bottom-right, both on
//! existing Path cells. Each choice falls back to a wider candidate set when
//! the preferred quadrant has nothing to offer.

use crate::grid::{Direction, Grid, Position};

/// Choose start and goal; both are forced to Path before returning
pub fn select_endpoints(grid: &mut Grid) -> (Position, Position) {
    let paths: Vec<Position> = grid.interior_paths().collect();

    if paths.is_empty() {
        log::warn!("no path cells after carving; forcing a minimal path");
        let start = Position::new(1, 1);
        let goal = fallback_goal(grid, start);
        grid.carve(start);
        grid.carve(goal);
        return (start, goal);
    }

    let mid_row = grid.rows() / 2;
    let mid_col = grid.cols() / 2;

    let start = pick_start(&paths, mid_row, mid_col);

    let min_separation = grid.rows().max(grid.cols()) / 2;
    let mut goal_candidates: Vec<Position> = paths
        .iter()
        .copied()
        .filter(|p| p.row >= mid_row && p.col >= mid_col && p.manhattan(start) > min_separation)
        .collect();
    if goal_candidates.is_empty() {
        goal_candidates = paths
            .iter()
            .copied()
            .filter(|p| p.col >= mid_col && *p != start)
            .collect();
    }
    if goal_candidates.is_empty() {
        goal_candidates = paths.iter().copied().filter(|p| *p != start).collect();
    }

    // Largest (rows-1-row) + (cols-1-col); first in row-major order on ties
    let goal = match goal_candidates.iter().copied().min_by_key(|p| p.row + p.col) {
        Some(goal) => goal,
        None => {
            let goal = fallback_goal(grid, start);
            log::warn!("no alternative path cell for goal; carving {}", goal);
            goal
        }
    };

    grid.carve(start);
    grid.carve(goal);

    log::debug!("endpoints: start {} goal {}", start, goal);
    (start, goal)
}

fn pick_start(paths: &[Position], mid_row: usize, mid_col: usize) -> Position {
    let top_left: Vec<Position> = paths
        .iter()
        .copied()
        .filter(|p| p.row < mid_row && p.col < mid_col)
        .collect();
    let left: Vec<Position> = if top_left.is_empty() {
        paths.iter().copied().filter(|p| p.col < mid_col).collect()
    } else {
        top_left
    };
    let candidates = if left.is_empty() { paths } else { &left[..] };

    candidates
        .iter()
        .copied()
        .min_by_key(|p| p.row + p.col)
        .unwrap_or(paths[0])
}

/// Forced goal at `(rows - 2, cols - 2)`, or a neighbour of start if that is start itself
fn fallback_goal(grid: &Grid, start: Position) -> Position {
    let far = Position::new(grid.rows() - 2, grid.cols() - 2);
    if far != start {
        return far;
    }
    [Direction::East, Direction::South, Direction::West, Direction::North]
        .into_iter()
        .filter_map(|dir| start.step(dir, 1))
        .find(|&p| grid.contains(p))
        .unwrap_or(far)
}
