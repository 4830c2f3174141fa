//! Cycle injection
//!
//! Knocks out some of the pillar walls sitting at even-even offsets whose two
//! opposite neighbours are already open, which links regions that were
//! connected only through the tree and so creates alternate routes.

use crate::CYCLE_PROBABILITY_SCALE;
use crate::grid::{CellState, Direction, Grid, Position};
use crate::rng::MazeRng;

/// Wall removal probability for a given density
pub fn cycle_probability(density: f64) -> f64 {
    density * CYCLE_PROBABILITY_SCALE
}

/// A wall qualifies when both cells across it, in either axis, are Path
fn bridges_open_cells(grid: &Grid, pos: Position) -> bool {
    let open = |dir: Direction| {
        let (dr, dc) = dir.delta();
        grid.is_path(pos.row as isize + dr, pos.col as isize + dc)
    };
    [Direction::North, Direction::East]
        .into_iter()
        .any(|dir| open(dir) && open(dir.opposite()))
}

/// Remove qualifying interior walls with probability `density * 0.15`
///
/// A random draw is consumed only for qualifying walls. Returns the number of
/// walls opened.
pub fn inject_cycles(grid: &mut Grid, density: f64, rng: &mut MazeRng) -> usize {
    let probability = cycle_probability(density);
    let mut opened = 0;

    for row in (2..grid.rows().saturating_sub(2)).step_by(2) {
        for col in (2..grid.cols().saturating_sub(2)).step_by(2) {
            let pos = Position::new(row, col);
            if !grid.is_wall_at(pos) || !bridges_open_cells(grid, pos) {
                continue;
            }
            if rng.uniform() < probability {
                grid.set_at(pos, CellState::Path);
                opened += 1;
            }
        }
    }

    log::debug!(
        "density {:.2}: opened {} walls (p = {:.3})",
        density,
        opened,
        probability
    );

    opened
}
