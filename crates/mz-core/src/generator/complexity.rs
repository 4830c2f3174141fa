//! Dead-end spurs off recorded branch points

use super::carve::{CarveRecord, lattice_step};
use crate::grid::{Direction, Grid, Position};
use crate::rng::MazeRng;
use crate::{BRANCH_FACTOR_SCALE, MAX_BRANCH_FACTOR, MAX_SPUR_LENGTH, MIN_SPUR_LENGTH};

/// Share of branch points that get a spur for a given complexity
pub fn branch_factor(complexity: f64) -> f64 {
    (complexity * BRANCH_FACTOR_SCALE).min(MAX_BRANCH_FACTOR)
}

/// Carve dead-end spurs off a random subset of branch points
///
/// Only unvisited rooms are ever carved, so the maze stays a tree.
/// Returns the number of spurs created.
pub fn inject_complexity(
    grid: &mut Grid,
    record: &mut CarveRecord,
    complexity: f64,
    rng: &mut MazeRng,
) -> usize {
    rng.shuffle(&mut record.branches);

    let total = record.branches.len();
    let selected = ((total as f64 * branch_factor(complexity)).round() as usize).min(total);
    let mut spurs = 0;

    for i in 0..selected {
        let cell = record.branches[i].cell;
        let entry = record.branches[i]
            .remaining
            .iter()
            .filter_map(|&dir| lattice_step(grid, cell, dir))
            .find(|(_, room)| !record.visited.contains(room));

        let Some((wall, room)) = entry else {
            continue;
        };

        grid.carve(wall);
        grid.carve(room);
        record.visited.insert(room);

        let length = rng.range_inclusive(MIN_SPUR_LENGTH, MAX_SPUR_LENGTH);
        extend_dead_end(grid, record, room, length, rng);
        spurs += 1;
    }

    log::debug!(
        "complexity {:.2}: {} of {} branch points selected, {} spurs carved",
        complexity,
        selected,
        total,
        spurs
    );

    spurs
}

/// Extend a corridor up to `length` rooms through unvisited cells
fn extend_dead_end(
    grid: &mut Grid,
    record: &mut CarveRecord,
    mut from: Position,
    length: usize,
    rng: &mut MazeRng,
) {
    for _ in 0..length {
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);

        let next = dirs
            .into_iter()
            .filter_map(|dir| lattice_step(grid, from, dir))
            .find(|(_, room)| !record.visited.contains(room));

        let Some((wall, room)) = next else {
            break;
        };

        grid.carve(wall);
        grid.carve(room);
        record.visited.insert(room);
        from = room;
    }
}
