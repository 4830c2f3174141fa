//! Spanning tree carving
//!
//! Randomized iterative depth-first search over the odd lattice. Rooms sit at
//! odd (row, col) offsets strictly inside the border; the even cells between
//! them are walls until a passage is knocked through.

use hashbrown::HashSet;

use crate::CARVE_STEP;
use crate::grid::{Direction, Grid, Position};
use crate::rng::MazeRng;

/// A carved cell that still had unvisited neighbours when the walk left it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    pub cell: Position,
    /// Directions that were unvisited but not taken
    pub remaining: Vec<Direction>,
}

/// Output of the carve: visited rooms and the branch points found on the way
#[derive(Debug, Clone, Default)]
pub struct CarveRecord {
    pub visited: HashSet<Position>,
    pub branches: Vec<BranchCandidate>,
}

/// Step two cells from `from`, returning (wall between, target room)
///
/// The target must stay inside the border-adjusted bounds
/// `1 <= row < rows - 1`, `1 <= col < cols - 1`.
pub(crate) fn lattice_step(
    grid: &Grid,
    from: Position,
    dir: Direction,
) -> Option<(Position, Position)> {
    let room = from.step(dir, CARVE_STEP)?;
    if !grid.is_interior(room) {
        return None;
    }
    let wall = from.step(dir, 1)?;
    Some((wall, room))
}

/// Pick a random odd origin strictly inside the border
fn carve_origin(grid: &Grid, rng: &mut MazeRng) -> Position {
    let row = 1 + 2 * rng.below((grid.rows() - 1) / 2);
    let col = 1 + 2 * rng.below((grid.cols() - 1) / 2);
    Position::new(row, col)
}

/// Carve a perfect maze into an all-wall grid
pub fn carve_spanning_tree(grid: &mut Grid, rng: &mut MazeRng) -> CarveRecord {
    let origin = carve_origin(grid, rng);
    grid.carve(origin);

    let mut record = CarveRecord::default();
    record.visited.insert(origin);

    let mut stack = Vec::with_capacity(grid.size() / 4);
    stack.push(origin);

    while let Some(&current) = stack.last() {
        let mut dirs = Direction::ALL;
        rng.shuffle(&mut dirs);

        let open: Vec<(Direction, Position, Position)> = dirs
            .into_iter()
            .filter_map(|dir| {
                lattice_step(grid, current, dir).map(|(wall, room)| (dir, wall, room))
            })
            .filter(|(_, _, room)| !record.visited.contains(room))
            .collect();

        let Some(&(_, wall, room)) = open.first() else {
            stack.pop();
            continue;
        };

        if open.len() > 1 {
            record.branches.push(BranchCandidate {
                cell: current,
                remaining: open[1..].iter().map(|&(dir, _, _)| dir).collect(),
            });
        }

        grid.carve(wall);
        grid.carve(room);
        record.visited.insert(room);
        stack.push(room);
    }

    log::debug!(
        "carved spanning tree from {}: {} rooms, {} branch points",
        origin,
        record.visited.len(),
        record.branches.len()
    );

    record
}
