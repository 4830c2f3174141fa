//! Maze generation pipeline
//!
//! Stages run in a fixed order on one grid and one RNG:
//! carve → spurs → cycles → endpoints → connectivity repair.

pub mod carve;
pub mod complexity;
pub mod connectivity;
pub mod cycles;
pub mod endpoints;

use crate::config::MazeParams;
use crate::error::MazeError;
use crate::grid::{Grid, Position};
use crate::rng::MazeRng;

pub use carve::{BranchCandidate, CarveRecord, carve_spanning_tree};
pub use complexity::{branch_factor, inject_complexity};
pub use connectivity::{
    carve_direct_path, ensure_connected, is_reachable, path_distance, shortest_path,
};
pub use cycles::{cycle_probability, inject_cycles};
pub use endpoints::select_endpoints;

/// Counters collected while generating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStats {
    pub branch_points: usize,
    pub spurs_carved: usize,
    pub cycles_opened: usize,
    pub repaired: bool,
}

/// A finished maze: read-only grid plus fixed start and goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeResult {
    grid: Grid,
    start: Position,
    goal: Position,
    seed: u64,
    stats: MazeStats,
}

impl MazeResult {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Seed of the RNG the maze was generated with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> MazeStats {
        self.stats
    }

    /// Shortest start-to-goal route
    pub fn solution(&self) -> Vec<Position> {
        shortest_path(&self.grid, self.start, self.goal).unwrap_or_default()
    }
}

/// Generate a maze, seeding from `params.seed` or from entropy
pub fn generate(params: &MazeParams) -> Result<MazeResult, MazeError> {
    let mut rng = match params.seed {
        Some(seed) => MazeRng::new(seed),
        None => MazeRng::from_entropy(),
    };
    generate_with_rng(params, &mut rng)
}

/// Generate a maze drawing every random choice from `rng`
///
/// `params.seed` is ignored here; the caller owns the generator.
pub fn generate_with_rng(params: &MazeParams, rng: &mut MazeRng) -> Result<MazeResult, MazeError> {
    let mut grid = Grid::new(params.rows, params.cols)?;
    let complexity = params.effective_complexity();
    let density = params.effective_density();

    let mut record = carve_spanning_tree(&mut grid, rng);
    let branch_points = record.branches.len();
    let spurs_carved = inject_complexity(&mut grid, &mut record, complexity, rng);
    let cycles_opened = inject_cycles(&mut grid, density, rng);

    let (start, goal) = select_endpoints(&mut grid);
    let repaired = ensure_connected(&mut grid, start, goal);

    let stats = MazeStats {
        branch_points,
        spurs_carved,
        cycles_opened,
        repaired,
    };
    log::info!(
        "generated {}x{} maze (seed {}): start {} goal {}, {} path cells",
        params.rows,
        params.cols,
        rng.seed(),
        start,
        goal,
        grid.path_count()
    );

    Ok(MazeResult {
        grid,
        start,
        goal,
        seed: rng.seed(),
        stats,
    })
}
