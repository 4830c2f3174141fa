//! Connectivity verification and repair
//!
//! Breadth-first search over all cells in single steps. When start and goal are
//! not connected an L-shaped corridor is carved between them, which always
//! succeeds and is never retried.

use std::collections::VecDeque;

use crate::grid::{Grid, Position};

/// Parent table for a BFS from `from`, indexed row-major; stops once `to` is reached
fn search(grid: &Grid, from: Position, to: Position) -> Option<Vec<Option<usize>>> {
    if !grid.is_path_at(from) || !grid.is_path_at(to) {
        return None;
    }

    let cols = grid.cols();
    let index = |p: Position| p.row * cols + p.col;

    let mut parent: Vec<Option<usize>> = vec![None; grid.size()];
    let mut seen = vec![false; grid.size()];
    let mut queue = VecDeque::new();

    seen[index(from)] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return Some(parent);
        }
        for next in grid.neighbours(current) {
            let i = index(next);
            if seen[i] || grid.is_wall_at(next) {
                continue;
            }
            seen[i] = true;
            parent[i] = Some(index(current));
            queue.push_back(next);
        }
    }

    None
}

/// Check whether a 4-connected run of Path cells joins two positions
pub fn is_reachable(grid: &Grid, from: Position, to: Position) -> bool {
    search(grid, from, to).is_some()
}

/// Shortest route between two positions, inclusive of both ends
pub fn shortest_path(grid: &Grid, from: Position, to: Position) -> Option<Vec<Position>> {
    let parent = search(grid, from, to)?;
    let cols = grid.cols();

    let mut route = vec![to];
    let mut current = to.row * cols + to.col;
    while let Some(prev) = parent[current] {
        route.push(Position::new(prev / cols, prev % cols));
        current = prev;
    }
    route.reverse();
    Some(route)
}

/// Number of steps on the shortest route
pub fn path_distance(grid: &Grid, from: Position, to: Position) -> Option<usize> {
    shortest_path(grid, from, to).map(|route| route.len() - 1)
}

/// Carve along `from`'s row to `to`'s column, then down or up that column to `to`
pub fn carve_direct_path(grid: &mut Grid, from: Position, to: Position) {
    let mut current = from;
    grid.carve(current);

    while current.col != to.col {
        if current.col < to.col {
            current.col += 1;
        } else {
            current.col -= 1;
        }
        grid.carve(current);
    }

    while current.row != to.row {
        if current.row < to.row {
            current.row += 1;
        } else {
            current.row -= 1;
        }
        grid.carve(current);
    }
}

/// Guarantee start and goal are connected, repairing if needed
///
/// Returns true if a corridor had to be carved.
pub fn ensure_connected(grid: &mut Grid, start: Position, goal: Position) -> bool {
    if is_reachable(grid, start, goal) {
        return false;
    }
    log::warn!(
        "start {} cannot reach goal {}; carving a direct corridor",
        start,
        goal
    );
    carve_direct_path(grid, start, goal);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '.' {
                    grid.carve(Position::new(r, c));
                }
            }
        }
        grid
    }

    #[test]
    fn test_reachable_through_corridor() {
        let grid = grid_from(&[
            "#####",
            "#...#",
            "###.#",
            "#...#",
            "#####",
        ]);
        assert!(is_reachable(&grid, Position::new(1, 1), Position::new(3, 1)));
        assert_eq!(
            path_distance(&grid, Position::new(1, 1), Position::new(3, 1)),
            Some(6)
        );
    }

    #[test]
    fn test_walls_block() {
        let grid = grid_from(&[
            "#####",
            "#.#.#",
            "#.#.#",
            "#####",
        ]);
        assert!(!is_reachable(&grid, Position::new(1, 1), Position::new(1, 3)));
        assert!(shortest_path(&grid, Position::new(1, 1), Position::new(1, 3)).is_none());
    }

    #[test]
    fn test_wall_endpoint_unreachable() {
        let grid = grid_from(&["###", "#.#", "###"]);
        assert!(!is_reachable(&grid, Position::new(1, 1), Position::new(0, 0)));
    }

    #[test]
    fn test_same_cell_reachable() {
        let grid = grid_from(&["###", "#.#", "###"]);
        let p = Position::new(1, 1);
        assert!(is_reachable(&grid, p, p));
        assert_eq!(shortest_path(&grid, p, p), Some(vec![p]));
    }

    #[test]
    fn test_shortest_path_is_contiguous() {
        let grid = grid_from(&[
            "#######",
            "#.....#",
            "#.###.#",
            "#.....#",
            "#######",
        ]);
        let from = Position::new(1, 1);
        let to = Position::new(3, 5);
        let route = shortest_path(&grid, from, to).unwrap();
        assert_eq!(route.first(), Some(&from));
        assert_eq!(route.last(), Some(&to));
        assert_eq!(route.len(), 7);
        for pair in route.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
            assert!(grid.is_path_at(pair[1]));
        }
    }

    #[test]
    fn test_direct_path_is_l_shaped() {
        let mut grid = Grid::new(7, 7).unwrap();
        let from = Position::new(1, 5);
        let to = Position::new(5, 1);
        carve_direct_path(&mut grid, from, to);

        for col in 1..=5 {
            assert!(grid.is_path(1, col));
        }
        for row in 1..=5 {
            assert!(grid.is_path(row, 1));
        }
        assert_eq!(grid.path_count(), 9);
        assert!(is_reachable(&grid, from, to));
    }

    #[test]
    fn test_ensure_connected_repairs_once() {
        let mut grid = grid_from(&[
            "#######",
            "#.#####",
            "#######",
            "#####.#",
            "#######",
        ]);
        let start = Position::new(1, 1);
        let goal = Position::new(3, 5);
        assert!(ensure_connected(&mut grid, start, goal));
        assert!(is_reachable(&grid, start, goal));
        let repaired = grid.clone();
        assert!(!ensure_connected(&mut grid, start, goal));
        assert_eq!(grid, repaired);
    }
}
