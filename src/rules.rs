//! Rules module for the toroidal Game of Life simulation
//!
//! This module contains the classical rule, the deadly-zone and time-reversal
//! modifiers layered on top of it, and the extinction check. Seed patterns
//! and rule presets live in the submodules.

pub mod patterns;
pub mod presets;

use crate::state::{AgeGrid, Grid};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with a stricter death rule. Bounds are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlyZone {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Default for DeadlyZone {
    fn default() -> Self {
        Self::new(15, 25, 15, 25)
    }
}

impl DeadlyZone {
    pub const fn new(start_row: usize, end_row: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..self.end_row).contains(&row)
            && (self.start_col..self.end_col).contains(&col)
    }
}

/// Toggles for one step. Owned by the caller and passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub deadly_zone_enabled: bool,
    pub deadly_zone: DeadlyZone,
    pub reverse_time_enabled: bool,
    /// Generations between inversions. Zero or negative disables reversal.
    pub reverse_time_interval: i32,
    /// Display hint only. Ages are always tracked.
    pub age_coloring_enabled: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            deadly_zone_enabled: true,
            deadly_zone: DeadlyZone::default(),
            reverse_time_enabled: true,
            reverse_time_interval: 15,
            age_coloring_enabled: true,
        }
    }
}

impl RuleConfig {
    /// Whether the grid reached at `generation` gets inverted.
    pub fn reversal_due(&self, generation: u64) -> bool {
        self.reverse_time_enabled
            && self.reverse_time_interval > 0
            && generation % self.reverse_time_interval as u64 == 0
    }

    fn in_zone(&self, row: usize, col: usize) -> bool {
        self.deadly_zone_enabled && self.deadly_zone.contains(row, col)
    }
}

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
pub fn conway_rule(alive: bool, neighbors: u32) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Next liveness of one cell. Inside an enabled deadly zone a live cell
/// with three or more neighbors dies, so the "survives at exactly 3" case
/// does not exist there.
pub fn next_cell(alive: bool, neighbors: u32, in_zone: bool) -> bool {
    if in_zone && alive && neighbors >= 3 {
        false
    } else {
        conway_rule(alive, neighbors)
    }
}

/// Given a grid position, count the number of live neighbors using wrapping boundaries
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u32 {
    let size = grid.size();
    let mut count = 0;

    for dr in 0..3 {
        for dc in 0..3 {
            // Skip the cell itself
            if dr == 1 && dc == 1 {
                continue;
            }

            let nr = (row + size + dr - 1) % size;
            let nc = (col + size + dc - 1) % size;

            if grid.get(nr, nc) {
                count += 1;
            }
        }
    }

    count
}

/// Apply the rules to every cell against the current grid only and return
/// the next grid and ages.
pub fn apply_rules(grid: &Grid, ages: &AgeGrid, config: &RuleConfig) -> (Grid, AgeGrid) {
    let size = grid.size();
    assert_eq!(size, ages.size());

    let mut next_grid = Grid::new(size);
    let mut next_ages = AgeGrid::new(size);

    for row in 0..size {
        for col in 0..size {
            let alive = grid.get(row, col);
            let neighbors = count_neighbors(grid, row, col);
            let next_alive = next_cell(alive, neighbors, config.in_zone(row, col));

            let age = match (next_alive, alive) {
                (false, _) => 0,
                (true, true) => ages.get(row, col) + 1,
                (true, false) => 1,
            };

            next_grid.set(row, col, next_alive);
            next_ages.set(row, col, age);
        }
    }

    (next_grid, next_ages)
}

/// Invert every cell, ignoring the deadly zone. Survivors start over at age 1.
pub fn reverse_time(grid: &mut Grid, ages: &mut AgeGrid) {
    for (alive, age) in grid.as_mut_slice().iter_mut().zip(ages.as_mut_slice()) {
        *alive = !*alive;
        *age = u32::from(*alive);
    }
}

/// True when no cell is alive.
pub fn is_extinct(grid: &Grid) -> bool {
    grid.as_slice().iter().all(|&alive| !alive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(r, c) in cells {
            grid.set(r, c, true);
        }
        grid
    }

    #[test]
    fn classical_table() {
        for n in 0..=8 {
            assert_eq!(conway_rule(true, n), n == 2 || n == 3, "alive, {n}");
            assert_eq!(conway_rule(false, n), n == 3, "dead, {n}");
        }
    }

    #[test]
    fn zone_kills_at_three_and_above() {
        assert!(!next_cell(true, 3, true));
        assert!(!next_cell(true, 5, true));
        assert!(next_cell(true, 2, true));
        assert!(next_cell(true, 3, false));
        // births are untouched
        assert!(next_cell(false, 3, true));
    }

    #[test]
    fn neighbors_wrap_around_corners() {
        let grid = grid_with(6, &[(5, 5), (0, 5), (5, 0)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_neighbors(&grid, 5, 5), 2);
    }

    #[test]
    fn neighbors_exclude_self() {
        let grid = grid_with(5, &[(2, 2)]);
        assert_eq!(count_neighbors(&grid, 2, 2), 0);
        assert_eq!(count_neighbors(&grid, 1, 1), 1);
    }

    #[test]
    fn full_neighborhood_counts_eight() {
        let cells: Vec<_> = (1..4).flat_map(|r| (1..4).map(move |c| (r, c))).collect();
        let grid = grid_with(5, &cells);
        assert_eq!(count_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn reversal_schedule() {
        let mut config = RuleConfig {
            reverse_time_interval: 4,
            ..RuleConfig::default()
        };
        assert!(!config.reversal_due(3));
        assert!(config.reversal_due(4));
        assert!(config.reversal_due(8));

        config.reverse_time_interval = 0;
        assert!(!config.reversal_due(4));
        config.reverse_time_interval = -3;
        assert!(!config.reversal_due(3));

        config.reverse_time_interval = 4;
        config.reverse_time_enabled = false;
        assert!(!config.reversal_due(4));
    }

    #[test]
    fn reverse_time_resets_ages() {
        let mut grid = grid_with(3, &[(0, 0)]);
        let mut ages = AgeGrid::new(3);
        ages.set(0, 0, 9);
        reverse_time(&mut grid, &mut ages);
        assert!(!grid.get(0, 0));
        assert_eq!(ages.get(0, 0), 0);
        assert_eq!(grid.live_count(), 8);
        assert_eq!(ages.get(1, 1), 1);
    }

    #[test]
    fn zone_bounds_are_half_open() {
        let zone = DeadlyZone::default();
        assert!(zone.contains(15, 15));
        assert!(zone.contains(24, 24));
        assert!(!zone.contains(25, 20));
        assert!(!zone.contains(20, 14));
    }

    #[test]
    fn extinction() {
        assert!(is_extinct(&Grid::new(4)));
        assert!(!is_extinct(&grid_with(4, &[(3, 0)])));
    }
}
