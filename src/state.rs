use crate::compute::{self, StepResult};
use crate::error::{Error, Result};
use crate::rules::patterns::{Flip, Transform};
use crate::rules::RuleConfig;
use rand::Rng;

/// Edge length used by the front end when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 50;

/// A uniform draw above this makes a cell alive when randomizing (~30% density).
pub const RANDOM_ALIVE_THRESHOLD: f64 = 0.7;

/// Row-major offset of `(row, col)` in a `size`-wide square.
pub fn get_index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// Fixed-size square matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice<T> {
    size: usize,
    cells: Vec<T>,
}

/// Liveness of every cell.
pub type Grid = Lattice<bool>;

/// Consecutive generations each cell has been alive, 0 when dead.
pub type AgeGrid = Lattice<u32>;

impl<T: Copy + Default> Lattice<T> {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![T::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at an in-bounds `(row, col)`. Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.size && col < self.size, "({row}, {col}) out of bounds");
        self.cells[get_index(row, col, self.size)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.size && col < self.size, "({row}, {col}) out of bounds");
        let idx = get_index(row, col, self.size);
        self.cells[idx] = value;
    }

    /// Maps any signed coordinate onto the torus.
    pub fn wrap(&self, row: i64, col: i64) -> (usize, usize) {
        let n = self.size as i64;
        (row.rem_euclid(n) as usize, col.rem_euclid(n) as usize)
    }

    /// Value at any signed coordinate, wrapped onto the torus.
    pub fn get_wrapped(&self, row: i64, col: i64) -> T {
        let (row, col) = self.wrap(row, col);
        self.get(row, col)
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Copies the cells out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// Builds a lattice from nested rows, or `None` unless they form a
    /// non-empty square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

impl Grid {
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx / size, idx % size))
    }
}

/// One generation of the automaton.
///
/// Every operation returns a fresh value, so a state handed to a renderer or
/// to storage is never touched again by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    grid: Grid,
    ages: AgeGrid,
    generation: u64,
}

impl SimulationState {
    /// All dead, generation 0.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            ages: AgeGrid::new(size),
            generation: 0,
        }
    }

    /// Same as [`SimulationState::new`]; the front end's "clear" button.
    pub fn reset(size: usize) -> Self {
        Self::new(size)
    }

    pub(crate) fn from_parts(grid: Grid, ages: AgeGrid, generation: u64) -> Self {
        assert_eq!(grid.size(), ages.size(), "grid and age grid must match");
        Self { grid, ages, generation }
    }

    /// Restores a bare liveness grid. Age is not persisted, so every age is 0.
    pub fn from_grid(grid: Grid) -> Self {
        let ages = AgeGrid::new(grid.size());
        Self { grid, ages, generation: 0 }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ages(&self) -> &AgeGrid {
        &self.ages
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col)
    }

    pub fn age(&self, row: usize, col: usize) -> u32 {
        self.ages.get(row, col)
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Advances one generation. See [`compute::step`].
    pub fn step(&self, config: &RuleConfig) -> StepResult {
        compute::step(self, config)
    }

    /// Flips one cell. Unlike neighbor lookup this does not wrap: a
    /// coordinate outside the grid is rejected.
    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<Self> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(Error::OutOfBounds { row, col, size });
        }

        let mut next = self.clone();
        let alive = !next.grid.get(row, col);
        next.grid.set(row, col, alive);
        next.ages.set(row, col, u32::from(alive));
        Ok(next)
    }

    /// Fills a fresh grid from `rng`, each cell alive when its draw exceeds
    /// [`RANDOM_ALIVE_THRESHOLD`].
    pub fn randomize<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut state = Self::new(size);
        for idx in 0..size * size {
            let alive = rng.gen::<f64>() > RANDOM_ALIVE_THRESHOLD;
            state.grid.as_mut_slice()[idx] = alive;
            state.ages.as_mut_slice()[idx] = u32::from(alive);
        }
        state
    }

    /// Seeds a fresh grid with `offsets` centred on the midpoint.
    ///
    /// Offsets are `(dx, dy)` where `dx` moves along rows and `dy` along
    /// columns. The rotated and flipped offsets wrap around the edges, and
    /// duplicates simply land on the same cell.
    pub fn load_pattern(
        size: usize,
        offsets: &[(i32, i32)],
        rotation_degrees: f64,
        flip: Flip,
    ) -> Self {
        let mut state = Self::new(size);
        let center = (size / 2) as i64;
        let transform = Transform::new(rotation_degrees, flip);

        for &offset in offsets {
            let (dx, dy) = transform.apply(offset);
            let (row, col) = state.grid.wrap(center + dx, center + dy);
            state.grid.set(row, col, true);
            state.ages.set(row, col, 1);
        }

        log::info!(
            "Loaded pattern with {} offsets (rotation {}, flip {:?}): {} live cells",
            offsets.len(),
            rotation_degrees,
            flip,
            state.live_count()
        );
        state
    }
}
