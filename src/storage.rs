//! Grid persistence as a JSON array of rows of booleans.
//!
//! Only liveness is stored. A restored state starts at generation 0 with
//! every age at 0.

use crate::error::{Error, Result};
use crate::state::{Grid, SimulationState};
use std::fs;
use std::path::Path;

pub fn save_grid(grid: &Grid) -> Result<String> {
    serde_json::to_string(&grid.to_rows()).map_err(|e| Error::CorruptState(e.to_string()))
}

/// Parse a saved grid that must be exactly `size` x `size`. Nothing is
/// loaded unless the whole document is valid.
pub fn load_grid(json: &str, size: usize) -> Result<SimulationState> {
    let rows: Vec<Vec<bool>> =
        serde_json::from_str(json).map_err(|e| Error::CorruptState(e.to_string()))?;

    if rows.len() != size {
        return Err(Error::CorruptState(format!(
            "expected {} rows, found {}",
            size,
            rows.len()
        )));
    }
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
        return Err(Error::CorruptState(format!(
            "row {} has {} cells, expected {}",
            idx,
            row.len(),
            size
        )));
    }

    let grid = Grid::from_rows(rows)
        .ok_or_else(|| Error::CorruptState("grid is not square".to_string()))?;
    log::info!("Restored {}x{} grid with {} live cells", size, size, grid.live_count());
    Ok(SimulationState::from_grid(grid))
}

pub fn save_to_file(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, save_grid(grid)?)?;
    Ok(())
}

pub fn load_from_file(path: impl AsRef<Path>, size: usize) -> Result<SimulationState> {
    let json = fs::read_to_string(path)?;
    load_grid(&json, size)
}
