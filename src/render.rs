use bytemuck::{Pod, Zeroable};
use crate::rules::RuleConfig;
use crate::state::SimulationState;

pub const FLAG_DEADLY_ZONE: u32 = 1;
pub const FLAG_AGE_COLORING: u32 = 1 << 1;

// Uniforms handed to the renderer alongside the cell buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct FrameParams {
    pub size: u32,
    pub generation: u32,
    pub zone_rows: [u32; 2],
    pub zone_cols: [u32; 2],
    pub flags: u32,
    pub _padding: u32, // Keep the struct a multiple of 16 bytes
}

impl FrameParams {
    pub fn from_state(state: &SimulationState, config: &RuleConfig) -> Self {
        let zone = config.deadly_zone;
        let mut flags = 0;
        if config.deadly_zone_enabled {
            flags |= FLAG_DEADLY_ZONE;
        }
        if config.age_coloring_enabled {
            flags |= FLAG_AGE_COLORING;
        }

        Self {
            size: state.size() as u32,
            generation: state.generation().min(u64::from(u32::MAX)) as u32,
            zone_rows: [zone.start_row as u32, zone.end_row as u32],
            zone_cols: [zone.start_col as u32, zone.end_col as u32],
            flags,
            _padding: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// One f32 per cell, row-major, holding the cell's age. Dead cells are 0.0,
/// so anything above 0.5 is alive. Restored grids carry no age, so their
/// live cells show as age 1.
pub fn cell_buffer(state: &SimulationState) -> Vec<f32> {
    state
        .grid()
        .as_slice()
        .iter()
        .zip(state.ages().as_slice())
        .map(|(&alive, &age)| if alive { age.max(1) as f32 } else { 0.0 })
        .collect()
}

/// The cell buffer as raw bytes, ready for upload.
pub fn cell_bytes(cells: &[f32]) -> &[u8] {
    bytemuck::cast_slice(cells)
}
