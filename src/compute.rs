use crate::rules::{apply_rules, is_extinct, reverse_time, RuleConfig};
use crate::state::SimulationState;

/// Outcome of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub state: SimulationState,
    /// No cell alive after the whole step, reversal included.
    pub extinct: bool,
}

/// Derive the next generation: rule pass, then the optional time reversal
/// over the whole grid, then the extinction check. The input is never
/// modified.
pub fn step(state: &SimulationState, config: &RuleConfig) -> StepResult {
    let (mut grid, mut ages) = apply_rules(state.grid(), state.ages(), config);

    let generation = state.generation() + 1;
    if config.reversal_due(generation) {
        log::debug!("Reversing time at generation {}", generation);
        reverse_time(&mut grid, &mut ages);
    }

    let extinct = is_extinct(&grid);

    StepResult {
        state: SimulationState::from_parts(grid, ages, generation),
        extinct,
    }
}
