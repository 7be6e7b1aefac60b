//! Game of Life on a fixed-size torus, with per-cell age, a deadly zone and
//! periodic time reversal layered on the classical rule.

pub mod compute;
pub mod config;
pub mod error;
pub mod render;
pub mod rules;
pub mod runner;
pub mod state;
pub mod storage;

pub use compute::{step, StepResult};
pub use config::Settings;
pub use error::{Error, Result};
pub use rules::patterns::{Flip, Pattern, Transform};
pub use rules::{DeadlyZone, RuleConfig};
pub use runner::{Runner, RunningFlag, StopReason, Tick};
pub use state::{AgeGrid, Grid, SimulationState};
