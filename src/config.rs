use crate::error::{Error, Result};
use crate::rules::patterns::Flip;
use crate::rules::RuleConfig;
use crate::state::DEFAULT_GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MIN_SPEED_MS: u64 = 10;
pub const MAX_SPEED_MS: u64 = 500;
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Largest accepted edge length; one grid of this size is 16M cells.
pub const MAX_GRID_SIZE: usize = 4096;

/// Front-end settings. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: usize,
    /// Delay between generations in milliseconds.
    pub speed_ms: u64,
    /// Stop once this generation is reached. 0 runs until extinction or pause.
    pub max_generations: u64,
    pub rules: RuleConfig,
    /// Preset name to seed with; random seeding when absent.
    pub pattern: Option<String>,
    pub rotation: f64,
    pub flip: Flip,
    /// Seed for random seeding; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            speed_ms: DEFAULT_SPEED_MS,
            max_generations: 0,
            rules: RuleConfig::default(),
            pattern: None,
            rotation: 0.0,
            flip: Flip::None,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::Config("settings must be a JSON object".to_string()));
        }
        let settings: Self =
            serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading settings from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::Config("grid_size must be positive".to_string()));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(Error::Config(format!(
                "grid_size {} exceeds the maximum of {}",
                self.grid_size, MAX_GRID_SIZE
            )));
        }
        Ok(())
    }

    /// The configured delay, clamped into the supported speed range.
    pub fn delay(&self) -> Duration {
        clamp_delay(Duration::from_millis(self.speed_ms))
    }
}

pub fn clamp_delay(delay: Duration) -> Duration {
    let min = Duration::from_millis(MIN_SPEED_MS);
    let max = Duration::from_millis(MAX_SPEED_MS);
    let clamped = delay.clamp(min, max);
    if clamped != delay {
        log::warn!("Delay {:?} out of range, using {:?}", delay, clamped);
    }
    clamped
}
