use super::{DeadlyZone, RuleConfig};

impl RuleConfig {
    /// Plain B3/S23: no zone, no reversal.
    pub fn classic() -> Self {
        Self {
            deadly_zone_enabled: false,
            reverse_time_enabled: false,
            ..Self::default()
        }
    }

    /// The front end's defaults: zone and reversal every 15 generations.
    pub fn arcade() -> Self {
        Self::default()
    }

    /// Classic rules with only the deadly zone switched on.
    pub fn zone_only(zone: DeadlyZone) -> Self {
        Self {
            deadly_zone_enabled: true,
            deadly_zone: zone,
            ..Self::classic()
        }
    }

    /// Classic rules with only time reversal switched on.
    pub fn reversal_only(interval: i32) -> Self {
        Self {
            reverse_time_enabled: true,
            reverse_time_interval: interval,
            ..Self::classic()
        }
    }
}
