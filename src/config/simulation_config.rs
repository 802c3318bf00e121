use serde::{Deserialize, Serialize};

use crate::config::constants::{BUDGET_SENSITIVITY, DEFAULT_FETCH_TIMEOUT_SECS, NO2_RESPONSE_FACTOR};

/// Tunables for one simulation run. Built once from the CLI and passed by
/// reference; no component mutates it or holds state between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fractional metric reduction at the reference budget.
    pub budget_sensitivity: f64,
    /// How strongly NO2 responds relative to AQI/PM2.5.
    pub no2_response_factor: f64,
    /// Bound on the live AQI fetch; the provider falls back past this.
    pub fetch_timeout_secs: u64,
    /// Skip the live fetch entirely and use the compiled-in city table.
    pub offline: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            budget_sensitivity: BUDGET_SENSITIVITY,
            no2_response_factor: NO2_RESPONSE_FACTOR,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            offline: false,
        }
    }
}
