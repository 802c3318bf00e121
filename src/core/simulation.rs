use serde::{Deserialize, Serialize};

use crate::config::const_funcs::{calc_impact_score, calc_reduction_factor, project_metric};
use crate::config::simulation_config::SimulationConfig;
use crate::core::error::{SimError, SimResult};
use crate::models::metrics::AirQualityMetrics;
use crate::models::policy::PolicyId;

/// Outcome of applying one policy at one budget to a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub before: AirQualityMetrics,
    pub after: AirQualityMetrics,
    /// Normalized 0-100 summary of the fractional improvement.
    pub impact_score: f64,
}

/// Project post-policy metrics for a baseline and budget.
///
/// The catalog does not yet differentiate reduction rates between policies,
/// so the policy id only routes callers through id validation; the reduction
/// factor depends on budget alone. That is a modeling simplification, not an
/// oversight. NO2 responds at a reduced rate to reflect its lower abatement
/// efficiency.
pub fn simulate(
    config: &SimulationConfig,
    baseline: &AirQualityMetrics,
    _policy: PolicyId,
    budget: f64,
) -> SimResult<SimulationResult> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(SimError::invalid_budget(format!(
            "budget must be a non-negative finite number, got {budget}"
        )));
    }

    let reduction_factor = calc_reduction_factor(budget, config.budget_sensitivity);

    // At zero reduction the baseline passes through untouched, so the
    // zero-budget identity holds even for fractional live readings that
    // rounding would otherwise perturb.
    let after = if reduction_factor == 0.0 {
        *baseline
    } else {
        AirQualityMetrics {
            aqi: project_metric(baseline.aqi, reduction_factor),
            pm25: project_metric(baseline.pm25, reduction_factor),
            no2: project_metric(baseline.no2, reduction_factor * config.no2_response_factor),
        }
    };

    Ok(SimulationResult {
        before: *baseline,
        after,
        impact_score: calc_impact_score(reduction_factor),
    })
}
