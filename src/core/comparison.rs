use serde::{Deserialize, Serialize};

use crate::config::const_funcs::calc_cost_per_impact_point;
use crate::config::simulation_config::SimulationConfig;
use crate::core::error::{SimError, SimResult};
use crate::core::simulation::simulate;
use crate::models::city::CityId;
use crate::models::metrics::AirQualityMetrics;
use crate::models::policy::{Policy, PolicyId};

/// Immutable scenario selection, built once from user input and passed
/// through the pipeline. The engines themselves hold no state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub city: CityId,
    pub policy_a: PolicyId,
    pub policy_b: PolicyId,
    pub budget: f64,
}

impl ScenarioRequest {
    pub fn new(
        city: CityId,
        policy_a: PolicyId,
        policy_b: PolicyId,
        budget: f64,
    ) -> SimResult<Self> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(SimError::invalid_budget(format!(
                "budget must be a non-negative finite number, got {budget}"
            )));
        }
        Ok(Self {
            city,
            policy_a,
            policy_b,
            budget,
        })
    }
}

/// Which side of the comparison won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
}

/// Per-policy slice of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    pub after: AirQualityMetrics,
    pub impact_score: f64,
}

/// Winning policy's display name plus templated, deterministic
/// justifications derived from the computed numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub policy: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub policy_a: PolicyOutcome,
    pub policy_b: PolicyOutcome,
    pub winner: Winner,
    pub recommendation: Recommendation,
}

/// Rank two policies under one shared budget and baseline.
///
/// A wins only on a strictly greater impact score; ties resolve to B.
pub fn compare(
    config: &SimulationConfig,
    baseline: &AirQualityMetrics,
    policy_a: PolicyId,
    policy_b: PolicyId,
    budget: f64,
) -> SimResult<ComparisonResult> {
    let result_a = simulate(config, baseline, policy_a, budget)?;
    let result_b = simulate(config, baseline, policy_b, budget)?;

    let winner = if result_a.impact_score > result_b.impact_score {
        Winner::A
    } else {
        Winner::B
    };

    let (winning_policy, winning) = match winner {
        Winner::A => (policy_a, &result_a),
        Winner::B => (policy_b, &result_b),
    };

    let mut reasons = Vec::new();
    if baseline.aqi > 0.0 {
        let aqi_cut_percent = (baseline.aqi - winning.after.aqi) / baseline.aqi * 100.0;
        reasons.push(format!(
            "Cuts AQI by {aqi_cut_percent:.1}% relative to the current baseline"
        ));
    }
    match calc_cost_per_impact_point(budget, winning.impact_score) {
        Some(cost) => reasons.push(format!(
            "Costs Rs. {cost:.2} Cr per impact point at the shared budget"
        )),
        None => reasons.push("Delivers no measurable impact at this budget".to_string()),
    }
    let margin = (result_a.impact_score - result_b.impact_score).abs();
    if margin > 0.0 {
        reasons.push(format!(
            "Outscores the alternative by {margin:.1} impact points"
        ));
    } else {
        reasons.push("Ties the alternative on impact score".to_string());
    }

    Ok(ComparisonResult {
        policy_a: PolicyOutcome {
            after: result_a.after,
            impact_score: result_a.impact_score,
        },
        policy_b: PolicyOutcome {
            after: result_b.after,
            impact_score: result_b.impact_score,
        },
        winner,
        recommendation: Recommendation {
            policy: Policy::lookup(winning_policy).name.clone(),
            reasons,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi_baseline() -> AirQualityMetrics {
        AirQualityMetrics::new(287.0, 140.0, 65.0)
    }

    fn config() -> SimulationConfig {
        SimulationConfig::default()
    }

    fn has_reason(comparison: &ComparisonResult, needle: &str) -> bool {
        comparison.recommendation.reasons.iter().any(|r| r == needle)
    }

    #[test]
    fn winner_agrees_with_independent_simulations() {
        let baseline = delhi_baseline();
        for budget in [10.0, 100.0, 450.0, 1000.0] {
            let comparison = compare(
                &config(),
                &baseline,
                PolicyId::TreeCover,
                PolicyId::EvSubsidy,
                budget,
            )
            .unwrap();
            let score_a = simulate(&config(), &baseline, PolicyId::TreeCover, budget)
                .unwrap()
                .impact_score;
            let score_b = simulate(&config(), &baseline, PolicyId::EvSubsidy, budget)
                .unwrap()
                .impact_score;
            let expected = if score_a > score_b { Winner::A } else { Winner::B };
            assert_eq!(comparison.winner, expected);
            assert_eq!(comparison.policy_a.impact_score, score_a);
            assert_eq!(comparison.policy_b.impact_score, score_b);
        }
    }

    #[test]
    fn equal_scores_resolve_to_b() {
        // Reduction is policy-agnostic, so any two policies tie exactly.
        let comparison = compare(
            &config(),
            &delhi_baseline(),
            PolicyId::TreeCover,
            PolicyId::EvSubsidy,
            100.0,
        )
        .unwrap();
        assert_eq!(comparison.winner, Winner::B);
        assert_eq!(comparison.recommendation.policy, "EV Subsidy Program");
        assert!(has_reason(&comparison, "Ties the alternative on impact score"));
    }

    #[test]
    fn recommendation_names_the_catalog_label_not_the_id() {
        let comparison = compare(
            &config(),
            &delhi_baseline(),
            PolicyId::PublicTransport,
            PolicyId::TreeCover,
            100.0,
        )
        .unwrap();
        assert_eq!(comparison.recommendation.policy, "Increase Tree Cover");
        assert!(!comparison.recommendation.policy.contains("tree_cover"));
    }

    #[test]
    fn comparison_is_deterministic() {
        let run = || {
            compare(
                &config(),
                &delhi_baseline(),
                PolicyId::TreeCover,
                PolicyId::EvSubsidy,
                250.0,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn zero_budget_recommendation_avoids_division_by_zero() {
        let comparison = compare(
            &config(),
            &delhi_baseline(),
            PolicyId::TreeCover,
            PolicyId::EvSubsidy,
            0.0,
        )
        .unwrap();
        assert!(has_reason(
            &comparison,
            "Delivers no measurable impact at this budget"
        ));
        for reason in &comparison.recommendation.reasons {
            assert!(!reason.contains("inf") && !reason.contains("NaN"));
        }
    }

    #[test]
    fn invalid_budget_fails_fast() {
        let err = compare(
            &config(),
            &delhi_baseline(),
            PolicyId::TreeCover,
            PolicyId::EvSubsidy,
            -50.0,
        );
        assert!(matches!(err, Err(SimError::InvalidBudget(_))));
    }

    #[test]
    fn request_rejects_invalid_budget() {
        let err = ScenarioRequest::new(
            CityId::Delhi,
            PolicyId::TreeCover,
            PolicyId::EvSubsidy,
            f64::NAN,
        );
        assert!(matches!(err, Err(SimError::InvalidBudget(_))));
        assert!(ScenarioRequest::new(
            CityId::Delhi,
            PolicyId::TreeCover,
            PolicyId::EvSubsidy,
            100.0
        )
        .is_ok());
    }
}
