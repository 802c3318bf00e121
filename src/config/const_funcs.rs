use crate::config::constants::*;

/// Fractional reduction applied to baseline metrics for a given budget.
/// Linear in budget: the reference budget of Rs. 100 Cr yields `sensitivity`.
pub fn calc_reduction_factor(budget: f64, sensitivity: f64) -> f64 {
    (budget / REFERENCE_BUDGET) * sensitivity
}

/// Normalized 0-100 impact score for a reduction factor. The raw formula
/// exceeds 100 for very large budgets, so the score is clamped.
pub fn calc_impact_score(reduction_factor: f64) -> f64 {
    (reduction_factor * 100.0)
        .round()
        .clamp(MIN_IMPACT_SCORE, MAX_IMPACT_SCORE)
}

/// Project a single pollutant metric under a reduction factor. Rounded to the
/// nearest whole reading and floored at 0 so oversized budgets cannot drive a
/// concentration negative.
pub fn project_metric(value: f64, reduction_factor: f64) -> f64 {
    (value * (1.0 - reduction_factor)).round().max(0.0)
}

/// Budget spent per impact point. `None` when the score is 0, so callers render
/// a placeholder instead of propagating a division by zero.
pub fn calc_cost_per_impact_point(budget: f64, impact_score: f64) -> Option<f64> {
    if impact_score > 0.0 {
        Some(budget / impact_score)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_budget_yields_sensitivity() {
        assert_eq!(calc_reduction_factor(100.0, BUDGET_SENSITIVITY), 0.15);
        assert_eq!(calc_reduction_factor(0.0, BUDGET_SENSITIVITY), 0.0);
    }

    #[test]
    fn impact_score_is_clamped() {
        assert_eq!(calc_impact_score(0.15), 15.0);
        assert_eq!(calc_impact_score(0.0), 0.0);
        assert_eq!(calc_impact_score(1.5), 100.0);
        assert_eq!(calc_impact_score(15.0), 100.0);
    }

    #[test]
    fn projected_metric_never_negative() {
        assert_eq!(project_metric(287.0, 0.15), 244.0);
        assert_eq!(project_metric(287.0, 2.0), 0.0);
        assert_eq!(project_metric(0.0, 0.5), 0.0);
    }

    #[test]
    fn cost_per_point_guards_zero_score() {
        assert_eq!(calc_cost_per_impact_point(100.0, 15.0), Some(100.0 / 15.0));
        assert_eq!(calc_cost_per_impact_point(100.0, 0.0), None);
    }
}
