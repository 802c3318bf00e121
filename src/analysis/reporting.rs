use crate::core::comparison::{ComparisonResult, ScenarioRequest, Winner};
use crate::models::metrics::Baseline;

pub fn print_baseline_summary(baseline: &Baseline) {
    println!("\nBaseline: {}", baseline.city.display_name());
    println!("----------------------------------------");
    println!("  AQI:   {:.0}", baseline.metrics.aqi);
    println!("  PM2.5: {:.1} ug/m3", baseline.metrics.pm25);
    println!("  NO2:   {:.1} ug/m3", baseline.metrics.no2);
    println!("7-Day AQI Window:");
    for point in &baseline.trend {
        println!("  {}: {:.0}", point.label, point.aqi);
    }
}

pub fn print_comparison_summary(request: &ScenarioRequest, comparison: &ComparisonResult) {
    println!(
        "\nComparison at Rs. {} Cr: {} vs {}",
        request.budget,
        request.policy_a.display_name(),
        request.policy_b.display_name()
    );
    println!("----------------------------------------");
    for (label, policy, outcome) in [
        ("A", request.policy_a, &comparison.policy_a),
        ("B", request.policy_b, &comparison.policy_b),
    ] {
        println!("Policy {} ({}):", label, policy.display_name());
        println!("  Projected AQI:   {:.0}", outcome.after.aqi);
        println!("  Projected PM2.5: {:.0}", outcome.after.pm25);
        println!("  Projected NO2:   {:.0}", outcome.after.no2);
        println!("  Impact Score:    {:.1}/100", outcome.impact_score);
    }
    let winner_label = match comparison.winner {
        Winner::A => "A",
        Winner::B => "B",
    };
    println!("Winner: Policy {winner_label}");
    println!("Recommended: {}", comparison.recommendation.policy);
    for reason in &comparison.recommendation.reasons {
        println!("  - {reason}");
    }
    println!("----------------------------------------");
}
