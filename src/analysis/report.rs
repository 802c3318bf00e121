use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::const_funcs::calc_cost_per_impact_point;
use crate::core::error::{SimError, SimResult};
use crate::models::metrics::AirQualityMetrics;

pub const REPORT_TITLE: &str = "NeetiSIM";
pub const REPORT_SUBTITLE: &str = "Strategic Policy Impact Assessment";

/// One policy's slice of the report input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReportEntry {
    pub name: String,
    pub metrics: AirQualityMetrics,
    pub budget_used: f64,
    pub impact_score: f64,
}

/// Everything the renderer needs; assembled by the caller from a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    pub baseline: AirQualityMetrics,
    pub policy_a: PolicyReportEntry,
    pub policy_b: PolicyReportEntry,
}

/// Metrics comparison table: rows are {AQI, PM2.5, NO2, Efficiency Score},
/// columns are {Baseline, Policy A, Policy B}. Cells are preformatted so the
/// export boundary reproduces exactly the numbers computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Rendered report: structured sections in document order. Write-once; the
/// export writers only serialize it, they never recompute figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: String,
    pub generated_at: String,
    pub executive_summary: String,
    pub table: MetricsTable,
    pub budget_efficiency: Vec<String>,
    pub footer: Vec<String>,
}

impl ReportDocument {
    pub fn build(input: &ReportInput, budget: f64) -> Self {
        // Strictly-greater rule, consistent with the comparison engine's
        // tie-break: on equal scores B is presented as the better outcome.
        let (better, worse) = if input.policy_a.impact_score > input.policy_b.impact_score {
            (&input.policy_a, &input.policy_b)
        } else {
            (&input.policy_b, &input.policy_a)
        };
        let gap = better.impact_score - worse.impact_score;

        let executive_summary = format!(
            "Simulation results indicate that {} provides a superior outcome compared to {}, \
             with an efficiency score {gap:.1} points higher. With a deployed budget of \
             Rs. {budget} Cr, the projected AQI reduction is significant.",
            better.name, worse.name
        );

        let table = MetricsTable {
            header: vec![
                "Metric".to_string(),
                "Baseline".to_string(),
                input.policy_a.name.clone(),
                input.policy_b.name.clone(),
            ],
            rows: vec![
                vec![
                    "AQI Index".to_string(),
                    format!("{:.0}", input.baseline.aqi),
                    format!("{:.0}", input.policy_a.metrics.aqi),
                    format!("{:.0}", input.policy_b.metrics.aqi),
                ],
                vec![
                    "PM 2.5".to_string(),
                    format!("{:.0}", input.baseline.pm25),
                    format!("{:.0}", input.policy_a.metrics.pm25),
                    format!("{:.0}", input.policy_b.metrics.pm25),
                ],
                vec![
                    "NO2 Levels".to_string(),
                    format!("{:.0}", input.baseline.no2),
                    format!("{:.0}", input.policy_a.metrics.no2),
                    format!("{:.0}", input.policy_b.metrics.no2),
                ],
                vec![
                    "Efficiency Score".to_string(),
                    "-".to_string(),
                    format!("{:.1}", input.policy_a.impact_score),
                    format!("{:.1}", input.policy_b.impact_score),
                ],
            ],
        };

        let budget_efficiency = vec![
            format!("Total Budget Allocation: Rs. {budget} Crores"),
            cost_efficiency_line(&input.policy_a.name, budget, input.policy_a.impact_score),
            cost_efficiency_line(&input.policy_b.name, budget, input.policy_b.impact_score),
        ];

        Self {
            title: REPORT_TITLE.to_string(),
            subtitle: REPORT_SUBTITLE.to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            executive_summary,
            table,
            budget_efficiency,
            footer: vec![
                "NeetiSIM - AI Powered Governance Tool".to_string(),
                "Confidential - For Official Use Only".to_string(),
            ],
        }
    }

    /// Plain-text rendering of the document, section by section. This is the
    /// structured content handed across the export boundary; page layout and
    /// styling belong to the document-generation collaborator.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", self.subtitle);
        let _ = writeln!(out, "Generated: {}", self.generated_at);
        let _ = writeln!(out, "{}", "=".repeat(60));

        let _ = writeln!(out, "\nExecutive Summary");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "{}", self.executive_summary);

        let _ = writeln!(out, "\nImpact Analysis");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "{}", self.table.header.join(" | "));
        for row in &self.table.rows {
            let _ = writeln!(out, "{}", row.join(" | "));
        }

        let _ = writeln!(out, "\nBudget Efficiency");
        let _ = writeln!(out, "{}", "-".repeat(40));
        for line in &self.budget_efficiency {
            let _ = writeln!(out, "{line}");
        }

        let _ = writeln!(out, "\n{}", "=".repeat(60));
        for line in &self.footer {
            let _ = writeln!(out, "{line}");
        }
        out
    }

    pub fn write_text(&self, path: &Path) -> SimResult<()> {
        fs::write(path, self.to_text())
            .map_err(|e| SimError::export(format!("{}: {e}", path.display())))
    }
}

fn cost_efficiency_line(name: &str, budget: f64, impact_score: f64) -> String {
    match calc_cost_per_impact_point(budget, impact_score) {
        Some(cost) => format!("{name} Cost Efficiency: Rs. {cost:.2} Cr per impact point"),
        None => format!("{name} Cost Efficiency: N/A (no measurable impact)"),
    }
}
