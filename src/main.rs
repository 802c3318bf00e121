use std::error::Error;
use std::fs;

use chrono::Local;
use clap::Parser;

use neetisim::analysis::report::{PolicyReportEntry, ReportDocument, ReportInput};
use neetisim::analysis::reporting;
use neetisim::cli::cli::Args;
use neetisim::config::simulation_config::SimulationConfig;
use neetisim::core::comparison::{compare, ScenarioRequest};
use neetisim::core::error::SimError;
use neetisim::data::baseline_provider::BaselineProvider;
use neetisim::models::policy::Policy;
use neetisim::utils::{csv_export, logging};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.debug_logging());

    println!("NeetiSIM Policy Impact Simulator");
    println!(
        "Live data: {}, CSV export: {}, JSON export: {}",
        if args.offline() { "disabled" } else { "enabled" },
        if args.export_csv() { "enabled" } else { "disabled" },
        if args.export_json() { "enabled" } else { "disabled" }
    );

    // Validate the scenario up front so the engines never see bad ids.
    let request = ScenarioRequest::new(
        args.city().parse()?,
        args.policy_a().parse()?,
        args.policy_b().parse()?,
        args.budget(),
    )?;

    let config = SimulationConfig {
        fetch_timeout_secs: args.fetch_timeout(),
        offline: args.offline(),
        ..SimulationConfig::default()
    };

    let provider = BaselineProvider::new(&config);
    let baseline = provider.get_baseline(request.city);
    reporting::print_baseline_summary(&baseline);

    let comparison = compare(
        &config,
        &baseline.metrics,
        request.policy_a,
        request.policy_b,
        request.budget,
    )?;
    reporting::print_comparison_summary(&request, &comparison);

    let input = ReportInput {
        baseline: baseline.metrics,
        policy_a: PolicyReportEntry {
            name: Policy::lookup(request.policy_a).name.clone(),
            metrics: comparison.policy_a.after,
            budget_used: request.budget,
            impact_score: comparison.policy_a.impact_score,
        },
        policy_b: PolicyReportEntry {
            name: Policy::lookup(request.policy_b).name.clone(),
            metrics: comparison.policy_b.after,
            budget_used: request.budget,
            impact_score: comparison.policy_b.impact_score,
        },
    };
    let document = ReportDocument::build(&input, request.budget);

    let output_dir = std::path::Path::new(args.output_dir());
    fs::create_dir_all(output_dir)
        .map_err(|e| SimError::export(format!("{}: {e}", output_dir.display())))?;

    let report_path = output_dir.join(format!(
        "policy_assessment_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    document.write_text(&report_path)?;
    println!("\nReport written to {}", report_path.display());

    if args.export_csv() {
        let csv_path = csv_export::export_metrics_table(&document.table, output_dir)?;
        println!("Metrics table written to {}", csv_path.display());
    }

    if args.export_json() {
        let json_path = output_dir.join(format!(
            "comparison_{}.json",
            Local::now().format("%Y%m%d_%H%M%S")
        ));
        let json = serde_json::to_string_pretty(&comparison)
            .map_err(|e| SimError::export(e.to_string()))?;
        fs::write(&json_path, json)
            .map_err(|e| SimError::export(format!("{}: {e}", json_path.display())))?;
        println!("Comparison result written to {}", json_path.display());
    }

    Ok(())
}
