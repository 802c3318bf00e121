// Main module declarations for the NeetiSIM policy simulator

// Core simulation modules
pub mod core {
    pub mod error;
    pub mod simulation;
    pub mod comparison;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod const_funcs;
    pub mod simulation_config;
}

// Model definitions
pub mod models {
    pub mod metrics;
    pub mod policy;
    pub mod city;
}

// Data providers
pub mod data {
    pub mod baseline_provider;
}

// Analysis and report generation
pub mod analysis {
    pub mod report;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::comparison::{compare, ComparisonResult, ScenarioRequest, Winner};
pub use crate::core::error::{SimError, SimResult};
pub use crate::core::simulation::{simulate, SimulationResult};
pub use crate::data::baseline_provider::BaselineProvider;
pub use crate::models::metrics::{AirQualityMetrics, Baseline, TrendPoint};
