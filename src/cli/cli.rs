use clap::Parser;

use crate::config::constants::DEFAULT_FETCH_TIMEOUT_SECS;

#[derive(Parser)]
#[command(author, version, about = "Urban air-quality policy impact simulator", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "delhi", help = "City id (delhi, mumbai, bangalore)")]
    city: String,

    #[arg(short = 'a', long, default_value = "tree_cover", help = "First policy id")]
    policy_a: String,

    #[arg(short = 'b', long, default_value = "ev_subsidy", help = "Second policy id")]
    policy_b: String,

    #[arg(short = 'B', long, default_value_t = 100.0, help = "Shared budget in Rs. Crores")]
    budget: f64,

    #[arg(short, long, default_value = "reports", help = "Directory for exported artifacts")]
    output_dir: String,

    #[arg(long, default_value_t = false, help = "Skip the live AQI fetch and use the built-in city table")]
    offline: bool,

    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS, help = "Timeout in seconds for the live AQI fetch")]
    fetch_timeout: u64,

    #[arg(long, default_value_t = false, help = "Also export the metrics table as CSV")]
    export_csv: bool,

    #[arg(long, default_value_t = false, help = "Also export the comparison result as JSON")]
    export_json: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn policy_a(&self) -> &str {
        &self.policy_a
    }

    pub fn policy_b(&self) -> &str {
        &self.policy_b
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn offline(&self) -> bool {
        self.offline
    }

    pub fn fetch_timeout(&self) -> u64 {
        self.fetch_timeout
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn export_json(&self) -> bool {
        self.export_json
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
