// Budget and Sensitivity Constants
pub const REFERENCE_BUDGET: f64 = 100.0;        // Rs. 100 Cr anchors the reduction curve
pub const BUDGET_SENSITIVITY: f64 = 0.15;       // Fractional reduction at the reference budget
pub const NO2_RESPONSE_FACTOR: f64 = 0.8;       // NO2 abates slower than AQI/PM2.5

// Impact Score Bounds
pub const MIN_IMPACT_SCORE: f64 = 0.0;
pub const MAX_IMPACT_SCORE: f64 = 100.0;

// Budget slider bounds in the reference UI; the engine itself accepts any
// non-negative budget and behaves continuously outside this range.
pub const MIN_SLIDER_BUDGET: f64 = 10.0;
pub const MAX_SLIDER_BUDGET: f64 = 1000.0;

// Trend Synthesis
// Additive offsets applied to the current AQI to produce a 7-day window,
// one per label, floored at 0.
pub const TREND_OFFSETS: [f64; 7] = [-15.0, -5.0, 10.0, 5.0, 20.0, -10.0, -20.0];
pub const TREND_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// Live Data Source
pub const AIR_QUALITY_API_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;
