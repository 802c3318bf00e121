use serde::{Deserialize, Serialize};

use crate::models::city::CityId;

/// One snapshot of the three tracked pollution readings.
/// AQI is a unitless composite; PM2.5 and NO2 are in micrograms per cubic
/// meter. All three are non-negative; AQI has no enforced upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityMetrics {
    pub aqi: f64,
    pub pm25: f64,
    pub no2: f64,
}

impl AirQualityMetrics {
    pub fn new(aqi: f64, pm25: f64, no2: f64) -> Self {
        Self { aqi, pm25, no2 }
    }

    /// Untrusted inputs (live payloads) must pass this before use.
    pub fn is_valid(&self) -> bool {
        [self.aqi, self.pm25, self.no2]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// One day of the synthesized 7-day AQI window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub aqi: f64,
}

/// Current air-quality state for a city. Immutable once returned by the
/// provider; recomputed on every lookup, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub city: CityId,
    pub metrics: AirQualityMetrics,
    /// Chronological, exactly one point per day of the window.
    pub trend: Vec<TrendPoint>,
}
