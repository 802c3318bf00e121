use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::constants::{AIR_QUALITY_API_URL, TREND_LABELS, TREND_OFFSETS};
use crate::config::simulation_config::SimulationConfig;
use crate::models::city::CityId;
use crate::models::metrics::{AirQualityMetrics, Baseline, TrendPoint};

/// Raw live payload, untrusted until validated. Missing readings default to 0
/// the way the upstream aggregator reports absent sensors.
#[derive(Debug, Deserialize)]
struct AirQualityPayload {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    #[serde(default)]
    pm2_5: f64,
    #[serde(default)]
    pm10: f64,
    #[serde(default)]
    nitrogen_dioxide: f64,
}

/// Supplies per-city baselines, preferring the live aggregation service and
/// falling back to the compiled-in city table on any failure. `get_baseline`
/// never errors: the fallback path always succeeds.
pub struct BaselineProvider {
    client: Option<Client>,
}

impl BaselineProvider {
    pub fn new(config: &SimulationConfig) -> Self {
        if config.offline {
            return Self::offline();
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build();
        match client {
            Ok(client) => Self {
                client: Some(client),
            },
            Err(e) => {
                warn!("failed to build http client, running from the static table: {e}");
                Self::offline()
            }
        }
    }

    /// Provider that never touches the network.
    pub fn offline() -> Self {
        Self { client: None }
    }

    /// Current metrics and a synthesized 7-day trend for a city. Recomputed
    /// on every call; live readings are not assumed idempotent across calls.
    pub fn get_baseline(&self, city: CityId) -> Baseline {
        if let Some(client) = &self.client {
            match fetch_live_metrics(client, city) {
                Ok(metrics) => {
                    info!(city = %city, aqi = metrics.aqi, "live baseline fetched");
                    return Baseline {
                        city,
                        trend: synthesize_trend(metrics.aqi),
                        metrics,
                    };
                }
                Err(e) => {
                    warn!(city = %city, "live fetch failed, using static baseline: {e:#}");
                }
            }
        }

        let metrics = city.fallback_metrics();
        debug!(city = %city, aqi = metrics.aqi, "static baseline");
        Baseline {
            city,
            trend: synthesize_trend(metrics.aqi),
            metrics,
        }
    }
}

fn fetch_live_metrics(client: &Client, city: CityId) -> Result<AirQualityMetrics> {
    let (latitude, longitude) = city.coordinates();
    let response = client
        .get(AIR_QUALITY_API_URL)
        .query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", "pm10,pm2_5,nitrogen_dioxide".to_string()),
        ])
        .send()
        .context("air-quality request failed")?
        .error_for_status()
        .context("air-quality service returned an error status")?;

    let payload: AirQualityPayload = response
        .json()
        .context("malformed air-quality payload")?;
    map_payload(payload.current)
}

/// Validate raw readings and map them into metrics. Every reading must be
/// finite and non-negative; any violation sends the caller to the fallback.
/// The aggregator reports raw pollutants only, so a composite AQI is
/// approximated from the dominant reading, with PM2.5 weighted per
/// CPCB-style breakpoints.
fn map_payload(current: CurrentConditions) -> Result<AirQualityMetrics> {
    for reading in [current.pm2_5, current.pm10, current.nitrogen_dioxide] {
        if !reading.is_finite() || reading < 0.0 {
            bail!("pollutant reading out of range: {reading}");
        }
    }

    let aqi = (current.pm2_5 * 2.0)
        .max(current.pm10)
        .max(current.nitrogen_dioxide)
        .round();

    Ok(AirQualityMetrics::new(
        aqi,
        current.pm2_5,
        current.nitrogen_dioxide,
    ))
}

/// Synthesize the fixed 7-point AQI window around a current reading by
/// applying the per-day offsets, floored at 0. Order is chronological.
pub fn synthesize_trend(current_aqi: f64) -> Vec<TrendPoint> {
    TREND_OFFSETS
        .iter()
        .zip(TREND_LABELS.iter())
        .map(|(offset, label)| TrendPoint {
            label: (*label).to_string(),
            aqi: (current_aqi + offset).max(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(pm2_5: f64, pm10: f64, nitrogen_dioxide: f64) -> CurrentConditions {
        CurrentConditions {
            pm2_5,
            pm10,
            nitrogen_dioxide,
        }
    }

    #[test]
    fn payload_aqi_tracks_the_dominant_pollutant() {
        // Weighted PM2.5 dominates.
        assert_eq!(map_payload(conditions(80.0, 90.0, 40.0)).unwrap().aqi, 160.0);
        // PM10 dominates.
        assert_eq!(map_payload(conditions(30.0, 250.0, 40.0)).unwrap().aqi, 250.0);
        // NO2 dominates.
        assert_eq!(map_payload(conditions(10.0, 15.0, 90.0)).unwrap().aqi, 90.0);
    }

    #[test]
    fn payload_maps_raw_readings_into_metrics() {
        let metrics = map_payload(conditions(70.3, 120.0, 41.8)).unwrap();
        assert_eq!(metrics.pm25, 70.3);
        assert_eq!(metrics.no2, 41.8);
        // 70.3 * 2 = 140.6, rounded to the nearest whole reading.
        assert_eq!(metrics.aqi, 141.0);
        assert!(metrics.is_valid());
    }

    #[test]
    fn out_of_range_readings_are_rejected() {
        assert!(map_payload(conditions(-1.0, 120.0, 40.0)).is_err());
        assert!(map_payload(conditions(70.0, f64::NAN, 40.0)).is_err());
        assert!(map_payload(conditions(70.0, 120.0, f64::INFINITY)).is_err());
        assert!(map_payload(conditions(70.0, 120.0, -0.1)).is_err());
    }

    #[test]
    fn offline_provider_serves_the_static_table() {
        let provider = BaselineProvider::offline();
        let baseline = provider.get_baseline(CityId::Delhi);
        assert_eq!(baseline.city, CityId::Delhi);
        assert_eq!(baseline.metrics, AirQualityMetrics::new(287.0, 140.0, 65.0));
        assert_eq!(baseline.trend.len(), 7);
    }

    #[test]
    fn cities_get_distinct_fallback_baselines() {
        let provider = BaselineProvider::offline();
        let delhi = provider.get_baseline(CityId::Delhi).metrics;
        let mumbai = provider.get_baseline(CityId::Mumbai).metrics;
        let bangalore = provider.get_baseline(CityId::Bangalore).metrics;
        assert_ne!(delhi, mumbai);
        assert_ne!(mumbai, bangalore);
    }

    #[test]
    fn trend_applies_offsets_in_chronological_order() {
        let trend = synthesize_trend(287.0);
        let labels: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        let aqis: Vec<f64> = trend.iter().map(|p| p.aqi).collect();
        assert_eq!(aqis, [272.0, 282.0, 297.0, 292.0, 307.0, 277.0, 267.0]);
    }

    #[test]
    fn trend_is_floored_at_zero() {
        let trend = synthesize_trend(10.0);
        assert_eq!(trend[0].aqi, 0.0);
        assert_eq!(trend[6].aqi, 0.0);
        assert!(trend.iter().all(|p| p.aqi >= 0.0));
    }

    #[test]
    fn offline_config_never_builds_a_client() {
        let config = SimulationConfig {
            offline: true,
            ..SimulationConfig::default()
        };
        let provider = BaselineProvider::new(&config);
        assert!(provider.client.is_none());
    }
}
