use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::SimError;
use crate::models::metrics::AirQualityMetrics;

/// Cities the simulator knows about. A closed set: the registry carries the
/// geographic coordinates for the live fetch and a compiled-in fallback
/// baseline, so every member must have both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityId {
    Delhi,
    Mumbai,
    Bangalore,
}

impl CityId {
    pub fn all() -> [CityId; 3] {
        [CityId::Delhi, CityId::Mumbai, CityId::Bangalore]
    }

    /// Display name for report and console output.
    pub fn display_name(&self) -> &'static str {
        match self {
            CityId::Delhi => "Delhi",
            CityId::Mumbai => "Mumbai",
            CityId::Bangalore => "Bangalore",
        }
    }

    /// (latitude, longitude) for the live air-quality query.
    pub fn coordinates(&self) -> (f64, f64) {
        match self {
            CityId::Delhi => (28.61, 77.23),
            CityId::Mumbai => (19.07, 72.87),
            CityId::Bangalore => (12.97, 77.59),
        }
    }

    /// Static baseline used whenever the live source is unreachable or
    /// returns a malformed payload.
    pub fn fallback_metrics(&self) -> AirQualityMetrics {
        match self {
            CityId::Delhi => AirQualityMetrics::new(287.0, 140.0, 65.0),
            CityId::Mumbai => AirQualityMetrics::new(165.0, 85.0, 45.0),
            CityId::Bangalore => AirQualityMetrics::new(110.0, 45.0, 30.0),
        }
    }
}

impl FromStr for CityId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delhi" => Ok(CityId::Delhi),
            "mumbai" => Ok(CityId::Mumbai),
            "bangalore" => Ok(CityId::Bangalore),
            _ => Err(SimError::unknown_city(s)),
        }
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityId::Delhi => write!(f, "delhi"),
            CityId::Mumbai => write!(f, "mumbai"),
            CityId::Bangalore => write!(f, "bangalore"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for city in CityId::all() {
            assert_eq!(city.to_string().parse::<CityId>().unwrap(), city);
        }
    }

    #[test]
    fn unknown_city_is_rejected() {
        let err = "atlantis".parse::<CityId>().unwrap_err();
        assert_eq!(err, SimError::unknown_city("atlantis"));
    }

    #[test]
    fn every_city_has_a_valid_fallback_baseline() {
        for city in CityId::all() {
            assert!(city.fallback_metrics().is_valid());
        }
    }
}
