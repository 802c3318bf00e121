use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::core::error::SimError;

/// Interventions available in the catalog. The engines only need the id;
/// the report renderer looks up the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyId {
    TreeCover,
    EvSubsidy,
    IndustrialLimits,
    PublicTransport,
}

impl PolicyId {
    pub fn all() -> [PolicyId; 4] {
        [
            PolicyId::TreeCover,
            PolicyId::EvSubsidy,
            PolicyId::IndustrialLimits,
            PolicyId::PublicTransport,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PolicyId::TreeCover => "Increase Tree Cover",
            PolicyId::EvSubsidy => "EV Subsidy Program",
            PolicyId::IndustrialLimits => "Industrial Emission Limits",
            PolicyId::PublicTransport => "Expand Public Transport",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PolicyId::TreeCover => "Plant 10,000 trees",
            PolicyId::EvSubsidy => "Subsidize electric vehicles",
            PolicyId::IndustrialLimits => "Stricter emission standards",
            PolicyId::PublicTransport => "Add metro lines and buses",
        }
    }
}

impl FromStr for PolicyId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree_cover" => Ok(PolicyId::TreeCover),
            "ev_subsidy" => Ok(PolicyId::EvSubsidy),
            "industrial_limits" => Ok(PolicyId::IndustrialLimits),
            "public_transport" => Ok(PolicyId::PublicTransport),
            _ => Err(SimError::unknown_policy(s)),
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyId::TreeCover => write!(f, "tree_cover"),
            PolicyId::EvSubsidy => write!(f, "ev_subsidy"),
            PolicyId::IndustrialLimits => write!(f, "industrial_limits"),
            PolicyId::PublicTransport => write!(f, "public_transport"),
        }
    }
}

/// Catalog entry as served to consumers (id plus human-readable fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    pub name: String,
    pub description: String,
}

impl Policy {
    /// Catalog entry for an id. The catalog is built from `PolicyId::all()`
    /// in order, so every id has exactly one entry at its own index.
    pub fn lookup(id: PolicyId) -> &'static Policy {
        &POLICY_CATALOG[id.catalog_index()]
    }
}

impl PolicyId {
    fn catalog_index(&self) -> usize {
        match self {
            PolicyId::TreeCover => 0,
            PolicyId::EvSubsidy => 1,
            PolicyId::IndustrialLimits => 2,
            PolicyId::PublicTransport => 3,
        }
    }
}

lazy_static! {
    /// The fixed policy catalog.
    pub static ref POLICY_CATALOG: Vec<Policy> = PolicyId::all()
        .iter()
        .map(|id| Policy {
            id: *id,
            name: id.display_name().to_string(),
            description: id.description().to_string(),
        })
        .collect();
}
