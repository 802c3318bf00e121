use thiserror::Error;

/// Result type used across the simulation library.
pub type SimResult<T> = Result<T, SimError>;

/// Kinded errors for the simulation/comparison/report pipeline.
///
/// Data-source failures never appear here: the baseline provider recovers
/// them internally via its compiled-in fallback table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Budget was negative or not a finite number.
    #[error("invalid budget: {0}")]
    InvalidBudget(String),

    /// Policy id is not in the catalog.
    #[error("unknown policy id: {0}")]
    UnknownPolicy(String),

    /// City id is not in the registry.
    #[error("unknown city id: {0}")]
    UnknownCity(String),

    /// Report serialization or file write failed.
    #[error("report export failed: {0}")]
    Export(String),
}

impl SimError {
    pub fn invalid_budget(msg: impl Into<String>) -> Self {
        Self::InvalidBudget(msg.into())
    }

    pub fn unknown_policy(id: impl Into<String>) -> Self {
        Self::UnknownPolicy(id.into())
    }

    pub fn unknown_city(id: impl Into<String>) -> Self {
        Self::UnknownCity(id.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
