//! Top-level error for the rotation pipeline.

use super::error_code::MapcycleErrorCode;
use super::{ConfigError, DistributionError};

/// Errors surfaced by the rotation engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}

impl MapcycleErrorCode for RotationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Distribution(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type RotationResult<T> = Result<T, RotationError>;
