//! Probability distribution errors.

use super::error_code::{self, MapcycleErrorCode};

/// Errors from turning a period's weights into percentages.
#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    #[error("Cannot distribute over an empty entry set")]
    NoEntries,

    #[error("Total weight is zero across {entries} entries")]
    ZeroTotalWeight { entries: usize },

    #[error("Residual of {residual_tenths} tenths would make {name} negative")]
    ResidualUnderflow { name: String, residual_tenths: i64 },
}

impl MapcycleErrorCode for DistributionError {
    fn error_code(&self) -> &'static str {
        error_code::DISTRIBUTION_ERROR
    }
}
