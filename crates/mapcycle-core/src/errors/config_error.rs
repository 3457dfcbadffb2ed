//! Configuration errors.

use super::error_code::{self, MapcycleErrorCode};

/// Errors that can occur while loading or validating a rotation config.
///
/// All of these are deployment mistakes: they are surfaced when the engine is
/// built and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Period catalog is empty")]
    EmptyCatalog,

    #[error("Period {period_number} has no entries")]
    EmptyPeriod { period_number: usize },

    #[error("Period {period_number} lists {name} more than once")]
    DuplicateEntry { period_number: usize, name: String },

    #[error("Period length must be at least one day, got {days}")]
    InvalidPeriodLength { days: i64 },

    #[error("Weight policy gives {name} weight 0 in period {period_number}")]
    ZeroWeight { period_number: usize, name: String },

    #[error("Boost for {entry} has multiplier 0")]
    ZeroMultiplier { entry: String },

    #[error("Boost for {entry} targets period {period_number}, cycle has {cycle_length}")]
    BoostPeriodOutOfRange {
        entry: String,
        period_number: usize,
        cycle_length: usize,
    },
}

impl MapcycleErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
