//! Error handling for mapcycle.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod distribution_error;
pub mod error_code;
pub mod rotation_error;

pub use config_error::ConfigError;
pub use distribution_error::DistributionError;
pub use error_code::MapcycleErrorCode;
pub use rotation_error::{RotationError, RotationResult};
