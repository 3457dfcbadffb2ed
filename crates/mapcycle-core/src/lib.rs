//! # mapcycle-core
//!
//! Foundation crate for the mapcycle rotation resolver.
//! Defines the configuration, errors, output models, the weight policy trait,
//! constants, and tracing setup. `mapcycle-engine` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RotationConfig;
pub use errors::{ConfigError, DistributionError, RotationError, RotationResult};
pub use models::{PeriodRange, ProbabilityRow, RotationSnapshot, SlotRole};
pub use traits::WeightPolicy;
