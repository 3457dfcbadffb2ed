//! # mapcycle-engine
//!
//! Resolves the current period of a cyclic map rotation and turns the
//! period's entry weights into display percentages that sum to exactly 100.0.
//! Pipeline: schedule → weights → distribution, all pure functions of
//! `(now, config)`.

pub mod distribution;
pub mod engine;
pub mod schedule;
pub mod weights;

pub use distribution::{DistributionBreakdown, WeightedEntry};
pub use engine::RotationEngine;
pub use weights::ConfiguredWeightPolicy;
