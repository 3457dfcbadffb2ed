//! Entry weighting: base weight from size class, times any boost in effect.

pub mod base;
pub mod boost;
pub mod policy;

pub use base::{base_weight, default_weight_for};
pub use boost::boost_multiplier;
pub use policy::ConfiguredWeightPolicy;
