pub mod weight_policy;

pub use weight_policy::WeightPolicy;
