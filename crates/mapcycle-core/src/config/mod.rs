//! Configuration for mapcycle.
//! TOML-based, with environment overrides layered on top of compiled defaults.

pub mod boost_config;
pub mod catalog;
pub mod defaults;
pub mod rotation_config;
pub mod schedule_config;

pub use boost_config::BoostRule;
pub use catalog::{PeriodConfig, SizeClass};
pub use rotation_config::RotationConfig;
pub use schedule_config::ScheduleConfig;
