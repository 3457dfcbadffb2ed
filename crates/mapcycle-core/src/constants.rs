// Weighting and percentage constants shared by every subsystem.

/// Base weight of a large (8×8 km) map.
pub const LARGE_BASE_WEIGHT: u32 = 2;

/// Base weight of every smaller recognized size class.
pub const SMALL_BASE_WEIGHT: u32 = 1;

/// Base weight given to entries missing from the size-class table.
pub const UNKNOWN_ENTRY_WEIGHT: u32 = 2;

/// Boost multiplier that leaves a weight unchanged.
pub const NEUTRAL_MULTIPLIER: u32 = 1;

/// 100.0% expressed in tenths of a percent.
pub const FULL_SCALE_TENTHS: u32 = 1_000;

/// Milliseconds in one calendar day (UTC, no leap seconds).
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "MAPCYCLE_LOG";

/// Project-level config file name, looked up in the root passed to `RotationConfig::load`.
pub const PROJECT_CONFIG_FILE: &str = "mapcycle.toml";
