use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;

/// When the cycle starts and how long each period lasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Start of period index 0, as an RFC 3339 string in TOML.
    pub epoch: DateTime<Utc>,
    /// Length of one period in whole days.
    pub period_length_days: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            epoch: defaults::default_epoch(),
            period_length_days: defaults::DEFAULT_PERIOD_LENGTH_DAYS,
        }
    }
}
