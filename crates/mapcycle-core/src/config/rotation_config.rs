//! Top-level rotation configuration with layered resolution.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{defaults, BoostRule, PeriodConfig, ScheduleConfig, SizeClass};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Everything the resolver needs: schedule, catalog, size classes, boosts.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MAPCYCLE_*`)
/// 2. Project config (`mapcycle.toml` in the given root)
/// 3. Compiled defaults
///
/// A section present in the project file replaces the default section as a
/// whole; a new catalog is never merged period-by-period into the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub schedule: ScheduleConfig,
    pub size_classes: BTreeMap<String, SizeClass>,
    pub periods: Vec<PeriodConfig>,
    pub boosts: Vec<BoostRule>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            size_classes: defaults::default_size_classes(),
            periods: defaults::default_periods(),
            boosts: defaults::default_boosts(),
        }
    }
}

impl RotationConfig {
    /// Load configuration from `root`, layering env overrides, then validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            tracing::debug!(
                path = %project_config_path.display(),
                "no project config, using compiled defaults"
            );
            Self::default()
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Number of periods before the schedule repeats.
    pub fn cycle_length(&self) -> usize {
        self.periods.len()
    }

    /// Check every structural invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.period_length_days < 1 {
            return Err(ConfigError::InvalidPeriodLength {
                days: self.schedule.period_length_days,
            });
        }
        if self.periods.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        for (index, period) in self.periods.iter().enumerate() {
            let period_number = index + 1;
            if period.is_empty() {
                return Err(ConfigError::EmptyPeriod { period_number });
            }
            let mut seen = HashSet::new();
            for (name, _) in period.entries() {
                if !seen.insert(name) {
                    return Err(ConfigError::DuplicateEntry {
                        period_number,
                        name: name.to_string(),
                    });
                }
            }
        }

        let cycle_length = self.cycle_length();
        for rule in &self.boosts {
            if rule.multiplier == 0 {
                return Err(ConfigError::ZeroMultiplier {
                    entry: rule.entry.clone(),
                });
            }
            if let Some(&period_number) = rule
                .periods
                .iter()
                .find(|&&p| p == 0 || p > cycle_length)
            {
                return Err(ConfigError::BoostPeriodOutOfRange {
                    entry: rule.entry.clone(),
                    period_number,
                    cycle_length,
                });
            }
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `MAPCYCLE_EPOCH` (RFC 3339), `MAPCYCLE_PERIOD_LENGTH_DAYS`.
    /// A value that does not parse is an error rather than being skipped.
    fn apply_env_overrides(config: &mut RotationConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(defaults::ENV_EPOCH) {
            let epoch = DateTime::parse_from_rfc3339(val.trim()).map_err(|e| {
                ConfigError::InvalidValue {
                    field: defaults::ENV_EPOCH.to_string(),
                    message: e.to_string(),
                }
            })?;
            config.schedule.epoch = epoch.with_timezone(&Utc);
        }
        if let Ok(val) = std::env::var(defaults::ENV_PERIOD_LENGTH_DAYS) {
            let days = val
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: defaults::ENV_PERIOD_LENGTH_DAYS.to_string(),
                    message: e.to_string(),
                })?;
            config.schedule.period_length_days = days;
        }
        Ok(())
    }
}
