use chrono::{DateTime, Utc};

use mapcycle_core::errors::{ConfigError, RotationResult};
use mapcycle_core::models::{PeriodRange, ProbabilityRow, RotationSnapshot};
use mapcycle_core::traits::WeightPolicy;
use mapcycle_core::RotationConfig;

use crate::distribution::{self, DistributionBreakdown, WeightedEntry};
use crate::schedule;
use crate::weights::ConfiguredWeightPolicy;

/// Rotation engine: resolves the current period and its probabilities.
///
/// Holds one validated, immutable config. Swapping to a new schedule means
/// building a new engine; nothing here is mutated after construction.
#[derive(Debug, Clone)]
pub struct RotationEngine<P: WeightPolicy = ConfiguredWeightPolicy> {
    config: RotationConfig,
    policy: P,
}

impl RotationEngine {
    /// Create an engine weighting entries by the config's size classes and boosts.
    pub fn new(config: RotationConfig) -> RotationResult<Self> {
        let policy = ConfiguredWeightPolicy::from_config(&config);
        Self::with_policy(config, policy)
    }
}

impl<P: WeightPolicy> RotationEngine<P> {
    /// Create an engine with a caller-supplied weight policy.
    pub fn with_policy(config: RotationConfig, policy: P) -> RotationResult<Self> {
        config.validate()?;
        check_weights(&config, &policy)?;
        tracing::info!(
            epoch = %config.schedule.epoch,
            period_length_days = config.schedule.period_length_days,
            cycle_length = config.cycle_length(),
            "rotation engine ready"
        );
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn cycle_length(&self) -> usize {
        self.config.cycle_length()
    }

    /// 0-based index of the period containing `now`.
    pub fn period_index(&self, now: DateTime<Utc>) -> usize {
        schedule::compute_cycle_index(
            now,
            self.config.schedule.epoch,
            self.config.schedule.period_length_days,
            self.cycle_length(),
        )
    }

    /// Inclusive range of the period containing `now`.
    pub fn period_range(&self, now: DateTime<Utc>) -> PeriodRange {
        schedule::current_period_range(
            now,
            self.config.schedule.epoch,
            self.config.schedule.period_length_days,
        )
    }

    /// Entries of the period at `period_index` with their weights, in
    /// configuration order. Indices wrap around the cycle.
    pub fn weights_for_period(&self, period_index: usize) -> Vec<WeightedEntry<'_>> {
        let index = period_index % self.cycle_length();
        let period_number = index + 1;
        self.config.periods[index]
            .entries()
            .map(|(name, role)| {
                WeightedEntry::new(name, role, self.policy.weight_for(name, period_number))
            })
            .collect()
    }

    /// Display-ordered probabilities for the period at `period_index`.
    pub fn probabilities_for_period(
        &self,
        period_index: usize,
    ) -> RotationResult<Vec<ProbabilityRow>> {
        Ok(distribution::distribute(&self.weights_for_period(period_index))?)
    }

    /// Like `probabilities_for_period`, keeping every intermediate step.
    pub fn breakdown_for_period(
        &self,
        period_index: usize,
    ) -> RotationResult<DistributionBreakdown> {
        Ok(distribution::distribute_breakdown(
            &self.weights_for_period(period_index),
        )?)
    }

    /// Full pipeline for `now`: index, date range, next rotation, rows.
    pub fn resolve(&self, now: DateTime<Utc>) -> RotationResult<RotationSnapshot> {
        let period_index = self.period_index(now);
        let rows = self.probabilities_for_period(period_index)?;

        tracing::debug!(%now, period_index, rows = rows.len(), "resolved rotation");

        Ok(RotationSnapshot {
            period_index,
            period_number: period_index + 1,
            cycle_length: self.cycle_length(),
            range: self.period_range(now),
            next_rotation: schedule::next_rotation(
                now,
                self.config.schedule.epoch,
                self.config.schedule.period_length_days,
            ),
            rows,
        })
    }

    /// `resolve` at the current wall-clock time, read once.
    pub fn resolve_now(&self) -> RotationResult<RotationSnapshot> {
        self.resolve(Utc::now())
    }
}

/// Every entry must resolve to a weight of at least 1 under `policy`.
fn check_weights<P: WeightPolicy>(config: &RotationConfig, policy: &P) -> Result<(), ConfigError> {
    for (index, period) in config.periods.iter().enumerate() {
        let period_number = index + 1;
        if let Some((name, _)) = period
            .entries()
            .find(|(name, _)| policy.weight_for(name, period_number) == 0)
        {
            return Err(ConfigError::ZeroWeight {
                period_number,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
