use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PeriodRange, ProbabilityRow};

/// Everything the presentation layer needs for the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSnapshot {
    /// 0-based index into the cycle.
    pub period_index: usize,
    /// 1-based position, the "Week N" label.
    pub period_number: usize,
    pub cycle_length: usize,
    /// Calendar dates of the period containing the resolved instant.
    ///
    /// Counted from the absolute number of elapsed periods, so after the
    /// cycle wraps this is not `compute_period_date_range(period_index)`,
    /// which always gives first-cycle dates.
    pub range: PeriodRange,
    /// Instant the next period begins.
    pub next_rotation: DateTime<Utc>,
    /// Ordered by percentage descending, then name ascending.
    pub rows: Vec<ProbabilityRow>,
}

impl RotationSnapshot {
    /// Sum of all rows in tenths; 1000 for every snapshot the engine produces.
    pub fn total_tenths(&self) -> u32 {
        self.rows.iter().map(|r| r.tenths).sum()
    }

    pub fn row(&self, name: &str) -> Option<&ProbabilityRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}
