use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive span of one period.
///
/// `end` is one day short of the next period's start, so a 7-day period
/// starting Wednesday 02:00 UTC ends the following Tuesday 02:00 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodRange {
    /// Calendar date of `start` in UTC.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of `end` in UTC.
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// `end - start`, always `period_length - 1` days.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}
