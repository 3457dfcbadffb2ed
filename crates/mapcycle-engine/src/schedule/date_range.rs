use chrono::{DateTime, Duration, Utc};

use mapcycle_core::models::PeriodRange;

use super::cycle_index::elapsed_periods;

/// Date range of the period at `index`, counted from the epoch.
///
/// `start = epoch + index × period_length_days` exactly; `end` is inclusive,
/// `period_length_days − 1` days after `start`, because the rotation flips at
/// a fixed instant rather than at local midnight.
pub fn compute_period_date_range(
    index: usize,
    epoch: DateTime<Utc>,
    period_length_days: i64,
) -> PeriodRange {
    let offset = i64::try_from(index).unwrap_or(i64::MAX);
    range_at_offset(offset, epoch, period_length_days)
}

/// Date range of the period containing `now`, in the current cycle.
///
/// Unlike `compute_period_date_range(compute_cycle_index(..))`, which always
/// lands in the first cycle, this follows the calendar across cycle wraps.
/// Before the epoch it returns the first period.
pub fn current_period_range(
    now: DateTime<Utc>,
    epoch: DateTime<Utc>,
    period_length_days: i64,
) -> PeriodRange {
    let elapsed = elapsed_periods(now, epoch, period_length_days).max(0);
    range_at_offset(elapsed, epoch, period_length_days)
}

/// Start of the period after the one `current_period_range` returns.
pub fn next_rotation(
    now: DateTime<Utc>,
    epoch: DateTime<Utc>,
    period_length_days: i64,
) -> DateTime<Utc> {
    let elapsed = elapsed_periods(now, epoch, period_length_days).max(0);
    shift_days(epoch, elapsed.saturating_add(1).saturating_mul(period_length_days.max(1)))
}

fn range_at_offset(offset: i64, epoch: DateTime<Utc>, period_length_days: i64) -> PeriodRange {
    let length = period_length_days.max(1);
    let start = shift_days(epoch, offset.saturating_mul(length));
    let end = shift_days(start, length - 1);
    PeriodRange { start, end }
}

/// `instant + days`, saturating at the representable bounds.
fn shift_days(instant: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|d| instant.checked_add_signed(d))
        .unwrap_or(if days < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}
