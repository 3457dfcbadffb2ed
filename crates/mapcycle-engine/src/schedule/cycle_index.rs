use chrono::{DateTime, Utc};

use mapcycle_core::constants::MILLIS_PER_DAY;

/// Whole periods elapsed since `epoch`, floored. Negative before the epoch.
///
/// Period lengths below one day are treated as one day.
pub fn elapsed_periods(now: DateTime<Utc>, epoch: DateTime<Utc>, period_length_days: i64) -> i64 {
    let period_ms = period_length_days.max(1).saturating_mul(MILLIS_PER_DAY);
    let elapsed_ms = (now - epoch).num_milliseconds();
    elapsed_ms.div_euclid(period_ms)
}

/// 0-based index of the period containing `now`.
///
/// Before the epoch the index is clamped to 0; negative elapsed time is never
/// wrapped into the cycle. The result is always in `[0, cycle_length)`; a
/// `cycle_length` of 0 is treated as 1.
pub fn compute_cycle_index(
    now: DateTime<Utc>,
    epoch: DateTime<Utc>,
    period_length_days: i64,
    cycle_length: usize,
) -> usize {
    let elapsed = elapsed_periods(now, epoch, period_length_days);
    if elapsed < 0 {
        tracing::debug!(%now, %epoch, "time precedes epoch, clamping to period 0");
        return 0;
    }

    let cycle = cycle_length.max(1) as i64;
    let index = elapsed.rem_euclid(cycle) as usize;
    tracing::debug!(elapsed_periods = elapsed, index, cycle_length, "resolved cycle index");
    index
}
