use chrono::{DateTime, Duration, TimeZone, Utc};
use mapcycle_engine::schedule::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 10, 2, 0, 0).unwrap()
}

#[test]
fn one_millisecond_before_epoch_is_period_zero() {
    let now = epoch() - Duration::milliseconds(1);
    assert_eq!(compute_cycle_index(now, epoch(), 7, 5), 0);
}

#[test]
fn far_before_epoch_clamps_instead_of_wrapping() {
    // A wrapping modulo would give index 4 here.
    let now = epoch() - Duration::days(3);
    assert_eq!(compute_cycle_index(now, epoch(), 7, 5), 0);
    let now = epoch() - Duration::days(365);
    assert_eq!(compute_cycle_index(now, epoch(), 7, 5), 0);
}

#[test]
fn exactly_at_epoch_is_period_zero() {
    assert_eq!(compute_cycle_index(epoch(), epoch(), 7, 5), 0);
}

#[test]
fn index_advances_at_the_rotation_instant() {
    let boundary = epoch() + Duration::days(7);
    assert_eq!(
        compute_cycle_index(boundary - Duration::milliseconds(1), epoch(), 7, 5),
        0
    );
    assert_eq!(compute_cycle_index(boundary, epoch(), 7, 5), 1);
}

#[test]
fn full_cycle_wraps_back_to_zero() {
    let cycle_length = 5;
    let now = epoch() + Duration::days(7 * cycle_length as i64);
    assert_eq!(compute_cycle_index(now, epoch(), 7, cycle_length), 0);
    let now = epoch() + Duration::days(7 * (cycle_length as i64 + 3));
    assert_eq!(compute_cycle_index(now, epoch(), 7, cycle_length), 3);
}

#[test]
fn single_period_cycle_is_always_zero() {
    for days in [0, 6, 7, 100, 10_000] {
        let now = epoch() + Duration::days(days);
        assert_eq!(compute_cycle_index(now, epoch(), 7, 1), 0);
    }
}

#[test]
fn period_date_range_is_exact_and_inclusive() {
    let range = compute_period_date_range(2, epoch(), 7);
    assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 9, 24, 2, 0, 0).unwrap());
    assert_eq!(range.end, Utc.with_ymd_and_hms(2025, 9, 30, 2, 0, 0).unwrap());
    assert_eq!(range.span(), Duration::days(6));
    assert_eq!(
        range.start_date(),
        chrono::NaiveDate::from_ymd_opt(2025, 9, 24).unwrap()
    );
}

#[test]
fn current_range_follows_the_calendar_across_cycles() {
    // Second pass through the cycle: index 0 again, dates five weeks later.
    let now = epoch() + Duration::days(36);
    assert_eq!(compute_cycle_index(now, epoch(), 7, 5), 0);

    let range = current_period_range(now, epoch(), 7);
    assert_eq!(range.start, epoch() + Duration::days(35));
    assert_eq!(range.end, epoch() + Duration::days(41));
    assert_eq!(compute_period_date_range(0, epoch(), 7).start, epoch());
}

#[test]
fn current_range_before_epoch_is_first_period() {
    let range = current_period_range(epoch() - Duration::days(30), epoch(), 7);
    assert_eq!(range, compute_period_date_range(0, epoch(), 7));
}

#[test]
fn next_rotation_is_start_of_following_period() {
    let now = epoch() + Duration::days(9);
    assert_eq!(next_rotation(now, epoch(), 7), epoch() + Duration::days(14));
    // On the boundary itself, the next rotation is a full period away.
    let boundary = epoch() + Duration::days(14);
    assert_eq!(next_rotation(boundary, epoch(), 7), epoch() + Duration::days(21));
    // Before the epoch the first period is current.
    assert_eq!(
        next_rotation(epoch() - Duration::days(2), epoch(), 7),
        epoch() + Duration::days(7)
    );
}
