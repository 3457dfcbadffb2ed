use chrono::{DateTime, Duration, TimeZone, Utc};
use mapcycle_core::models::SlotRole;
use mapcycle_core::RotationConfig;
use mapcycle_engine::distribution::{distribute, WeightedEntry};
use mapcycle_engine::schedule::{compute_cycle_index, compute_period_date_range};
use mapcycle_engine::RotationEngine;
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 10, 2, 0, 0).unwrap()
}

const NAMES: [&str; 10] = [
    "Erangel", "Miramar", "Taego", "Vikendi", "Rondo", "Deston", "Sanhok", "Paramo", "Karakin",
    "Haven",
];

fn arb_weights() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=16, 1..=NAMES.len())
}

fn weighted(weights: &[u32]) -> Vec<WeightedEntry<'static>> {
    weights
        .iter()
        .zip(NAMES)
        .map(|(&w, name)| WeightedEntry::new(name, SlotRole::Favored, w))
        .collect()
}

// ── Cycle index is always within the cycle ───────────────────────────────

proptest! {
    #[test]
    fn cycle_index_in_range(
        offset_ms in -10_000_000_000_000i64..10_000_000_000_000,
        period_length_days in 1i64..60,
        cycle_length in 1usize..12,
    ) {
        let now = epoch() + Duration::milliseconds(offset_ms);
        let index = compute_cycle_index(now, epoch(), period_length_days, cycle_length);
        prop_assert!(index < cycle_length);
        if offset_ms < 0 {
            prop_assert_eq!(index, 0);
        }
    }
}

// ── Date range spans period length − 1 days ─────────────────────────────

proptest! {
    #[test]
    fn date_range_span(index in 0usize..1_000, period_length_days in 1i64..60) {
        let range = compute_period_date_range(index, epoch(), period_length_days);
        prop_assert_eq!(range.end - range.start, Duration::days(period_length_days - 1));
        prop_assert_eq!(
            range.start - epoch(),
            Duration::days(index as i64 * period_length_days)
        );
    }
}

// ── Percentages sum to exactly 100.0 ─────────────────────────────────────

proptest! {
    #[test]
    fn percentages_sum_to_one_hundred(weights in arb_weights()) {
        let rows = distribute(&weighted(&weights)).unwrap();
        let total: u32 = rows.iter().map(|r| r.tenths).sum();
        prop_assert_eq!(total, 1000);
        prop_assert_eq!(rows.len(), weights.len());
    }
}

// ── Ordering law ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rows_sorted_by_percentage_then_name(weights in arb_weights()) {
        let rows = distribute(&weighted(&weights)).unwrap();
        for pair in rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.tenths > b.tenths || (a.tenths == b.tenths && a.name < b.name),
                "{:?} before {:?}", a, b
            );
        }
    }
}

proptest! {
    #[test]
    fn output_independent_of_input_order_without_weight_ties(
        weights in prop::collection::hash_set(1u32..64, 1..=NAMES.len()),
    ) {
        // Distinct weights, so the residual tie-break cannot depend on order.
        let weights: Vec<u32> = weights.into_iter().collect();
        let forward = weighted(&weights);
        let mut reversed = forward.clone();
        reversed.reverse();
        prop_assert_eq!(distribute(&forward).unwrap(), distribute(&reversed).unwrap());
    }
}

// ── Residual correction stays small ──────────────────────────────────────

proptest! {
    #[test]
    fn corrected_value_within_residual_of_raw(weights in arb_weights()) {
        let entries = weighted(&weights);
        let total: u32 = weights.iter().sum();
        let rows = distribute(&entries).unwrap();
        for row in &rows {
            let raw_tenths = 1000.0 * f64::from(row.weight) / f64::from(total);
            // Rounding contributes at most 0.5 tenths per entry, all of it
            // possibly landing on one row.
            let bound = 0.5 * weights.len() as f64 + 0.5;
            prop_assert!((f64::from(row.tenths) - raw_tenths).abs() <= bound);
        }
    }
}

// ── Full pipeline is idempotent ──────────────────────────────────────────

proptest! {
    #[test]
    fn resolve_idempotent(offset_hours in -2_000i64..20_000) {
        let engine = RotationEngine::new(RotationConfig::default()).unwrap();
        let now = epoch() + Duration::hours(offset_hours);
        let first = engine.resolve(now).unwrap();
        let second = engine.resolve(now).unwrap();
        prop_assert_eq!(first.total_tenths(), 1000);
        prop_assert_eq!(first, second);
    }
}
