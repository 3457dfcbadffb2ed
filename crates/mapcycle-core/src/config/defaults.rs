// Single source of truth for all default values.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use super::{BoostRule, PeriodConfig, SizeClass};

// --- Schedule ---
pub const DEFAULT_PERIOD_LENGTH_DAYS: i64 = 7;

// --- Environment overrides ---
pub const ENV_EPOCH: &str = "MAPCYCLE_EPOCH";
pub const ENV_PERIOD_LENGTH_DAYS: &str = "MAPCYCLE_PERIOD_LENGTH_DAYS";

/// Wednesday 2025-09-10 02:00 UTC, the PC rotation instant.
pub fn default_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 10, 2, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub fn default_size_classes() -> BTreeMap<String, SizeClass> {
    let mut table = BTreeMap::new();
    for name in ["Erangel", "Miramar", "Taego", "Vikendi", "Rondo", "Deston"] {
        table.insert(name.to_string(), SizeClass::Large);
    }
    table.insert("Sanhok".to_string(), SizeClass::Medium);
    for name in ["Paramo", "Karakin", "Haven"] {
        table.insert(name.to_string(), SizeClass::Small);
    }
    table
}

/// Five-week cycle published with the 2025-09-10 update.
pub fn default_periods() -> Vec<PeriodConfig> {
    vec![
        PeriodConfig::new(&["Erangel", "Taego"], &["Vikendi", "Rondo"], &["Miramar"]),
        PeriodConfig::new(&["Erangel", "Taego"], &["Miramar", "Rondo"], &["Paramo"]),
        PeriodConfig::new(&["Erangel", "Taego"], &["Vikendi", "Deston"], &["Karakin"]),
        PeriodConfig::new(&["Erangel", "Taego"], &["Rondo", "Sanhok"], &["Deston"]),
        PeriodConfig::new(&["Erangel", "Taego"], &["Miramar", "Vikendi"], &["Paramo"]),
    ]
}

pub fn default_boosts() -> Vec<BoostRule> {
    vec![BoostRule::new("Miramar", vec![1], 2)]
}
