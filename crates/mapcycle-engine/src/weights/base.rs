use std::collections::BTreeMap;

use mapcycle_core::config::SizeClass;
use mapcycle_core::constants::UNKNOWN_ENTRY_WEIGHT;

/// Base weight from the size-class table.
///
/// Large maps weigh 2, every other recognized class weighs 1, and entries
/// missing from the table get `default_weight_for`.
pub fn base_weight(size_classes: &BTreeMap<String, SizeClass>, entry: &str) -> u32 {
    match size_classes.get(entry) {
        Some(class) => class.base_weight(),
        None => default_weight_for(entry),
    }
}

/// Weight for an entry the size-class table does not know.
///
/// Unknown maps are treated as full-size: weight 2, not an error.
pub fn default_weight_for(entry: &str) -> u32 {
    tracing::debug!(entry, weight = UNKNOWN_ENTRY_WEIGHT, "entry has no size class");
    UNKNOWN_ENTRY_WEIGHT
}
