//! The ordered period catalog and the size-class table.

use serde::{Deserialize, Serialize};

use crate::constants::{LARGE_BASE_WEIGHT, SMALL_BASE_WEIGHT};
use crate::models::SlotRole;

/// Coarse map size category, used to derive a base weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// 8×8 km.
    Large,
    /// 4×4 km and 6×6 km.
    Medium,
    /// 3×3 km and below.
    Small,
}

impl SizeClass {
    pub fn base_weight(self) -> u32 {
        match self {
            SizeClass::Large => LARGE_BASE_WEIGHT,
            SizeClass::Medium | SizeClass::Small => SMALL_BASE_WEIGHT,
        }
    }
}

/// One period of the cycle, grouped by slot role.
///
/// Configuration order is `fixed`, then `favored`, then `extra`, each in
/// listed order. That order is the tie-break for residual correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodConfig {
    pub fixed: Vec<String>,
    pub favored: Vec<String>,
    pub extra: Vec<String>,
}

impl PeriodConfig {
    pub fn new(fixed: &[&str], favored: &[&str], extra: &[&str]) -> Self {
        let owned =
            |names: &[&str]| -> Vec<String> { names.iter().map(|n| n.to_string()).collect() };
        Self {
            fixed: owned(fixed),
            favored: owned(favored),
            extra: owned(extra),
        }
    }

    /// All entries in configuration order, tagged with their role.
    pub fn entries(&self) -> impl Iterator<Item = (&str, SlotRole)> + '_ {
        tagged(&self.fixed, SlotRole::Fixed)
            .chain(tagged(&self.favored, SlotRole::Favored))
            .chain(tagged(&self.extra, SlotRole::Extra))
    }

    pub fn len(&self) -> usize {
        self.fixed.len() + self.favored.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn tagged(names: &[String], role: SlotRole) -> impl Iterator<Item = (&str, SlotRole)> + '_ {
    names.iter().map(move |n| (n.as_str(), role))
}
