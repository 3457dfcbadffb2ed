use serde::{Deserialize, Serialize};

use super::SlotRole;

/// One entry's share of a period, ready for display.
///
/// The percentage is held as whole tenths of a percent so that a set of rows
/// sums to exactly 100.0 with no floating point drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityRow {
    pub name: String,
    pub role: SlotRole,
    pub weight: u32,
    pub tenths: u32,
}

impl ProbabilityRow {
    /// Percentage with one decimal digit, e.g. `33.2`.
    pub fn percentage(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Percentage formatted to exactly one decimal place, e.g. `"16.7"`.
    pub fn display_percentage(&self) -> String {
        format!("{}.{}", self.tenths / 10, self.tenths % 10)
    }
}
