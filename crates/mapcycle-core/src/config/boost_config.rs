use serde::{Deserialize, Serialize};

/// Conditional weight multiplier for one entry during specific periods.
///
/// `periods` holds 1-based period numbers within the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostRule {
    pub entry: String,
    pub periods: Vec<usize>,
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
}

fn default_multiplier() -> u32 {
    2
}

impl BoostRule {
    pub fn new(entry: impl Into<String>, periods: Vec<usize>, multiplier: u32) -> Self {
        Self {
            entry: entry.into(),
            periods,
            multiplier,
        }
    }

    /// Whether this rule applies to `entry` in the 1-based `period_number`.
    pub fn applies_to(&self, entry: &str, period_number: usize) -> bool {
        self.entry == entry && self.periods.contains(&period_number)
    }
}
