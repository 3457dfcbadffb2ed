use serde::{Deserialize, Serialize};

/// How an entry is placed within its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRole {
    /// Present in every period of the cycle.
    Fixed,
    /// Rotates in as a favored map for this period.
    Favored,
    /// Additional map for this period only.
    Extra,
}
