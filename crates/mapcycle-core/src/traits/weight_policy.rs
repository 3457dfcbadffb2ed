//! WeightPolicy trait.
//!
//! The engine ships a policy built from the config's size-class table and
//! boost rules. Hosts that derive weights some other way implement this
//! trait and hand it to the engine instead.

/// Resolves an entry's integer weight for a given period.
///
/// Implementations must never return 0 and must not fail: unknown entries
/// get a default weight rather than an error.
pub trait WeightPolicy: Send + Sync {
    /// Weight from the entry's size class alone.
    fn base_weight(&self, entry: &str) -> u32;

    /// Weight for `entry` in the 1-based `period_number`, boosts included.
    fn weight_for(&self, entry: &str, _period_number: usize) -> u32 {
        self.base_weight(entry)
    }
}
