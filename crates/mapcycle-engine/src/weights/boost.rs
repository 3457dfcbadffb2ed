use mapcycle_core::config::BoostRule;
use mapcycle_core::constants::NEUTRAL_MULTIPLIER;

/// Combined multiplier of every rule matching `entry` in `period_number` (1-based).
///
/// Matching rules compound. A multiplier of 0 is treated as 1 so that a
/// boosted weight can never reach 0.
pub fn boost_multiplier(rules: &[BoostRule], entry: &str, period_number: usize) -> u32 {
    rules
        .iter()
        .filter(|rule| rule.applies_to(entry, period_number))
        .map(|rule| rule.multiplier.max(NEUTRAL_MULTIPLIER))
        .fold(NEUTRAL_MULTIPLIER, u32::saturating_mul)
}
