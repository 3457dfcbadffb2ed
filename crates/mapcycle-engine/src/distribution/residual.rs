use mapcycle_core::constants::FULL_SCALE_TENTHS;

use super::WeightedEntry;

/// `1000 − Σ rounded`, in tenths. Positive means the rows fall short of 100.0.
pub fn residual_tenths(rounded: &[u32]) -> i64 {
    let sum: i64 = rounded.iter().map(|&t| i64::from(t)).sum();
    i64::from(FULL_SCALE_TENTHS) - sum
}

/// Position of the entry that absorbs the residual: the largest weight,
/// earliest in configuration order on a tie. `None` for an empty slice.
pub fn absorbing_index(entries: &[WeightedEntry<'_>]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, entry) in entries.iter().enumerate() {
        match best {
            // Strictly greater: an equal weight later in the list never wins.
            Some((_, weight)) if entry.weight <= weight => {}
            _ => best = Some((index, entry.weight)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcycle_core::models::SlotRole;

    fn entry(name: &str, weight: u32) -> WeightedEntry<'_> {
        WeightedEntry::new(name, SlotRole::Favored, weight)
    }

    #[test]
    fn test_residual_sign() {
        assert_eq!(residual_tenths(&[167, 167, 167, 167, 333]), -1);
        assert_eq!(residual_tenths(&[333, 333, 333]), 1);
        assert_eq!(residual_tenths(&[500, 500]), 0);
    }

    #[test]
    fn test_absorbing_index_prefers_heaviest() {
        let entries = [entry("Erangel", 2), entry("Miramar", 4), entry("Paramo", 1)];
        assert_eq!(absorbing_index(&entries), Some(1));
    }

    #[test]
    fn test_absorbing_index_tie_goes_to_first_in_config_order() {
        let entries = [entry("Vikendi", 1), entry("Taego", 2), entry("Erangel", 2)];
        assert_eq!(absorbing_index(&entries), Some(1));
    }

    #[test]
    fn test_absorbing_index_empty() {
        assert_eq!(absorbing_index(&[]), None);
    }
}
