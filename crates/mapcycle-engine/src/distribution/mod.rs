//! Probability distribution: integer weights → percentages summing to 100.0.
//!
//! ```text
//! raw_i      = 100 × w_i / Σw
//! rounded_i  = raw_i to one decimal, half away from zero
//! residual   = 100.0 − Σ rounded_i
//! corrected  = rounded, with the residual added to the heaviest entry
//!              (earliest in configuration order on a tie)
//! output     = corrected, sorted by percentage desc, then name asc
//! ```
//!
//! All arithmetic is done in integer tenths of a percent, so the corrected
//! rows sum to exactly 1000 tenths.

pub mod breakdown;
pub mod ordering;
pub mod residual;
pub mod rounding;

use mapcycle_core::errors::DistributionError;
use mapcycle_core::models::{ProbabilityRow, SlotRole};

pub use breakdown::{distribute_breakdown, DistributionBreakdown};

/// One entry of a period with its resolved weight, in configuration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEntry<'a> {
    pub name: &'a str,
    pub role: SlotRole,
    pub weight: u32,
}

impl<'a> WeightedEntry<'a> {
    pub fn new(name: &'a str, role: SlotRole, weight: u32) -> Self {
        Self { name, role, weight }
    }
}

/// Residual-corrected, display-ordered rows for one period.
///
/// Fails on an empty entry set or a zero total weight, and with
/// `ResidualUnderflow` when the residual is negative and larger than the
/// heaviest entry's rounded share. That needs a large period: 54 entries of
/// equal weight round to 1.9% each, and the -2.6% residual would push the
/// first one below zero. 53 equal entries still distribute.
pub fn distribute(
    entries: &[WeightedEntry<'_>],
) -> Result<Vec<ProbabilityRow>, DistributionError> {
    distribute_breakdown(entries).map(|breakdown| breakdown.rows)
}
