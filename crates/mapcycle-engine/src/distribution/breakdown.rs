use serde::Serialize;

use mapcycle_core::errors::DistributionError;
use mapcycle_core::models::ProbabilityRow;

use super::{ordering, residual, rounding, WeightedEntry};

/// Every intermediate of the distribution, for debugging and observability.
///
/// `raw` and `rounded_tenths` are in configuration order; `rows` is in
/// display order and carries the corrected values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBreakdown {
    pub total_weight: u64,
    pub raw: Vec<f64>,
    pub rounded_tenths: Vec<u32>,
    pub residual_tenths: i64,
    /// Entry that absorbed the residual; `None` when the residual was 0.
    pub absorbed_by: Option<String>,
    pub rows: Vec<ProbabilityRow>,
}

impl DistributionBreakdown {
    /// Whether the rounded (uncorrected) values already summed to 100.0.
    pub fn needed_correction(&self) -> bool {
        self.residual_tenths != 0
    }
}

/// Compute the distribution with a full breakdown of each step.
pub fn distribute_breakdown(
    entries: &[WeightedEntry<'_>],
) -> Result<DistributionBreakdown, DistributionError> {
    if entries.is_empty() {
        return Err(DistributionError::NoEntries);
    }
    let total_weight: u64 = entries.iter().map(|e| u64::from(e.weight)).sum();
    if total_weight == 0 {
        return Err(DistributionError::ZeroTotalWeight {
            entries: entries.len(),
        });
    }

    let raw: Vec<f64> = entries
        .iter()
        .map(|e| rounding::raw_percentage(e.weight, total_weight))
        .collect();
    let rounded_tenths: Vec<u32> = entries
        .iter()
        .map(|e| rounding::round_to_tenths(e.weight, total_weight))
        .collect();
    let residual_tenths = residual::residual_tenths(&rounded_tenths);

    let mut corrected = rounded_tenths.clone();
    let mut absorbed_by = None;
    if residual_tenths != 0 {
        // Non-empty, so an absorbing entry always exists.
        if let Some(index) = residual::absorbing_index(entries) {
            let name = entries[index].name;
            let adjusted = i64::from(corrected[index]) + residual_tenths;
            corrected[index] =
                u32::try_from(adjusted).map_err(|_| DistributionError::ResidualUnderflow {
                    name: name.to_string(),
                    residual_tenths,
                })?;
            tracing::debug!(
                entry = name,
                residual_tenths,
                total_weight,
                "applied rounding residual"
            );
            absorbed_by = Some(name.to_string());
        }
    }

    let mut rows: Vec<ProbabilityRow> = entries
        .iter()
        .zip(&corrected)
        .map(|(entry, &tenths)| ProbabilityRow {
            name: entry.name.to_string(),
            role: entry.role,
            weight: entry.weight,
            tenths,
        })
        .collect();
    ordering::sort_for_display(&mut rows);

    Ok(DistributionBreakdown {
        total_weight,
        raw,
        rounded_tenths,
        residual_tenths,
        absorbed_by,
        rows,
    })
}
