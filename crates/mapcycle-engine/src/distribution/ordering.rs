use std::cmp::Ordering;

use mapcycle_core::models::ProbabilityRow;

/// Display order: percentage descending, then name ascending (byte-wise).
///
/// Names are unique within a period, so this is a total order and the
/// output never depends on input order.
pub fn display_order(a: &ProbabilityRow, b: &ProbabilityRow) -> Ordering {
    b.tenths.cmp(&a.tenths).then_with(|| a.name.cmp(&b.name))
}

pub fn sort_for_display(rows: &mut [ProbabilityRow]) {
    rows.sort_by(display_order);
}
