//! Schedule resolution: which period is current, and when it runs.

pub mod cycle_index;
pub mod date_range;

pub use cycle_index::{compute_cycle_index, elapsed_periods};
pub use date_range::{compute_period_date_range, current_period_range, next_rotation};
