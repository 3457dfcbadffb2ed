pub mod period_range;
pub mod probability_row;
pub mod rotation_snapshot;
pub mod slot_role;

pub use period_range::PeriodRange;
pub use probability_row::ProbabilityRow;
pub use rotation_snapshot::RotationSnapshot;
pub use slot_role::SlotRole;
