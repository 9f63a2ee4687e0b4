pub mod batch;
pub mod constants;
pub mod duration;
pub mod error;
pub mod estimate;
pub mod import;
pub mod report;

pub use batch::{BatchRecord, RecordKind, aggregate};
pub use duration::{format_duration, to_hms};
pub use error::ImportError;
pub use estimate::{
    EstimateResult, Sample, SampleInput, TotalUnits, average_per_unit, estimate_total,
    per_unit_proration, safe_div, total_units_from_volumes,
};
pub use import::read_batch;
