//! Aggregation of per-row batch records into a total minute count.

use tracing::debug;

/// What a record's value column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Pages,
    Minutes,
}

/// One row of an imported batch. `value` is `None` when the cell was present
/// but not numeric; such rows contribute zero instead of failing the batch.
#[derive(Debug, Clone)]
pub struct BatchRecord {
    pub id: String,
    pub value: Option<f64>,
    pub kind: RecordKind,
}

/// Sums a batch of records into total minutes.
///
/// In minutes mode the values are already measured times and are summed
/// directly. In pages mode the page total is converted with a fallback
/// speed, and `per_row_overhead` is charged once per row: the batch format
/// carries no chapter count per row, so one row stands in for one chapter.
/// That approximation is intentional.
///
/// Callers validate the batch schema before building records; this function
/// never sees a structurally invalid batch.
pub fn aggregate(
    records: &[BatchRecord],
    mode: RecordKind,
    fallback_speed_per_page: f64,
    per_row_overhead: f64,
) -> f64 {
    match mode {
        RecordKind::Minutes => records
            .iter()
            .filter(|r| r.kind == RecordKind::Minutes)
            .map(|r| r.value.unwrap_or(0.0))
            .sum(),
        RecordKind::Pages => {
            let total_pages: f64 = records.iter().map(|r| r.value.unwrap_or(0.0)).sum();
            let row_count = records.len() as f64;
            debug!("batch: {} rows, {} pages", records.len(), total_pages);
            total_pages * fallback_speed_per_page + row_count * per_row_overhead
        }
    }
}
