use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use tsundoku::{BatchRecord, ImportError, RecordKind, aggregate, read_batch};

fn write_csv(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("chapters.csv");
    let mut file = File::create(&csv_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (temp_dir, csv_path)
}

fn record(id: &str, value: Option<f64>, kind: RecordKind) -> BatchRecord {
    BatchRecord {
        id: id.to_string(),
        value,
        kind,
    }
}

#[test]
fn test_aggregate_minutes_mode() {
    let records = vec![
        record("1", Some(20.0), RecordKind::Minutes),
        record("2", None, RecordKind::Minutes),
        record("3", Some(15.0), RecordKind::Minutes),
    ];
    let total = aggregate(&records, RecordKind::Minutes, 0.0, 0.0);
    assert_eq!(total, 35.0);
}

#[test]
fn test_aggregate_pages_mode_charges_overhead_per_row() {
    let records = vec![
        record("1", Some(25.0), RecordKind::Pages),
        record("2", Some(30.0), RecordKind::Pages),
        record("3", Some(25.0), RecordKind::Pages),
        record("4", Some(20.0), RecordKind::Pages),
    ];
    // 100 pages * 0.2 min/page + 4 rows * 1 min
    let total = aggregate(&records, RecordKind::Pages, 0.2, 1.0);
    assert_eq!(total, 24.0);
}

#[test]
fn test_aggregate_pages_mode_counts_unreadable_rows_for_overhead() {
    let records = vec![
        record("1", Some(30.0), RecordKind::Pages),
        record("2", None, RecordKind::Pages),
    ];
    let total = aggregate(&records, RecordKind::Pages, 1.0, 2.0);
    assert_eq!(total, 30.0 + 2.0 * 2.0);
}

#[test]
fn test_aggregate_empty_batch() {
    assert_eq!(aggregate(&[], RecordKind::Minutes, 0.0, 0.0), 0.0);
    assert_eq!(aggregate(&[], RecordKind::Pages, 0.2, 1.0), 0.0);
}

#[test]
fn test_read_batch_pages() {
    let (_temp_dir, path) = write_csv("chapter,page_count\n1,25\n2,28\n3,35\n4,20\n");
    let records = read_batch(&path, RecordKind::Pages).expect("Failed to read CSV");

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].value, Some(25.0));
    assert_eq!(records[3].value, Some(20.0));

    let total = aggregate(&records, RecordKind::Pages, 0.2, 1.0);
    assert!((total - (108.0 * 0.2 + 4.0)).abs() < 1e-12);
}

#[test]
fn test_read_batch_minutes() {
    let (_temp_dir, path) = write_csv("chapter,minutes\nprologue,12\n1,20.5\n2,18\n");
    let records = read_batch(&path, RecordKind::Minutes).expect("Failed to read CSV");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "prologue");
    assert_eq!(aggregate(&records, RecordKind::Minutes, 0.0, 0.0), 50.5);
}

#[test]
fn test_read_batch_non_numeric_cell_degrades_to_zero() {
    let (_temp_dir, path) = write_csv("chapter,minutes\n1,20\n2,bad\n3,15\n");
    let records = read_batch(&path, RecordKind::Minutes).expect("Failed to read CSV");

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].value, None);
    assert_eq!(aggregate(&records, RecordKind::Minutes, 0.0, 0.0), 35.0);
}

#[test]
fn test_read_batch_rejects_missing_columns() {
    let (_temp_dir, path) = write_csv("name,words\n1,2500\n");
    let err = read_batch(&path, RecordKind::Pages).unwrap_err();
    assert!(matches!(err, ImportError::MissingColumns { .. }));
}

#[test]
fn test_read_batch_rejects_row_without_identifier() {
    let (_temp_dir, path) = write_csv("chapter,page_count\n1,25\n,30\n");
    let err = read_batch(&path, RecordKind::Pages).unwrap_err();
    assert!(matches!(err, ImportError::RowMissingId { line: 3 }));
}

#[test]
fn test_read_batch_rejects_row_without_any_value() {
    let (_temp_dir, path) = write_csv("chapter,page_count\n1,25\n2,\n");
    let err = read_batch(&path, RecordKind::Pages).unwrap_err();
    assert!(matches!(err, ImportError::RowMissingValue { line: 3 }));
}

#[test]
fn test_read_batch_mode_without_matching_column_yields_zeros() {
    // A pages-only file read in minutes mode is schema-valid; every record
    // just contributes nothing.
    let (_temp_dir, path) = write_csv("chapter,page_count\n1,25\n2,30\n");
    let records = read_batch(&path, RecordKind::Minutes).expect("Failed to read CSV");

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.value.is_none()));
    assert_eq!(aggregate(&records, RecordKind::Minutes, 0.0, 0.0), 0.0);
}

#[test]
fn test_read_batch_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.csv");
    let err = read_batch(&path, RecordKind::Pages).unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
}

#[test]
fn test_read_batch_header_match_is_case_insensitive() {
    let (_temp_dir, path) = write_csv("Chapter,Page_Count\n1, 25\n");
    let records = read_batch(&path, RecordKind::Pages).expect("Failed to read CSV");
    assert_eq!(records[0].value, Some(25.0));
}
