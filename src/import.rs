//! CSV batch import.
//!
//! Decodes a two-column table (`chapter,page_count` or `chapter,minutes`)
//! into [`BatchRecord`]s. Schema problems reject the whole file before any
//! aggregation happens; a non-numeric cell inside an otherwise valid row
//! degrades to a zero contribution instead.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use crate::batch::{BatchRecord, RecordKind};
use crate::constants::{ID_COLUMN, MINUTES_COLUMN, PAGES_COLUMN};
use crate::error::ImportError;

struct ColumnMap {
    id: usize,
    pages: Option<usize>,
    minutes: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, ImportError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let id = find(ID_COLUMN);
        let pages = find(PAGES_COLUMN);
        let minutes = find(MINUTES_COLUMN);

        match id {
            Some(id) if pages.is_some() || minutes.is_some() => Ok(ColumnMap { id, pages, minutes }),
            _ => Err(ImportError::MissingColumns {
                found: headers.iter().map(|h| h.trim().to_string()).collect(),
            }),
        }
    }

    fn value_column(&self, mode: RecordKind) -> Option<usize> {
        match mode {
            RecordKind::Pages => self.pages,
            RecordKind::Minutes => self.minutes,
        }
    }
}

fn cell<'a>(record: &'a StringRecord, index: Option<usize>) -> Option<&'a str> {
    let trimmed = record.get(index?)?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Reads a batch CSV into records for [`crate::batch::aggregate`].
///
/// Every row must carry an identifier and at least one value cell; a row
/// failing that rejects the whole batch. `mode` selects which value column
/// feeds the records. Line numbers in errors count the header as line 1.
pub fn read_batch(path: &Path, mode: RecordKind) -> Result<Vec<BatchRecord>, ImportError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let columns = ColumnMap::from_headers(reader.headers()?)?;
    let value_column = columns.value_column(mode);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line = index + 2;

        let id = cell(&row, Some(columns.id))
            .ok_or(ImportError::RowMissingId { line })?
            .to_string();

        if cell(&row, columns.pages).is_none() && cell(&row, columns.minutes).is_none() {
            return Err(ImportError::RowMissingValue { line });
        }

        let value = match cell(&row, value_column) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Row {}: non-numeric value {:?}, counting as 0", line, raw);
                    None
                }
            },
            None => None,
        };

        records.push(BatchRecord {
            id,
            value,
            kind: mode,
        });
    }

    info!("Imported {} rows from {:?}", records.len(), path);
    Ok(records)
}
