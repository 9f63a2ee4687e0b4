use std::fmt;

use crate::constants::{ID_COLUMN, MINUTES_COLUMN, PAGES_COLUMN};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumns { found: Vec<String> },
    RowMissingId { line: usize },
    RowMissingValue { line: usize },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "IO error: {}", err),
            ImportError::Csv(err) => write!(f, "CSV error: {}", err),
            ImportError::MissingColumns { found } => {
                write!(
                    f,
                    "Expected columns `{},{}` or `{},{}`, found: {}",
                    ID_COLUMN,
                    PAGES_COLUMN,
                    ID_COLUMN,
                    MINUTES_COLUMN,
                    found.join(",")
                )
            }
            ImportError::RowMissingId { line } => {
                write!(f, "Row {} has no {} identifier", line, ID_COLUMN)
            }
            ImportError::RowMissingValue { line } => {
                write!(
                    f,
                    "Row {} has neither a {} nor a {} value",
                    line, PAGES_COLUMN, MINUTES_COLUMN
                )
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err)
    }
}
