//! Error types for sku_overheads

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sku_overheads operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], stable enough for callers to
/// branch on and for structured reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Schema,
    UnsupportedFormat,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The source file does not exist.
    #[error("source not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// The table has fewer than the two positional columns (SKU, description).
    #[error("expected at least two columns (SKU and Description), found {found}")]
    TooFewColumns { found: usize },

    /// A data row (0-based, header excluded) does not have one cell per column.
    #[error("data row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A CSV record has more fields than the header; `line` is the 1-based
    /// line in the file.
    #[error("line {line} has {found} fields, expected {expected}")]
    RecordWidth {
        line: u64,
        found: usize,
        expected: usize,
    },

    /// No reader/writer is known for the file extension.
    #[error("unsupported file format for '{}'", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The workbook contains no worksheet to read.
    #[error("workbook '{}' contains no worksheets", .0.display())]
    NoWorksheet(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::TooFewColumns { .. }
            | Error::RowWidth { .. }
            | Error::RecordWidth { .. } => ErrorKind::Schema,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::NoWorksheet(_)
            | Error::Io(_)
            | Error::Workbook(_)
            | Error::Xlsx(_)
            | Error::Csv(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_messages() {
        let e = Error::NotFound(PathBuf::from("missing.xlsx"));
        assert_eq!(e.kind(), ErrorKind::NotFound);
        assert_eq!(e.to_string(), "source not found: 'missing.xlsx'");

        let e = Error::TooFewColumns { found: 1 };
        assert_eq!(e.kind(), ErrorKind::Schema);
        assert!(e.to_string().contains("expected at least two columns"));

        let e: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(e.kind(), ErrorKind::Io);
        assert_eq!(e.to_string(), "I/O error: disk full");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::UnsupportedFormat).unwrap();
        assert_eq!(json, "\"unsupported_format\"");
    }
}
