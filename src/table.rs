use crate::error::{Error, Result};

/// One cell: text, or `None` for an empty/null cell.
pub type Cell = Option<String>;

/// One row, holding exactly one [`Cell`] per column.
pub type Row = Vec<Cell>;

/// Column holding the SKU key, regardless of its header text.
pub const SKU_COLUMN: usize = 0;
/// Column holding the description, regardless of its header text.
pub const DESCRIPTION_COLUMN: usize = 1;

/// An ordered, positionally addressed table of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the header row of the source file.
    columns: Vec<String>,
    /// Data rows in file order, each as wide as `columns`.
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, rejecting any row whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != columns.len())
        {
            return Err(Error::RowWidth {
                row,
                found: cells.len(),
                expected: columns.len(),
            });
        }
        Ok(Table { columns, rows })
    }

    /// Convenience constructor from string literals; empty strings become null cells.
    pub fn from_strs(columns: &[&str], rows: &[&[&str]]) -> Result<Self> {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|r| {
                r.iter()
                    .map(|c| (!c.is_empty()).then(|| c.to_string()))
                    .collect()
            })
            .collect();
        Table::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trimmed, non-empty SKU of row `index`, or `None` if the row has no SKU
    /// (or does not exist).
    pub fn sku(&self, index: usize) -> Option<&str> {
        self.rows
            .get(index)
            .and_then(|r| r.get(SKU_COLUMN))
            .and_then(|c| c.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Description of row `index`, with a null cell read as the empty string.
    pub fn description(&self, index: usize) -> &str {
        self.rows
            .get(index)
            .and_then(|r| r.get(DESCRIPTION_COLUMN))
            .and_then(|c| c.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Table::new(
            vec!["SKU".into(), "Description".into()],
            vec![vec![Some("A".into()), None], vec![Some("B".into())]],
        )
        .unwrap_err();
        match err {
            Error::RowWidth {
                row,
                found,
                expected,
            } => {
                assert_eq!((row, found, expected), (1, 1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sku_is_trimmed_and_empty_is_none() -> anyhow::Result<()> {
        let t = Table::from_strs(
            &["SKU", "Description"],
            &[&["  A1 ", "Widget"], &["   ", "Blank"], &["", ""]],
        )?;
        assert_eq!(t.sku(0), Some("A1"));
        assert_eq!(t.sku(1), None);
        assert_eq!(t.sku(2), None);
        assert_eq!(t.sku(3), None);
        assert_eq!(t.description(0), "Widget");
        assert_eq!(t.description(2), "");
        Ok(())
    }
}
