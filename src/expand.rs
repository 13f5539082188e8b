//! Block expansion: after every contiguous run of rows sharing a SKU, insert
//! the three manufacturing-overhead rows for that SKU.
//!
//! Expansion is not idempotent. Generated SKUs such as `"A FMOH"` are ordinary
//! non-empty SKUs, so expanding an already expanded table treats each of them
//! as a single-row block and appends another triple after it.

use crate::error::{Error, Result};
use crate::table::{Row, Table, DESCRIPTION_COLUMN, SKU_COLUMN};
use tracing::debug;

/// An overhead category appended after each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overhead {
    /// Appended to the SKU, e.g. `"A"` → `"A FMOH"`.
    pub sku_suffix: &'static str,
    /// Appended to the description, e.g. `"Widget"` → `"Widget Depreciation"`.
    pub description_suffix: &'static str,
}

/// Generated rows, in emission order.
pub const OVERHEADS: [Overhead; 3] = [
    Overhead {
        sku_suffix: "FMOH",
        description_suffix: "Fixed Manufacturing Overheads",
    },
    Overhead {
        sku_suffix: "VMOH",
        description_suffix: "Variable Manufacturing Overheads",
    },
    Overhead {
        sku_suffix: "NDOH",
        description_suffix: "Depreciation",
    },
];

/// A maximal run of adjacent rows whose trimmed SKU is equal and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub sku: String,
    /// Index of the first row of the run.
    pub start: usize,
    /// Index of the last row of the run (inclusive).
    pub end: usize,
}

/// True if row `index` carries a SKU and the next row (if any) does not carry
/// the same one.
fn is_block_end(table: &Table, index: usize) -> bool {
    match table.sku(index) {
        None => false,
        Some(sku) => table.sku(index + 1) != Some(sku),
    }
}

fn check_columns(table: &Table) -> Result<()> {
    if table.column_count() <= DESCRIPTION_COLUMN {
        return Err(Error::TooFewColumns {
            found: table.column_count(),
        });
    }
    Ok(())
}

/// Every block in `table`, in row order.
pub fn blocks(table: &Table) -> Vec<Block> {
    let mut out = Vec::new();
    let mut start = 0;
    for i in 0..table.row_count() {
        let Some(sku) = table.sku(i) else {
            continue;
        };
        if i == 0 || table.sku(i - 1) != Some(sku) {
            start = i;
        }
        if is_block_end(table, i) {
            out.push(Block {
                sku: sku.to_string(),
                start,
                end: i,
            });
        }
    }
    out
}

/// The three overhead rows closing a block of `sku`.
fn overhead_rows(sku: &str, description: &str, width: usize) -> impl Iterator<Item = Row> {
    let (sku, description) = (sku.to_string(), description.to_string());
    OVERHEADS.iter().map(move |oh| {
        let mut row: Row = vec![Some(String::new()); width];
        row[SKU_COLUMN] = Some(format!("{} {}", sku, oh.sku_suffix));
        row[DESCRIPTION_COLUMN] = Some(format!("{} {}", description, oh.description_suffix));
        row
    })
}

/// Copy `table`, inserting the overhead rows after the last row of every block.
///
/// Fails only when the table has fewer than two columns; nothing is produced in
/// that case.
pub fn expand(table: &Table) -> Result<Table> {
    check_columns(table)?;

    let width = table.column_count();
    let mut rows: Vec<Row> = Vec::with_capacity(table.row_count());
    let mut generated = 0usize;

    for (i, row) in table.rows().iter().enumerate() {
        rows.push(row.clone());

        if !is_block_end(table, i) {
            continue;
        }
        // is_block_end implies a SKU is present
        let sku = table.sku(i).unwrap_or_default();
        rows.extend(overhead_rows(sku, table.description(i), width));
        generated += 1;
    }

    debug!(
        rows_in = table.row_count(),
        rows_out = rows.len(),
        blocks = generated,
        "expanded table"
    );
    Table::new(table.columns().to_vec(), rows)
}
