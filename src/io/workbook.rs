use crate::error::{Error, Result};
use crate::io::csv::unnamed;
use crate::table::{Cell, Row, Table};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Datelike, NaiveDateTime};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::io::{Seek, Write};
use std::path::Path;
use tracing::debug;

/// Render a workbook cell as the text a user sees, so SKU matching stays
/// string-exact. Empty cells are null.
pub fn cell_text(cell: &Data) -> Cell {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => Some(match dt.as_datetime() {
            Some(naive) => datetime_text(naive),
            None => float_text(dt.as_f64()),
        }),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(e.to_string()),
    }
}

/// Date-times render as `YYYY-MM-DD HH:MM:SS`. Time-only cells carry no date
/// part (serial below 1, which lands before 1900) and render as `HH:MM:SS`.
fn datetime_text(naive: NaiveDateTime) -> String {
    if naive.year() < 1900 {
        naive.format("%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Whole numbers lose the `.0` xlsx stores them with; anything else keeps
/// its shortest round-trip form.
fn float_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Read the first worksheet of the workbook at `path`. The first row is the
/// header; every other row is data.
pub fn read_workbook(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::NoWorksheet(path.to_path_buf()))??;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(i, c)| {
                cell_text(c)
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| unnamed(i))
            })
            .collect(),
        None => Vec::new(),
    };
    let rows: Vec<Row> = rows
        .map(|r| r.iter().map(cell_text).collect())
        .collect();

    debug!(
        sheet_start = ?range.start(),
        width = range.width(),
        height = range.height(),
        "read worksheet"
    );
    Table::new(columns, rows)
}

/// Write `table` to a single worksheet named `sheet_name`: header row first,
/// all cells as strings, null and empty cells left blank.
pub fn write_workbook<W>(table: &Table, writer: W, sheet_name: &str) -> Result<()>
where
    W: Write + Seek + Send,
{
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, name) in table.columns().iter().enumerate() {
        if !name.is_empty() {
            sheet.write_string(0, col_num(col)?, name)?;
        }
    }
    for (r, row) in table.rows().iter().enumerate() {
        let row_num = u32::try_from(r + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in row.iter().enumerate() {
            if let Some(text) = cell.as_deref().filter(|t| !t.is_empty()) {
                sheet.write_string(row_num, col_num(col)?, text)?;
            }
        }
    }

    workbook.save_to_writer(writer)?;
    Ok(())
}

fn col_num(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError.into())
}
