use crate::error::{Error, Result};
use crate::table::{Row, Table};
use ::csv::{ReaderBuilder, Writer};
use std::io::{Read, Write};

/// Name given to a column whose header cell is blank.
pub(crate) fn unnamed(index: usize) -> String {
    format!("Unnamed: {}", index)
}

/// Parse CSV text with a header row. Empty fields become null cells; short
/// records are padded with nulls, long records are rejected.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short rows are padded below rather than rejected
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if h.trim().is_empty() {
                unnamed(i)
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() > columns.len() {
            // header is line 1, so data record idx sits on line idx + 2
            let line = record.position().map_or(idx as u64 + 2, |p| p.line());
            return Err(Error::RecordWidth {
                line,
                found: record.len(),
                expected: columns.len(),
            });
        }
        let mut row: Row = record
            .iter()
            .map(|f| (!f.is_empty()).then(|| f.to_string()))
            .collect();
        row.resize(columns.len(), None);
        rows.push(row);
    }

    Table::new(columns, rows)
}

/// Write `table` as CSV, header first; null cells are written as empty fields.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_everything_as_text() -> anyhow::Result<()> {
        let data = "SKU,Description,Price\n00123,Widget,1.50\n,Loose,\n2024-01-02,Dated,7\n";
        let table = read_csv(data.as_bytes())?;

        assert_eq!(table.columns(), ["SKU", "Description", "Price"]);
        assert_eq!(table.row_count(), 3);
        // leading zeros and dates stay exactly as written
        assert_eq!(table.sku(0), Some("00123"));
        assert_eq!(table.rows()[0][2].as_deref(), Some("1.50"));
        assert_eq!(table.rows()[1], vec![None, Some("Loose".to_string()), None]);
        assert_eq!(table.sku(2), Some("2024-01-02"));
        Ok(())
    }

    #[test]
    fn test_short_rows_padded_long_rows_rejected() -> anyhow::Result<()> {
        let table = read_csv("SKU,Description,Qty\nA,Widget\n".as_bytes())?;
        assert_eq!(
            table.rows()[0],
            vec![Some("A".to_string()), Some("Widget".to_string()), None]
        );

        let err = read_csv("SKU,Description\nA,Widget,extra\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::RecordWidth {
                line: 2,
                found: 3,
                expected: 2
            }
        ));
        assert_eq!(err.to_string(), "line 2 has 3 fields, expected 2");

        let err = read_csv("SKU,Description
A,Widget
B,Gadget
C,Part,extra
".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::RecordWidth { line: 4, .. }));
        Ok(())
    }

    #[test]
    fn test_blank_headers_are_named_by_position() -> anyhow::Result<()> {
        let table = read_csv("SKU,,Notes\nA,Widget,x\n".as_bytes())?;
        assert_eq!(table.columns(), ["SKU", "Unnamed: 1", "Notes"]);
        Ok(())
    }

    #[test]
    fn test_empty_input_has_no_columns() -> anyhow::Result<()> {
        let table = read_csv("".as_bytes())?;
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn test_write_quotes_and_blanks() -> anyhow::Result<()> {
        let table = Table::from_strs(
            &["SKU", "Description", "Qty"],
            &[&["A", "Widget, large", ""], &["", "Loose", "3"]],
        )?;
        let mut out = Vec::new();
        write_csv(&table, &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "SKU,Description,Qty\nA,\"Widget, large\",\n,Loose,3\n"
        );
        Ok(())
    }
}
