//! Reading and writing tables on disk.
//!
//! Workbooks are read through `calamine` (first worksheet only) and written
//! through `rust_xlsxwriter`; CSV goes through the `csv` crate. Every cell is
//! read as text. Writes land in a temporary file next to the destination and
//! are renamed into place once complete.

pub mod csv;
pub mod workbook;

use crate::error::{Error, Result};
use crate::table::Table;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// On-disk table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Spreadsheet workbook (xlsx/xlsm/xlsb/xls/ods on read, xlsx on write).
    #[value(alias = "xlsx")]
    Workbook,
    /// Comma-separated values with a header row.
    Csv,
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

impl Format {
    /// Format to read `path` with, from its extension.
    pub fn for_source(path: &Path) -> Result<Format> {
        match extension(path).as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Format::Workbook),
            Some("csv") => Ok(Format::Csv),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Format to write `path` with, from its extension.
    pub fn for_destination(path: &Path) -> Result<Format> {
        match extension(path).as_deref() {
            Some("xlsx") => Ok(Format::Workbook),
            Some("csv") => Ok(Format::Csv),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Load the table stored at `path`.
#[instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn read_table(path: &Path, format: Format) -> Result<Table> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let table = match format {
        Format::Workbook => workbook::read_workbook(path)?,
        Format::Csv => csv::read_csv(BufReader::new(File::open(path)?))?,
    };
    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded table"
    );
    Ok(table)
}

/// Store `table` at `path`, replacing any existing file only once the new
/// contents are fully written.
#[instrument(level = "info", skip(table, path), fields(path = %path.display()))]
pub fn write_table(table: &Table, path: &Path, format: Format, sheet_name: &str) -> Result<()> {
    write_atomically(path, |file| match format {
        Format::Workbook => workbook::write_workbook(table, file, sheet_name),
        Format::Csv => csv::write_csv(table, file),
    })
}

fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir: PathBuf = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // (a) write into a temp file in the destination directory
    let mut tmp = tempfile::Builder::new()
        .prefix(".sku_overheads-")
        .suffix(".tmp")
        .tempfile_in(&dir)?;
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;

    // (b) rename tmp → final; an error before this point drops (deletes) the temp file
    tmp.persist(path).map_err(|e| e.error)?;
    debug!("renamed temp file into place");
    Ok(())
}
