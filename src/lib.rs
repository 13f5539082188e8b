//! Insert manufacturing-overhead rows into a SKU spreadsheet.
//!
//! The first column of the sheet is the SKU, the second its description.
//! After each contiguous run of rows sharing a (trimmed, non-empty) SKU, three
//! rows are added: `<SKU> FMOH`, `<SKU> VMOH` and `<SKU> NDOH`.
//!
//! ```
//! use sku_overheads::{expand, Table};
//!
//! let table = Table::from_strs(
//!     &["SKU", "Description"],
//!     &[&["A", "Widget"], &["A", "Widget"], &["B", "Gadget"]],
//! )
//! .unwrap();
//! let out = expand(&table).unwrap();
//! assert_eq!(out.row_count(), 9);
//! assert_eq!(out.sku(2), Some("A FMOH"));
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod io;
pub mod process;
pub mod table;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use expand::{blocks, expand, Block};
pub use process::{process_file, run, Report};
pub use table::{Cell, Row, Table};
