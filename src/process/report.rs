use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one successful run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub rows_in: usize,
    pub rows_out: usize,
    pub blocks: usize,
    pub elapsed_seconds: f64,
}

impl Report {
    /// One-line summary for the user.
    pub fn message(&self) -> String {
        format!("Wrote modified file to '{}'", self.destination.display())
    }
}
