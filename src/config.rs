use crate::io::Format;
use std::path::PathBuf;

/// Worksheet name used for workbook output unless overridden.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Everything one run needs: where to read, where to write, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Overrides extension-based detection for the source.
    pub input_format: Option<Format>,
    /// Overrides extension-based detection for the destination.
    pub output_format: Option<Format>,
    pub sheet_name: String,
}

impl Config {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Config {
            source: source.into(),
            destination: destination.into(),
            input_format: None,
            output_format: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }

    pub fn with_input_format(mut self, format: Option<Format>) -> Self {
        self.input_format = format;
        self
    }

    pub fn with_output_format(mut self, format: Option<Format>) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_overrides() {
        let cfg = Config::new("in.csv", "out.xlsx");
        assert_eq!(cfg.sheet_name, "Sheet1");
        assert_eq!(cfg.input_format, None);

        let cfg = cfg
            .with_input_format(Some(Format::Csv))
            .with_sheet_name("Overheads");
        assert_eq!(cfg.input_format, Some(Format::Csv));
        assert_eq!(cfg.output_format, None);
        assert_eq!(cfg.sheet_name, "Overheads");
    }
}
