//! Conversion configuration.
//!
//! Loaded from a YAML file such as:
//!
//! ```yaml
//! sheet_name: Sheet1
//! export_file_extension: csv
//! overwrite_columns:
//!   - column: 2
//!     value: computer
//! unique_columns: [2, 3]
//! file_split:
//!   row: 1000
//! distinct_column: 2
//! completion_message: "Exported {$distinct_column} done."
//! ```
//!
//! Every option is optional. Column references are 1-based and are checked
//! against the sheet by [`crate::validation::validate`] before use.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Sheet read when `sheet_name` is not set.
pub const DEFAULT_SHEET_NAME: &str = "sheet1";

/// Output format when `export_file_extension` is not set.
pub const DEFAULT_EXPORT_FILE_EXTENSION: &str = "csv";

/// Token in `completion_message` replaced by the distinct values.
pub const DISTINCT_PLACEHOLDER: &str = "{$distinct_column}";

/// A forced cell value for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    /// 1-based column
    pub column: i64,
    #[serde(default)]
    pub value: String,
}

impl ColumnValue {
    pub fn new(column: i64, value: impl Into<String>) -> Self {
        Self { column, value: value.into() }
    }
}

/// Output splitting settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSplit {
    /// Rows per output file, 0 disables splitting
    pub row: usize,
}

/// Configuration record for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_name: String,
    pub export_file_extension: String,
    pub overwrite_columns: Vec<ColumnValue>,
    pub unique_columns: Vec<i64>,
    pub file_split: FileSplit,
    /// 1-based column to aggregate, 0 disables aggregation
    pub distinct_column: i64,
    pub completion_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::empty().with_defaults()
    }
}

impl Config {
    /// A record with every field unset, before defaults are applied.
    fn empty() -> Self {
        Self {
            sheet_name: String::new(),
            export_file_extension: String::new(),
            overwrite_columns: Vec::new(),
            unique_columns: Vec::new(),
            file_split: FileSplit::default(),
            distinct_column: 0,
            completion_message: String::new(),
        }
    }

    /// Fill the sheet name and export extension when they are empty.
    pub fn with_defaults(mut self) -> Self {
        if self.sheet_name.is_empty() {
            self.sheet_name = DEFAULT_SHEET_NAME.to_string();
        }
        if self.export_file_extension.is_empty() {
            self.export_file_extension = DEFAULT_EXPORT_FILE_EXTENSION.to_string();
        }
        self
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Config = serde_yaml::from_str(content)?;
        Ok(raw.with_defaults())
    }

    /// Load the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn has_split_row(&self) -> bool {
        self.file_split.row != 0
    }

    pub fn has_distinct_column(&self) -> bool {
        self.distinct_column != 0
    }
}
