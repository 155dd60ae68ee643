//! Error types for the sheetfmt conversion pipeline.
//!
//! One error enum per collaborator:
//!
//! - [`ConfigError`] - Configuration file loading and parsing
//! - [`ValidationError`] - Column references that do not fit the loaded sheet
//! - [`ReadError`] - Spreadsheet / CSV ingestion
//! - [`ExportError`] - Writing output files
//! - [`PipelineError`] - Top-level orchestration
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to open or read the configuration file.
    #[error("Cannot read configuration '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML or wrongly typed option.
    #[error("Cannot parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when the configuration does not match the sheet shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A 1-based column reference falls outside `[1, columns]`.
    #[error("{field} is out of range (value: {value}, sheet has {columns} columns)")]
    OutOfRange {
        field: &'static str,
        value: i64,
        columns: usize,
    },

    /// A data row is narrower than a referenced column.
    #[error("Row {row} has {len} cells but column {column} is referenced")]
    RowTooShort { row: usize, len: usize, column: usize },
}

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while reading the input sheet.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input file exists but could not be opened.
    #[error("Cannot open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or decoded.
    #[error("Cannot open workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The requested sheet is not in the workbook.
    #[error("Sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    /// The sheet has no header row.
    #[error("Sheet '{0}' is empty")]
    EmptySheet(String),

    /// CSV input could not be parsed.
    #[error("Invalid CSV input: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing output files. Always names the failing file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output file could not be created.
    #[error("Cannot create '{}': {source}", .file.display())]
    Create {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a record or flushing failed.
    #[error("Cannot write '{}': {source}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The first output file would replace the input file.
    #[error("Refusing to overwrite input file '{}'", .0.display())]
    WouldOverwriteInput(PathBuf),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input error.
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    /// Output error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Dry-run output could not be rendered.
    #[error("Cannot render output: {0}")]
    Render(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for input reading.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
