//! # sheetfmt - Spreadsheet to delimited text conversion
//!
//! sheetfmt reads one sheet of a workbook (or a CSV file), applies the row
//! transforms described in a YAML configuration and writes one or more
//! delimited text files.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Workbook   │────▶│   Parser    │────▶│  Validate   │────▶│  Transform  │
//! │ (xlsx/csv)  │     │(header+rows)│     │  (columns)  │     │  (5 stages) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                                    │
//!                                         ┌─────────────┐     ┌──────▼──────┐
//!                                         │  CSV files  │◀────│   Export    │
//!                                         │ (segments)  │     │             │
//!                                         └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheetfmt::{convert_file, Config, ConvertOptions};
//! use std::path::Path;
//!
//! let config = Config::load("sheetfmt.yaml")?;
//! let report = convert_file(Path::new("stock.xlsx"), &config, &ConvertOptions::default())?;
//! if !report.output.message.is_empty() {
//!     println!("{}", report.output.message);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per collaborator
//! - [`logs`] - Leveled diagnostics
//! - [`config`] - YAML configuration and defaults
//! - [`parser`] - Workbook / CSV ingestion
//! - [`validation`] - Column reference checks
//! - [`transform`] - Row stages and pipeline
//! - [`export`] - Delimited file writer

// Core modules
pub mod error;
pub mod logs;

// Configuration
pub mod config;

// Input
pub mod parser;

// Validation
pub mod validation;

// Transformation
pub mod transform;

// Output
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, ExportError, PipelineError, ReadError, ValidationError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ColumnValue, Config, FileSplit, DISTINCT_PLACEHOLDER};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_csv, read_sheet, Sheet};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{validate, validate_rows, TransformPlan};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    apply_plan,
    convert,
    convert_file,
    ConvertOptions,
    ConvertReport,
    OutputData,
};

pub use transform::operations::{
    dedup_rows,
    distinct_values,
    overwrite_columns,
    render_message,
    split_rows,
    Row,
};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{DelimitedExporter, ExportFormat, Exporter};
