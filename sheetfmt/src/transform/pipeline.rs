//! High-level conversion pipeline.
//!
//! Stages always run in the same order:
//!
//! 1. De-duplicate on the uniqueness key (original values)
//! 2. Overwrite configured columns
//! 3. Aggregate distinct values of one column (whole table)
//! 4. Split into row-count segments
//! 5. Render the completion message
//!
//! Validation is the only fallible step; once a [`TransformPlan`] exists
//! the stages cannot fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use sheetfmt::{convert, Config};
//!
//! let output = convert(header, rows, &Config::default())?;
//! println!("{} files", output.file_data.len());
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::operations::{dedup_rows, distinct_values, overwrite_columns, render_message, split_rows, Row};
use crate::config::Config;
use crate::error::{ExportError, PipelineResult, ValidationResult};
use crate::export::{export_base_name, is_same_file, new_exporter, segment_path, ExportFormat};
use crate::logs::{log_info, log_success};
use crate::parser::read_sheet;
use crate::validation::{validate, validate_rows, TransformPlan};

/// Result of one conversion, handed to the exporter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputData {
    /// Copy of the input header
    pub header: Row,
    /// One entry per output file
    pub file_data: Vec<Vec<Row>>,
    /// Distinct values of the aggregation column, empty when disabled
    pub aggregate: Vec<String>,
    /// Rendered completion message, empty when disabled
    pub message: String,
}

/// Options for [`convert_file`]
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Directory for the output files (default: next to the input)
    pub out_dir: Option<PathBuf>,
    /// Run the transforms but do not write any file
    pub dry_run: bool,
}

/// Outcome of [`convert_file`]
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub output: OutputData,
    /// Files written, empty on a dry run
    pub files: Vec<PathBuf>,
}

/// Validate `config` against the data, then run every stage.
pub fn convert(header: Row, rows: Vec<Row>, config: &Config) -> ValidationResult<OutputData> {
    let plan = validate(&header, config)?;
    validate_rows(&rows, &plan)?;
    Ok(apply_plan(header, rows, &plan))
}

/// Run the stages of an already validated plan.
pub fn apply_plan(header: Row, rows: Vec<Row>, plan: &TransformPlan) -> OutputData {
    let before = rows.len();
    let mut rows = dedup_rows(rows, &plan.unique);
    if rows.len() < before {
        log_info(format!("Removed {} duplicate rows", before - rows.len()));
    }

    overwrite_columns(&mut rows, &plan.overwrites);

    let aggregate = match plan.distinct {
        Some(column) => {
            let values = distinct_values(&rows, column);
            let name = header.get(column).map(String::as_str).unwrap_or_default();
            log_info(format!("Found {} distinct values in '{}'", values.len(), name));
            values
        }
        None => Vec::new(),
    };

    let file_data = match plan.split_rows {
        Some(size) => split_rows(rows, size),
        None => vec![rows],
    };

    let message = plan
        .message
        .as_deref()
        .map(|template| render_message(template, &aggregate))
        .unwrap_or_default();

    OutputData {
        header,
        file_data,
        aggregate,
        message,
    }
}

/// Read, transform and export one input file.
pub fn convert_file(
    input: &Path,
    config: &Config,
    options: &ConvertOptions,
) -> PipelineResult<ConvertReport> {
    log_info(format!("Reading sheet '{}' from {}", config.sheet_name, input.display()));
    let sheet = read_sheet(input, &config.sheet_name)?;
    log_success(format!(
        "Read {} rows, {} columns from '{}'",
        sheet.rows().len(),
        sheet.header().len(),
        sheet.name
    ));

    let (header, rows) = sheet.into_parts();
    let output = convert(header, rows, config)?;
    log_success(format!("Prepared {} output file(s)", output.file_data.len()));

    if options.dry_run {
        return Ok(ConvertReport {
            output,
            files: Vec::new(),
        });
    }

    let format = ExportFormat::from_extension(&config.export_file_extension);
    let base = export_base_name(input, options.out_dir.as_deref());
    if is_same_file(&segment_path(&base, 0, format), input) {
        return Err(ExportError::WouldOverwriteInput(input.to_path_buf()).into());
    }
    let files = new_exporter(format, &output).export(&base)?;

    Ok(ConvertReport { output, files })
}
