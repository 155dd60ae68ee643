//! Configuration validation against the loaded sheet.
//!
//! [`validate`] checks every 1-based column reference against the header
//! width and resolves the configuration into a [`TransformPlan`] of 0-based
//! indices. Checks run in a fixed order (overwrite, distinct, unique) and the
//! first violation is returned.
//!
//! [`validate_rows`] then makes sure every data row is wide enough for the
//! plan, so the transform stages can index cells without failing.

use serde::Serialize;

use crate::config::Config;
use crate::error::{ValidationError, ValidationResult};

/// A configuration resolved against one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformPlan {
    /// (0-based column, value) pairs in declared order
    pub overwrites: Vec<(usize, String)>,
    /// 0-based uniqueness key columns
    pub unique: Vec<usize>,
    /// 0-based aggregation column
    pub distinct: Option<usize>,
    /// Rows per segment
    pub split_rows: Option<usize>,
    /// Completion message template
    pub message: Option<String>,
}

impl TransformPlan {
    /// Highest 0-based column any stage reads or writes.
    pub fn max_column(&self) -> Option<usize> {
        self.overwrites
            .iter()
            .map(|(col, _)| *col)
            .chain(self.unique.iter().copied())
            .chain(self.distinct)
            .max()
    }
}

/// Map a 1-based reference to a 0-based index within `columns`.
fn resolve(field: &'static str, value: i64, columns: usize) -> ValidationResult<usize> {
    usize::try_from(value)
        .ok()
        .filter(|c| (1..=columns).contains(c))
        .map(|c| c - 1)
        .ok_or(ValidationError::OutOfRange {
            field,
            value,
            columns,
        })
}

/// Validate `config` against `header` and resolve its column references.
pub fn validate(header: &[String], config: &Config) -> ValidationResult<TransformPlan> {
    let columns = header.len();

    let overwrites = config
        .overwrite_columns
        .iter()
        .map(|ow| -> ValidationResult<(usize, String)> {
            Ok((resolve("overwrite_columns", ow.column, columns)?, ow.value.clone()))
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    let distinct = if config.has_distinct_column() {
        Some(resolve("distinct_column", config.distinct_column, columns)?)
    } else {
        None
    };

    let unique = config
        .unique_columns
        .iter()
        .map(|&c| resolve("unique_columns", c, columns))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(TransformPlan {
        overwrites,
        unique,
        distinct,
        split_rows: config.has_split_row().then_some(config.file_split.row),
        message: (!config.completion_message.is_empty())
            .then(|| config.completion_message.clone()),
    })
}

/// Check that every row has a cell for each column the plan touches.
pub fn validate_rows(rows: &[Vec<String>], plan: &TransformPlan) -> ValidationResult<()> {
    let Some(max) = plan.max_column() else {
        return Ok(());
    };

    match rows.iter().position(|row| row.len() <= max) {
        Some(i) => Err(ValidationError::RowTooShort {
            row: i + 1,
            len: rows[i].len(),
            column: max + 1,
        }),
        None => Ok(()),
    }
}
