//! Delimited file export.
//!
//! Every segment of an [`OutputData`] becomes one file that starts with the
//! header row. The first file is named after the base path, the following
//! ones get a `_<index>` suffix:
//!
//! ```text
//! stock.csv, stock_1.csv, stock_2.csv, ...
//! ```

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};
use crate::logs::{log_success, log_warning};
use crate::transform::pipeline::OutputData;
use crate::transform::Row;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    /// Parse a configured extension, `None` when it is not supported.
    pub fn parse(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            _ => None,
        }
    }

    /// Parse a configured extension, falling back to CSV with a warning.
    pub fn from_extension(extension: &str) -> Self {
        Self::parse(extension).unwrap_or_else(|| {
            log_warning(format!("Undefined export file extension: {}", extension));
            log_warning("The specified export file extension was invalid, so the CSV format was automatically selected.");
            Self::Csv
        })
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }

    pub fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Writes a conversion result somewhere
pub trait Exporter {
    /// Write all segments next to `base` and return the written paths.
    fn export(&self, base: &Path) -> ExportResult<Vec<PathBuf>>;
}

/// Build the exporter for `format`.
pub fn new_exporter<'a>(format: ExportFormat, output: &'a OutputData) -> Box<dyn Exporter + 'a> {
    match format {
        ExportFormat::Csv | ExportFormat::Tsv => Box::new(DelimitedExporter::new(format, output)),
    }
}

/// Writes each segment as a delimited text file
pub struct DelimitedExporter<'a> {
    format: ExportFormat,
    output: &'a OutputData,
}

impl<'a> DelimitedExporter<'a> {
    pub fn new(format: ExportFormat, output: &'a OutputData) -> Self {
        Self { format, output }
    }

    fn write_segment(&self, file: &Path, rows: &[Row]) -> ExportResult<()> {
        let handle = File::create(file).map_err(|source| ExportError::Create {
            file: file.to_path_buf(),
            source,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.format.delimiter())
            .flexible(true)
            .from_writer(handle);

        let write_err = |source: csv::Error| ExportError::Write {
            file: file.to_path_buf(),
            source,
        };

        writer.write_record(&self.output.header).map_err(write_err)?;
        for row in rows {
            writer.write_record(row).map_err(write_err)?;
        }
        writer
            .flush()
            .map_err(|e| write_err(csv::Error::from(e)))?;
        Ok(())
    }
}

impl Exporter for DelimitedExporter<'_> {
    fn export(&self, base: &Path) -> ExportResult<Vec<PathBuf>> {
        if let Some(dir) = base.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| ExportError::Create {
                file: dir.to_path_buf(),
                source,
            })?;
        }

        let mut written = Vec::with_capacity(self.output.file_data.len());
        for (index, rows) in self.output.file_data.iter().enumerate() {
            let file = segment_path(base, index, self.format);
            self.write_segment(&file, rows)?;
            log_success(format!("Wrote {} rows to {}", rows.len(), file.display()));
            written.push(file);
        }
        Ok(written)
    }
}

/// Path of segment `index`: `<base>.<ext>` or `<base>_<index>.<ext>`.
pub fn segment_path(base: &Path, index: usize, format: ExportFormat) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    if index > 0 {
        name.push(format!("_{}", index));
    }
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// True when `a` and `b` name the same file.
///
/// Both paths are canonicalised when they exist, which resolves `..`,
/// symlinks and the letter case a case-insensitive filesystem stores.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Input path without its extension, optionally moved into `out_dir`.
pub fn export_base_name(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    match out_dir {
        Some(dir) => dir.join(stem),
        None => input.with_file_name(stem),
    }
}
