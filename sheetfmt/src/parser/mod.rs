//! Sheet ingestion for spreadsheet workbooks and CSV files.
//!
//! The first row of the selected sheet becomes the header, every following
//! row becomes a data row. Cells are rendered as plain strings.
//!
//! Workbook rows are anchored at A1: empty leading rows and columns are kept
//! as empty cells, so a 1-based column reference always matches the sheet's
//! column letters.

use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDateTime, NaiveTime};
use std::io::Read;
use std::path::Path;

use crate::error::{ReadError, ReadResult};

/// A header row plus data rows read from one sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sheet {
    /// Name of the sheet the rows came from
    pub name: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            header,
            rows,
        }
    }

    /// Split raw rows into header and body. Fails on a sheet without rows.
    pub fn from_raw_rows(name: impl Into<String>, mut raw: Vec<Vec<String>>) -> ReadResult<Self> {
        let name = name.into();
        if raw.is_empty() {
            return Err(ReadError::EmptySheet(name));
        }
        let rows = raw.split_off(1);
        let header = raw.pop().unwrap_or_default();
        Ok(Self::new(name, header, rows))
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.header, self.rows)
    }
}

/// Read `sheet_name` from the file at `path`.
///
/// `.csv` files are read directly (the sheet name is ignored); every other
/// extension is opened as a workbook (xlsx, xlsm, xlsb, xls, ods).
pub fn read_sheet(path: &Path, sheet_name: &str) -> ReadResult<Sheet> {
    if !path.exists() {
        return Err(ReadError::NotFound(path.to_path_buf()));
    }

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_csv_file(path)
    } else {
        read_workbook(path, sheet_name)
    }
}

/// Read one sheet of a workbook.
pub fn read_workbook(path: &Path, sheet_name: &str) -> ReadResult<Sheet> {
    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names();
    let name = resolve_sheet_name(&available, sheet_name).ok_or_else(|| {
        ReadError::SheetNotFound {
            sheet: sheet_name.to_string(),
            available: available.clone(),
        }
    })?;

    let range = workbook.worksheet_range(&name)?;
    Sheet::from_raw_rows(name, range_to_rows(&range))
}

/// Render a used range as rows counted from A1.
///
/// Rows above the range come back empty and every row is padded on the
/// left up to the range's first column. Trailing empty header cells are
/// dropped, so the header is as wide as its last named column.
pub fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_column)) = range.start() else {
        return Vec::new();
    };

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); first_row as usize];
    raw.extend(range.rows().map(|row| {
        let mut cells = vec![String::new(); first_column as usize];
        cells.extend(row.iter().map(cell_to_string));
        cells
    }));

    if let Some(header) = raw.first_mut() {
        while header.last().is_some_and(String::is_empty) {
            header.pop();
        }
    }
    raw
}

/// Pick the workbook sheet matching `wanted`: exact first, then ignoring case.
pub fn resolve_sheet_name(available: &[String], wanted: &str) -> Option<String> {
    available
        .iter()
        .find(|name| name.as_str() == wanted)
        .or_else(|| available.iter().find(|name| name.eq_ignore_ascii_case(wanted)))
        .cloned()
}

/// Render a workbook cell the way it reads in the sheet.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
            Some(value) => format_datetime(value),
            None => dt.as_f64().to_string(),
        },
        other => other.to_string(),
    }
}

/// `2024-01-01` for whole days, `2024-01-01 12:30:00` otherwise.
fn format_datetime(value: NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Read a CSV file; the sheet is named after the file stem.
pub fn read_csv_file(path: &Path) -> ReadResult<Sheet> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("csv")
        .to_string();
    let file = std::fs::File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(name, file)
}

/// Parse CSV from a reader. Every record must have the header's width.
pub fn parse_csv<R: Read>(name: impl Into<String>, reader: R) -> ReadResult<Sheet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut raw: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        raw.push(record.iter().map(str::to_string).collect());
    }

    Sheet::from_raw_rows(name, raw)
}
