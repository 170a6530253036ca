//! Tabular input: spreadsheets and CSV files loaded into JSON rows.
//!
//! Every row becomes a JSON object keyed by header name. Empty, null and
//! error cells are stored as [`Value::Null`] so the row transformer only has
//! to distinguish "has text" from "has nothing".
//!
//! ```text
//! book.xlsx ───▶ excel::read_workbook ─────┐
//!                                          ├──▶ Table { rows, info }
//! strings.csv ──▶ delimited::read_csv_file ─┘
//! ```

pub mod delimited;
pub mod excel;

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::SheetResult;

/// One spreadsheet row: header name to cell value.
pub type Row = Map<String, Value>;

/// File extensions read as delimited text rather than as a workbook.
const TEXT_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

/// Kind of tabular file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFormat {
    /// xlsx, xlsm, xlsb, xls or ods, read with calamine
    Workbook,
    /// Delimited text
    Csv,
}

impl SheetFormat {
    /// Pick the reader from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext {
            Some(ext) if TEXT_EXTENSIONS.contains(&ext.as_str()) => Self::Csv,
            _ => Self::Workbook,
        }
    }
}

/// Options controlling how the input is read
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Worksheet to read; the first one when `None`
    pub sheet: Option<String>,
    /// CSV delimiter; auto-detected when `None`
    pub delimiter: Option<u8>,
}

/// Metadata about the loaded table
#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    pub format: SheetFormat,
    /// Worksheet name (workbooks only)
    pub sheet: Option<String>,
    /// Detected encoding (CSV only)
    pub encoding: Option<String>,
    /// Delimiter used (CSV only)
    pub delimiter: Option<char>,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// A fully loaded sheet
#[derive(Debug, Clone)]
pub struct Table {
    pub rows: Vec<Row>,
    pub info: TableInfo,
}

impl Table {
    /// Whether a column with this header exists.
    pub fn has_column(&self, header: &str) -> bool {
        self.info.headers.iter().any(|h| h == header)
    }
}

/// Load a spreadsheet or CSV file, choosing the reader by extension.
pub fn load_table(path: &Path, options: &ReadOptions) -> SheetResult<Table> {
    match SheetFormat::from_path(path) {
        SheetFormat::Csv => delimited::read_csv_file(path, options.delimiter),
        SheetFormat::Workbook => excel::read_workbook(path, options.sheet.as_deref()),
    }
}

/// Zip header names with cell values into a [`Row`].
///
/// A repeated header keeps its first column; cells past the last header and
/// columns with a blank header are dropped. Missing trailing cells are null.
pub(crate) fn build_row<I>(headers: &[String], cells: I) -> Row
where
    I: IntoIterator<Item = Value>,
{
    let mut row = Map::new();
    let mut cells = cells.into_iter();

    for header in headers {
        let value = cells.next().unwrap_or(Value::Null);
        if header.is_empty() || row.contains_key(header) {
            continue;
        }
        row.insert(header.clone(), value);
    }

    row
}

/// Text of a cell, or `None` for a null cell.
///
/// Whole floats print without a fractional part (`3.0` is `3`), booleans as
/// `True`/`False`. The result is not trimmed.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // Beyond 2^53 floats are not exact integers anyway
        Some(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            format!("{}", f as i64)
        }
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
