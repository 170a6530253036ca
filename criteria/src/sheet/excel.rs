//! Workbook reader (xlsx, xlsm, xlsb, xls, ods) built on calamine.

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use chrono::NaiveDateTime;
use serde_json::{Number, Value};
use std::path::Path;

use super::{build_row, cell_text, SheetFormat, Table, TableInfo};
use crate::error::{SheetError, SheetResult};

/// Date cells are rendered the way a plain timestamp prints.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read one worksheet of a workbook.
///
/// The first row of the sheet's used range is the header row. `sheet`
/// selects a worksheet by name; the first worksheet is used when `None`.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> SheetResult<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();

    let name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| SheetError::SheetNotFound {
                name: wanted.to_string(),
                available: sheet_names.join(", "),
            })?,
        None => sheet_names.first().cloned().ok_or(SheetError::NoWorksheet)?,
    };

    let range = workbook.worksheet_range(&name)?;
    Ok(range_to_table(&range, name))
}

/// Convert a worksheet range into a [`Table`].
pub(crate) fn range_to_table(range: &Range<Data>, sheet: String) -> Table {
    let mut rows_iter = range.rows();

    let headers: Vec<String> = rows_iter
        .next()
        .map(|header_row| {
            header_row
                .iter()
                .map(|cell| {
                    cell_text(&cell_value(cell))
                        .map(|s| s.trim().to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .unwrap_or_default();

    let rows: Vec<_> = rows_iter
        .map(|cells| build_row(&headers, cells.iter().map(cell_value)))
        .collect();

    Table {
        info: TableInfo {
            format: SheetFormat::Workbook,
            sheet: Some(sheet),
            encoding: None,
            delimiter: None,
            headers,
            row_count: rows.len(),
        },
        rows,
    }
}

/// Map a calamine cell onto a JSON value. Empty and error cells are null.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        other => match other.as_datetime() {
            Some(dt) => Value::String(format_datetime(&dt)),
            None => Value::String(other.to_string()),
        },
    }
}

fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}
