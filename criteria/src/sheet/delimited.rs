//! Delimited text reader with encoding and delimiter auto-detection.
//!
//! Exported spreadsheets often arrive as CSV in a legacy encoding with `;` as
//! separator, so both are sniffed before the content is handed to the `csv`
//! crate. Empty cells become null, exactly like empty spreadsheet cells.

use csv::{ReaderBuilder, Trim};
use encoding_rs::{Encoding, UTF_8};
use serde_json::Value;
use std::path::Path;

use super::{build_row, SheetFormat, Table, TableInfo};
use crate::error::{SheetError, SheetResult};

/// Candidate separators, in tie-break order.
const SEPARATORS: [u8; 4] = [b';', b',', b'\t', b'|'];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _language) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes with the given encoding label.
///
/// A leading BOM wins over the label and is removed. Labels unknown to
/// `encoding_rs` fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> SheetResult<String> {
    let Some(enc) = Encoding::for_label(encoding.as_bytes()) else {
        return Ok(UTF_8.decode(bytes).0.into_owned());
    };

    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(SheetError::Encoding(used.name().to_string()));
    }
    Ok(text.into_owned())
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = SEPARATORS[0];
    let mut best_count = 0;

    for &sep in &SEPARATORS {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read a CSV file, auto-detecting encoding and (unless given) delimiter.
pub fn read_csv_file(path: &Path, delimiter: Option<u8>) -> SheetResult<Table> {
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes, delimiter)
}

/// Decode raw file bytes, returning the text and the encoding used.
///
/// Valid UTF-8 (with or without BOM) is taken as is; chardet is only asked
/// when the bytes are not UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> SheetResult<(String, String)> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok((text.to_string(), "utf-8".to_string()));
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    Ok((content, encoding))
}

/// Parse CSV bytes, auto-detecting encoding and (unless given) delimiter.
pub fn parse_bytes(bytes: &[u8], delimiter: Option<u8>) -> SheetResult<Table> {
    let (content, encoding) = decode_bytes(bytes)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    let mut table = parse_str(&content, delimiter)?;
    table.info.encoding = Some(encoding);
    Ok(table)
}

/// Parse already decoded CSV text with an explicit delimiter.
///
/// The first record is the header row. Rows may be shorter or longer than
/// the header; blank lines are skipped.
pub fn parse_str(content: &str, delimiter: u8) -> SheetResult<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let cells = record.iter().map(|field| {
            if field.is_empty() {
                Value::Null
            } else {
                Value::String(field.to_string())
            }
        });
        rows.push(build_row(&headers, cells));
    }

    Ok(Table {
        info: TableInfo {
            format: SheetFormat::Csv,
            sheet: None,
            encoding: None,
            delimiter: Some(char::from(delimiter)),
            headers,
            row_count: rows.len(),
        },
        rows,
    })
}
