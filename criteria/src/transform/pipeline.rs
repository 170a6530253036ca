//! High-level pipeline: spreadsheet file to grouped criteria.
//!
//! # Example
//!
//! ```rust,ignore
//! use loc_criteria::{parse_criteria_file, ReadOptions};
//! use std::path::Path;
//!
//! let result = parse_criteria_file(Path::new("strings.xlsx"), &ReadOptions::default())?;
//! for project in result.criteria.iter() {
//!     println!("{}: {} criteria", project.project, project.criteria.len());
//! }
//! ```

use std::path::Path;

use super::grouper::CriteriaMap;
use super::mapping::{CriteriaField, COLUMN_MAPPING};
use super::row::RowCriteria;
use crate::error::{CriteriaError, CriteriaResult};
use crate::logs::{log_debug, log_info, log_warning};
use crate::sheet::{load_table, ReadOptions, Row, Table, TableInfo};

/// Row counters collected while transforming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Rows read from the sheet
    pub rows: usize,
    /// Rows that ended up in the criteria map
    pub grouped: usize,
    /// Rows whose four values were all empty
    pub empty: usize,
    /// Rows with criteria but no project
    pub without_project: usize,
}

impl TransformStats {
    pub fn summary(&self) -> String {
        format!(
            "{} rows: {} grouped, {} empty, {} without project",
            self.rows, self.grouped, self.empty, self.without_project
        )
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub criteria: CriteriaMap,
    pub stats: TransformStats,
    pub info: TableInfo,
}

/// Read `path` and turn every row into grouped criteria.
///
/// Any failure to open or parse the file becomes [`CriteriaError::Read`].
pub fn parse_criteria_file(path: &Path, options: &ReadOptions) -> CriteriaResult<PipelineResult> {
    let table = load_table(path, options).map_err(|e| CriteriaError::read(path, e))?;
    Ok(transform_table(table))
}

/// Transform an already loaded table.
pub fn transform_table(table: Table) -> PipelineResult {
    log_debug(format!(
        "loaded {:?} table: {} rows, headers [{}]",
        table.info.format,
        table.info.row_count,
        table.info.headers.join(", ")
    ));

    let missing = missing_fields(&table);
    if !missing.is_empty() && !table.rows.is_empty() {
        let headers: Vec<_> = missing.iter().map(|f| f.header()).collect();
        if missing.len() == COLUMN_MAPPING.len() {
            log_warning(format!(
                "none of the expected columns ({}) found in header row",
                headers.join(", ")
            ));
        } else {
            log_debug(format!("columns not present: {}", headers.join(", ")));
        }
    }

    let (criteria, stats) = transform_rows(&table.rows);
    log_debug(stats.summary());

    PipelineResult {
        criteria,
        stats,
        info: table.info,
    }
}

/// Mapped fields whose header column is absent from `table`.
pub fn missing_fields(table: &Table) -> Vec<CriteriaField> {
    COLUMN_MAPPING
        .iter()
        .map(|m| m.field)
        .filter(|field| !table.has_column(field.header()))
        .collect()
}

/// Transform rows in order, logging each row's values.
pub fn transform_rows(rows: &[Row]) -> (CriteriaMap, TransformStats) {
    let mut map = CriteriaMap::new();
    let mut stats = TransformStats {
        rows: rows.len(),
        ..Default::default()
    };

    for row in rows {
        let row_criteria = RowCriteria::from_row(row);
        log_info(format!("values: {}", row_criteria.values));

        if !row_criteria.has_criteria() {
            stats.empty += 1;
        } else if map.add_row(&row_criteria) {
            stats.grouped += 1;
        } else {
            stats.without_project += 1;
        }
    }

    (map, stats)
}
