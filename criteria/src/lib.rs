//! # loc-criteria - spreadsheet rows to loctool criteria
//!
//! Reads a localization spreadsheet (one translatable string per row) and
//! produces, per project, the criteria lines the loctool shell pipeline uses
//! as exact-match patterns.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ xlsx / csv  │────▶│    Sheet    │────▶│  Transform  │────▶│   Output    │
//! │             │     │ (JSON rows) │     │ (row→crit.) │     │ ([PROJECT]) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use loc_criteria::{parse_criteria_file, render, OutputFormat, ReadOptions};
//! use std::path::Path;
//!
//! let result = parse_criteria_file(Path::new("strings.xlsx"), &ReadOptions::default())?;
//! print!("{}", render(&result.criteria, OutputFormat::Text));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and exit codes
//! - [`logs`] - Diagnostic lines on stderr
//! - [`sheet`] - Spreadsheet and CSV loading
//! - [`transform`] - Column mapping, escaping, row transformer, grouping
//! - [`output`] - Criteria rendering

pub mod error;
pub mod logs;
pub mod output;
pub mod sheet;
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CriteriaError, CriteriaResult, SheetError, SheetResult};

// =============================================================================
// Re-exports - Sheet loading
// =============================================================================

pub use sheet::{cell_text, load_table, ReadOptions, Row, SheetFormat, Table, TableInfo};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    group_by_project,
    parse_criteria_file,
    regex_escape,
    transform_rows,
    transform_table,
    ColumnMap,
    CriteriaField,
    CriteriaMap,
    ExtractedValues,
    PipelineResult,
    ProjectCriteria,
    RowCriteria,
    TransformStats,
    COLUMN_MAPPING,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{render, write_criteria, write_output, OutputFormat};
