//! Transformation module.
//!
//! - Mapping: header → criteria field
//! - Escape: regex escaping of values
//! - Row: one row to one criteria line
//! - Grouper: criteria lines grouped by project
//! - Pipeline: file to grouped criteria

pub mod escape;
pub mod grouper;
pub mod mapping;
pub mod pipeline;
pub mod row;

pub use escape::regex_escape;
pub use grouper::{group_by_project, CriteriaMap, ProjectCriteria};
pub use mapping::{CriteriaField, ColumnMap, COLUMN_MAPPING};
pub use pipeline::*;
pub use row::{ExtractedValues, RowCriteria};
