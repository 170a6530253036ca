//! Column mapping from spreadsheet headers to criteria fields.
//!
//! The mapping is fixed. Its declaration order is the order in which fields
//! are logged and appear in a criteria line.

use serde::Serialize;
use std::fmt;

/// Canonical criteria field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaField {
    Key,
    Source,
    Project,
    Datatype,
}

impl CriteriaField {
    /// Field name as written in a criteria line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Source => "source",
            Self::Project => "project",
            Self::Datatype => "datatype",
        }
    }

    /// Spreadsheet header this field is read from.
    pub fn header(self) -> &'static str {
        COLUMN_MAPPING
            .iter()
            .find(|m| m.field == self)
            .map(|m| m.header)
            .unwrap_or_default()
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One header → field pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub header: &'static str,
    pub field: CriteriaField,
}

/// Header → field mapping, in output order.
pub const COLUMN_MAPPING: [ColumnMap; 4] = [
    ColumnMap { header: "key_others", field: CriteriaField::Key },
    ColumnMap { header: "eng", field: CriteriaField::Source },
    ColumnMap { header: "module_info", field: CriteriaField::Project },
    ColumnMap { header: "datatype", field: CriteriaField::Datatype },
];
