//! Row transformer: one spreadsheet row to one criteria line.
//!
//! ```text
//! eng=Hello  key_others=  module_info=menu  datatype=string
//!        │
//!        ▼  extract + key fallback
//! key=Hello  source=Hello  project=menu  datatype=string
//!        │
//!        ▼  escape + join
//! key=^Hello$,source=^Hello$,project=^menu$,datatype=^string$
//! ```

use serde::Serialize;
use std::fmt;

use super::escape::regex_escape;
use super::mapping::{CriteriaField, COLUMN_MAPPING};
use crate::sheet::{cell_text, Row};

/// The four mapped values of a row, trimmed, empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedValues {
    pub key: String,
    pub source: String,
    pub project: String,
    pub datatype: String,
}

impl ExtractedValues {
    /// Read the mapped columns of `row` and apply the key fallback.
    ///
    /// A missing column, a null cell and a whitespace-only cell all give an
    /// empty value. An empty key takes the source text; nothing else is ever
    /// defaulted.
    pub fn from_row(row: &Row) -> Self {
        let mut values = Self::default();

        for mapping in &COLUMN_MAPPING {
            let text = row
                .get(mapping.header)
                .and_then(cell_text)
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            *values.get_mut(mapping.field) = text;
        }

        if values.key.is_empty() {
            values.key = values.source.clone();
        }

        values
    }

    pub fn get(&self, field: CriteriaField) -> &str {
        match field {
            CriteriaField::Key => &self.key,
            CriteriaField::Source => &self.source,
            CriteriaField::Project => &self.project,
            CriteriaField::Datatype => &self.datatype,
        }
    }

    fn get_mut(&mut self, field: CriteriaField) -> &mut String {
        match field {
            CriteriaField::Key => &mut self.key,
            CriteriaField::Source => &mut self.source,
            CriteriaField::Project => &mut self.project,
            CriteriaField::Datatype => &mut self.datatype,
        }
    }

    pub fn is_empty(&self) -> bool {
        COLUMN_MAPPING.iter().all(|m| self.get(m.field).is_empty())
    }

    /// `field=^escaped$` for every non-empty field, in mapping order.
    pub fn criteria_parts(&self) -> Vec<String> {
        COLUMN_MAPPING
            .iter()
            .filter_map(|m| {
                let value = self.get(m.field);
                if value.is_empty() {
                    None
                } else {
                    Some(format!("{}=^{}$", m.field.name(), regex_escape(value)))
                }
            })
            .collect()
    }
}

/// `key: <v>, source: <v>, project: <v>, datatype: <v>`
impl fmt::Display for ExtractedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mapping) in COLUMN_MAPPING.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", mapping.field, self.get(mapping.field))?;
        }
        Ok(())
    }
}

/// Outcome of transforming one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCriteria {
    pub values: ExtractedValues,
    /// Comma-joined criteria parts; empty when every value is empty
    pub criteria: String,
}

impl RowCriteria {
    pub fn from_row(row: &Row) -> Self {
        Self::from_values(ExtractedValues::from_row(row))
    }

    pub fn from_values(values: ExtractedValues) -> Self {
        let criteria = values.criteria_parts().join(",");
        Self { values, criteria }
    }

    /// Whether the row produced at least one criteria part.
    pub fn has_criteria(&self) -> bool {
        !self.criteria.is_empty()
    }

    /// Project the row is grouped under, if any.
    pub fn project(&self) -> Option<&str> {
        Some(self.values.project.as_str()).filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row fixture must be an object"),
        }
    }

    #[test]
    fn test_key_falls_back_to_source() {
        let r = row(json!({"eng": "Hello", "key_others": "", "module_info": "menu", "datatype": "string"}));
        let out = RowCriteria::from_row(&r);

        assert_eq!(out.values.key, "Hello");
        assert_eq!(
            out.criteria,
            "key=^Hello$,source=^Hello$,project=^menu$,datatype=^string$"
        );
        assert_eq!(out.project(), Some("menu"));
    }

    #[test]
    fn test_explicit_key_and_escaping() {
        let r = row(json!({"eng": "A+B", "key_others": "K1", "module_info": "core", "datatype": "string"}));
        let out = RowCriteria::from_row(&r);

        assert_eq!(
            out.criteria,
            r"key=^K1$,source=^A\+B$,project=^core$,datatype=^string$"
        );
    }

    #[test]
    fn test_source_never_falls_back_to_key() {
        let r = row(json!({"eng": null, "key_others": "K1", "module_info": "core"}));
        let out = RowCriteria::from_row(&r);

        assert_eq!(out.values.source, "");
        assert_eq!(out.criteria, "key=^K1$,project=^core$");
    }

    #[test]
    fn test_all_empty_row() {
        let r = row(json!({"eng": null, "key_others": "  ", "module_info": "", "datatype": null}));
        let out = RowCriteria::from_row(&r);

        assert!(out.values.is_empty());
        assert!(!out.has_criteria());
        assert_eq!(out.project(), None);
    }

    #[test]
    fn test_missing_columns_are_empty() {
        let r = row(json!({"fr": "Bonjour", "eng": "Hello"}));
        let values = ExtractedValues::from_row(&r);

        assert_eq!(values.key, "Hello");
        assert_eq!(values.project, "");
        assert_eq!(values.datatype, "");
    }

    #[test]
    fn test_values_trimmed_and_numbers_stringified() {
        let r = row(json!({"eng": "  Save  ", "key_others": 42, "module_info": " core ", "datatype": 3.0}));
        let out = RowCriteria::from_row(&r);

        assert_eq!(out.criteria, "key=^42$,source=^Save$,project=^core$,datatype=^3$");
    }

    #[test]
    fn test_field_order_ignores_column_order() {
        let r = row(json!({"datatype": "string", "module_info": "core", "eng": "Hi", "key_others": "k"}));
        let parts = ExtractedValues::from_row(&r).criteria_parts();
        let fields: Vec<_> = parts.iter().map(|p| p.split('=').next().unwrap()).collect();

        assert_eq!(fields, vec!["key", "source", "project", "datatype"]);
    }

    #[test]
    fn test_row_without_project() {
        let r = row(json!({"eng": "Hello", "datatype": "string"}));
        let out = RowCriteria::from_row(&r);

        assert!(out.has_criteria());
        assert_eq!(out.project(), None);
    }

    #[test]
    fn test_display_lists_post_fallback_values() {
        let r = row(json!({"eng": "Hello", "module_info": "menu"}));
        let values = ExtractedValues::from_row(&r);

        assert_eq!(
            values.to_string(),
            "key: Hello, source: Hello, project: menu, datatype: "
        );
    }
}
