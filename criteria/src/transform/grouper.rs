//! Group criteria lines by project.
//!
//! ```text
//! row 2: project=menu  ─┐        [PROJECT: menu]
//! row 3: project=core  ─┼──▶       row 2
//! row 5: project=menu  ─┘          row 5
//!                                [PROJECT: core]
//!                                  row 3
//! ```
//!
//! Projects keep the order in which they were first seen, criteria keep row
//! order within their project.

use serde::Serialize;
use std::collections::HashMap;

use super::row::RowCriteria;

/// All criteria lines of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCriteria {
    pub project: String,
    pub criteria: Vec<String>,
}

/// Project → criteria lines, in first-seen project order.
#[derive(Debug, Clone, Default)]
pub struct CriteriaMap {
    projects: Vec<ProjectCriteria>,
    index: HashMap<String, usize>,
}

impl CriteriaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a criteria line to `project`, creating the project on first use.
    pub fn push(&mut self, project: &str, criteria: String) {
        let idx = match self.index.get(project) {
            Some(&idx) => idx,
            None => {
                self.projects.push(ProjectCriteria {
                    project: project.to_string(),
                    criteria: Vec::new(),
                });
                let idx = self.projects.len() - 1;
                self.index.insert(project.to_string(), idx);
                idx
            }
        };
        self.projects[idx].criteria.push(criteria);
    }

    /// Add a transformed row.
    ///
    /// Returns `false` when the row is dropped: it has no criteria parts or
    /// no project to group it under.
    pub fn add_row(&mut self, row: &RowCriteria) -> bool {
        match row.project() {
            Some(project) if row.has_criteria() => {
                self.push(project, row.criteria.clone());
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, project: &str) -> Option<&[String]> {
        self.index
            .get(project)
            .map(|&idx| self.projects[idx].criteria.as_slice())
    }

    pub fn projects(&self) -> &[ProjectCriteria] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectCriteria> {
        self.projects.iter()
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of criteria lines across all projects
    pub fn criteria_count(&self) -> usize {
        self.projects.iter().map(|p| p.criteria.len()).sum()
    }
}

impl Serialize for CriteriaMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.projects.serialize(serializer)
    }
}

/// Group transformed rows into a [`CriteriaMap`].
pub fn group_by_project<'a, I>(rows: I) -> CriteriaMap
where
    I: IntoIterator<Item = &'a RowCriteria>,
{
    let mut map = CriteriaMap::new();
    for row in rows {
        map.add_row(row);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::row::ExtractedValues;

    fn row(source: &str, project: &str) -> RowCriteria {
        RowCriteria::from_values(ExtractedValues {
            key: source.to_string(),
            source: source.to_string(),
            project: project.to_string(),
            datatype: String::new(),
        })
    }

    #[test]
    fn test_first_seen_project_order() {
        let rows = vec![
            row("a", "menu"),
            row("b", "core"),
            row("c", "zeta"),
            row("d", "core"),
            row("e", "menu"),
        ];
        let map = group_by_project(&rows);

        let projects: Vec<_> = map.iter().map(|p| p.project.as_str()).collect();
        assert_eq!(projects, vec!["menu", "core", "zeta"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.criteria_count(), 5);
    }

    #[test]
    fn test_row_order_within_project() {
        let rows = vec![row("first", "menu"), row("other", "core"), row("second", "menu")];
        let map = group_by_project(&rows);

        let menu = map.get("menu").unwrap();
        assert_eq!(menu.len(), 2);
        assert!(menu[0].starts_with("key=^first$"));
        assert!(menu[1].starts_with("key=^second$"));
    }

    #[test]
    fn test_rows_without_project_dropped() {
        let mut map = CriteriaMap::new();
        assert!(!map.add_row(&row("orphan", "")));
        assert!(map.is_empty());
    }

    #[test]
    fn test_empty_row_never_creates_project() {
        let mut map = CriteriaMap::new();
        let empty = RowCriteria::from_values(ExtractedValues::default());
        assert!(!map.add_row(&empty));
        assert!(map.get("").is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let rows = vec![row("same", "menu"), row("same", "menu")];
        let map = group_by_project(&rows);
        assert_eq!(map.get("menu").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_serializes_as_ordered_array() {
        let rows = vec![row("a", "menu"), row("b", "core")];
        let json = serde_json::to_value(group_by_project(&rows)).unwrap();

        assert_eq!(json[0]["project"], "menu");
        assert_eq!(json[1]["project"], "core");
        assert_eq!(json[1]["criteria"][0], "key=^b$,source=^b$,project=^core$");
    }
}
