//! Comparator selection for the `orderByCol` / `orderByType` pair.

use crate::error::DefinitionLinkError;
use crate::search::SortDirection;
use std::cmp::Ordering;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantNames};
use wadm_domain::LinkEntry;

/// Columns the definition-link list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum SortColumn {
    /// Localized content type name.
    Resource,
    /// Linked workflow label.
    Workflow,
}

impl SortColumn {
    /// Parses a column name, rejecting anything outside the closed set.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::UnrecognizedSortColumn`] for unknown names.
    pub fn parse(column: &str) -> Result<Self, DefinitionLinkError> {
        Self::from_str(column).map_err(|_| DefinitionLinkError::UnrecognizedSortColumn {
            message: column.to_owned().into(),
            context: Some(format!("expected one of {}", Self::VARIANTS.join(", ")).into()),
        })
    }

    fn key(self, entry: &LinkEntry) -> &str {
        match self {
            Self::Resource => &entry.resource,
            Self::Workflow => &entry.workflow_label,
        }
    }
}

/// Orders link entries by one column in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderByComparator {
    column: SortColumn,
    direction: SortDirection,
}

impl OrderByComparator {
    /// Selects the comparator for a requested column and direction.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::UnrecognizedSortColumn`] for unknown columns.
    pub fn new(column: &str, direction: SortDirection) -> Result<Self, DefinitionLinkError> {
        Ok(Self { column: SortColumn::parse(column)?, direction })
    }

    #[must_use]
    pub const fn column(&self) -> SortColumn {
        self.column
    }

    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    #[must_use]
    pub fn compare(&self, a: &LinkEntry, b: &LinkEntry) -> Ordering {
        let ordering = self.column.key(a).cmp(self.column.key(b));
        if self.direction.is_ascending() { ordering } else { ordering.reverse() }
    }

    /// Stable in-place sort: entries comparing equal keep their relative order.
    pub fn sort(&self, entries: &mut [LinkEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<LinkEntry> {
        vec![
            LinkEntry::new("a", "Blog Entry", "no-workflow"),
            LinkEntry::new("b", "Wiki Page", "Approval (version 2)"),
            LinkEntry::new("c", "Document", "no-workflow"),
        ]
    }

    fn classes(entries: &[LinkEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.class_name.as_str()).collect()
    }

    #[test]
    fn parses_known_columns() {
        assert_eq!(SortColumn::parse("resource").unwrap(), SortColumn::Resource);
        assert_eq!(SortColumn::parse("workflow").unwrap(), SortColumn::Workflow);
        assert_eq!(SortColumn::Workflow.as_ref(), "workflow");
    }

    #[test]
    fn rejects_unknown_columns() {
        let err = SortColumn::parse("bogus").unwrap_err();
        assert!(matches!(err, DefinitionLinkError::UnrecognizedSortColumn { .. }));
        assert_eq!(
            err.to_string(),
            "Unrecognized sort column (expected one of resource, workflow): bogus"
        );
    }

    #[test]
    fn sorts_by_resource_both_ways() {
        let mut list = entries();
        OrderByComparator::new("resource", SortDirection::Asc).unwrap().sort(&mut list);
        assert_eq!(classes(&list), ["a", "c", "b"]);

        OrderByComparator::new("resource", SortDirection::Desc).unwrap().sort(&mut list);
        assert_eq!(classes(&list), ["b", "c", "a"]);
    }

    #[test]
    fn workflow_sort_is_stable_for_ties() {
        let mut list = entries();
        OrderByComparator::new("workflow", SortDirection::Asc).unwrap().sort(&mut list);
        assert_eq!(classes(&list), ["b", "a", "c"]);

        let mut list = entries();
        OrderByComparator::new("workflow", SortDirection::Desc).unwrap().sort(&mut list);
        assert_eq!(classes(&list), ["a", "c", "b"]);
    }
}
