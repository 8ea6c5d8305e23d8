//! Resource / workflow predicates over link entries.

use wadm_domain::LinkEntry;
use wadm_kernel::params::is_null;

/// How the resource and workflow predicates combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    #[must_use]
    pub const fn from_and_operator(and_operator: bool) -> Self {
        if and_operator { Self::And } else { Self::Or }
    }
}

/// Case-insensitive substring match on one field. An empty needle matches nothing;
/// [`EntryFilter`] decides what a missing term means for the combination.
#[derive(Debug, Clone)]
struct FieldPredicate {
    needle: Option<String>,
}

impl FieldPredicate {
    fn new(term: Option<&str>) -> Self {
        Self { needle: term.filter(|t| !is_null(t)).map(|t| t.trim().to_lowercase()) }
    }

    fn matches(&self, haystack: &str) -> Option<bool> {
        self.needle.as_deref().map(|needle| haystack.to_lowercase().contains(needle))
    }
}

/// Aggregate predicate: `resource ⊕ workflow` with ⊕ being AND or OR.
///
/// A missing term is neutral: it matches everything under AND and nothing under OR.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    resource: FieldPredicate,
    workflow: FieldPredicate,
    combinator: Combinator,
}

impl EntryFilter {
    #[must_use]
    pub fn new(resource: Option<&str>, workflow: Option<&str>, combinator: Combinator) -> Self {
        Self {
            resource: FieldPredicate::new(resource),
            workflow: FieldPredicate::new(workflow),
            combinator,
        }
    }

    /// `true` when neither term is set and filtering would be the identity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.resource.needle.is_none() && self.workflow.needle.is_none()
    }

    #[must_use]
    pub fn matches(&self, entry: &LinkEntry) -> bool {
        let resource = self.resource.matches(&entry.resource);
        let workflow = self.workflow.matches(&entry.workflow_label);

        match self.combinator {
            Combinator::And => resource.unwrap_or(true) && workflow.unwrap_or(true),
            Combinator::Or => resource.unwrap_or(false) || workflow.unwrap_or(false),
        }
    }

    /// Keeps matching entries in order. The identity filter returns the input untouched.
    #[must_use]
    pub fn apply(&self, entries: Vec<LinkEntry>) -> Vec<LinkEntry> {
        if self.is_empty() {
            return entries;
        }
        entries.into_iter().filter(|entry| self.matches(entry)).collect()
    }
}
