//! Search, sort and pagination parameters of a definition-link listing.

use strum::{AsRefStr, Display};
use typed_builder::TypedBuilder;
use wadm_domain::config::DefinitionLinkConfig;
use wadm_domain::constants::{DEFAULT_ORDER_BY_COL, DEFAULT_ORDER_BY_TYPE};
use wadm_kernel::params::RequestParams;

pub const PARAM_KEYWORDS: &str = "keywords";
pub const PARAM_ADVANCED_SEARCH: &str = "advancedSearch";
pub const PARAM_RESOURCE: &str = "resource";
pub const PARAM_WORKFLOW: &str = "workflow";
pub const PARAM_AND_OPERATOR: &str = "andOperator";
pub const PARAM_CUR: &str = "cur";
pub const PARAM_DELTA: &str = "delta";
pub const PARAM_ORDER_BY_COL: &str = "orderByCol";
pub const PARAM_ORDER_BY_TYPE: &str = "orderByType";
pub const PARAM_SAVE_ORDER_BY: &str = "saveOrderBy";

/// Sort direction. `asc` (any case) is ascending; every other value sorts descending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("asc") { Self::Asc } else { Self::Desc }
    }

    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

/// Keyword or per-field search terms read from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    pub keywords: Option<String>,
    pub resource: Option<String>,
    pub workflow: Option<String>,
    pub and_operator: bool,
    pub advanced_search: bool,
}

impl SearchTerms {
    #[must_use]
    pub fn from_request(params: &RequestParams) -> Self {
        Self {
            keywords: params.get_non_null(PARAM_KEYWORDS),
            resource: params.get_non_null(PARAM_RESOURCE),
            workflow: params.get_non_null(PARAM_WORKFLOW),
            and_operator: params.get_bool(PARAM_AND_OPERATOR, true),
            advanced_search: params.get_bool(PARAM_ADVANCED_SEARCH, false),
        }
    }
}

/// Half-open `[start, end)` window over the sorted entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Computes the window from the 1-based `cur` page and the `delta` page size.
    ///
    /// A missing or non-positive `delta` uses the configured default; larger values are
    /// capped at `max_delta`. A `cur` below one reads as the first page.
    #[must_use]
    pub fn from_request(params: &RequestParams, config: &DefinitionLinkConfig) -> Self {
        let default_delta = i64::from(config.default_delta.max(1));
        let max_delta = i64::from(config.max_delta.max(1));

        let delta = match params.get_int(PARAM_DELTA, default_delta) {
            d if d <= 0 => default_delta,
            d => d.min(max_delta),
        };
        let cur = params.get_int(PARAM_CUR, 1).max(1);

        let delta = usize::try_from(delta).unwrap_or(usize::MAX);
        let page = usize::try_from(cur - 1).unwrap_or(usize::MAX);
        let start = page.saturating_mul(delta);

        Self { start, end: start.saturating_add(delta) }
    }

    /// Number of entries this window yields out of `total`.
    #[must_use]
    pub fn len_within(self, total: usize) -> usize {
        self.end.min(total).saturating_sub(self.start.min(total))
    }
}

/// Everything one listing query needs.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct QueryParameters {
    #[builder(default, setter(strip_option, into))]
    pub keywords: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub resource_filter: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub workflow_filter: Option<String>,
    #[builder(default = true)]
    pub and_operator: bool,
    #[builder(default = DEFAULT_ORDER_BY_COL.to_owned(), setter(into))]
    pub sort_column: String,
    #[builder(default = SortDirection::from_param(DEFAULT_ORDER_BY_TYPE))]
    pub sort_direction: SortDirection,
    #[builder(default = 0)]
    pub page_start: usize,
    #[builder(default = 20)]
    pub page_end: usize,
    #[builder(default = false)]
    pub advanced_search: bool,
}

impl QueryParameters {
    /// Assembles the parameters from parsed search terms, a resolved order and a window.
    #[must_use]
    pub fn from_parts(
        terms: SearchTerms,
        sort_column: impl Into<String>,
        sort_direction: SortDirection,
        window: PageWindow,
    ) -> Self {
        Self {
            keywords: terms.keywords,
            resource_filter: terms.resource,
            workflow_filter: terms.workflow,
            and_operator: terms.and_operator,
            sort_column: sort_column.into(),
            sort_direction,
            page_start: window.start,
            page_end: window.end,
            advanced_search: terms.advanced_search,
        }
    }

    /// Resource filter, workflow filter and AND-combination actually applied.
    ///
    /// Basic search matches the keywords against either field.
    #[must_use]
    pub fn effective_filters(&self) -> (Option<&str>, Option<&str>, bool) {
        if self.advanced_search {
            (self.resource_filter.as_deref(), self.workflow_filter.as_deref(), self.and_operator)
        } else {
            (self.keywords.as_deref(), self.keywords.as_deref(), false)
        }
    }

    #[must_use]
    pub const fn window(&self) -> PageWindow {
        PageWindow { start: self.page_start, end: self.page_end }
    }
}
