//! Workflow definition link administration slice.
//!
//! Lists the content types that can carry a workflow together with the workflow
//! definition currently linked to each of them, either company-wide (control panel) or
//! for a single site (site administration). The list is filtered by keyword or
//! per-field search, sorted by resource or workflow label and cut into pages.
//!
//! Everything is request-scoped: build one [`DefinitionLinkQueryContext`] per request
//! from the request [`RequestScope`], its parameters and the collaborator
//! [`Services`], then call [`DefinitionLinkQueryContext::search`].

mod comparator;
mod context;
mod error;
mod filter;
mod label;
mod navigation;
mod preferences;
mod search;

pub use crate::comparator::{OrderByComparator, SortColumn};
pub use crate::context::{DefinitionLinkQueryContext, LinkPage, RequestScope, Services};
pub use crate::error::{DefinitionLinkError, DefinitionLinkErrorExt};
pub use crate::filter::{Combinator, EntryFilter};
pub use crate::label::{DefinitionLabels, definition_value};
pub use crate::navigation::{PARAM_MVC_PATH, PARAM_TABS, portlet_url};
pub use crate::preferences::OrderPreference;
pub use crate::search::{
    PARAM_ADVANCED_SEARCH, PARAM_AND_OPERATOR, PARAM_CUR, PARAM_DELTA, PARAM_KEYWORDS,
    PARAM_ORDER_BY_COL, PARAM_ORDER_BY_TYPE, PARAM_RESOURCE, PARAM_SAVE_ORDER_BY,
    PARAM_WORKFLOW, PageWindow, QueryParameters, SearchTerms, SortDirection,
};
