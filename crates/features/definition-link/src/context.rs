use crate::comparator::OrderByComparator;
use crate::error::{DefinitionLinkError, DefinitionLinkErrorExt};
use crate::filter::{Combinator, EntryFilter};
use crate::label::{self, DefinitionLabels};
use crate::preferences::OrderPreference;
use crate::search::{PageWindow, QueryParameters, SearchTerms, SortDirection};
use serde::Serialize;
use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, trace};
use typed_builder::TypedBuilder;
use url::Url;
use wadm_domain::config::{DefinitionLinkConfig, SiteFallback};
use wadm_domain::constants::CONTROL_PANEL_WORKFLOW;
use wadm_domain::{CompanyId, DefinitionLink, GroupId, LinkEntry, UserId, WorkflowDefinition};
use wadm_kernel::html;
use wadm_kernel::params::RequestParams;
use wadm_kernel::ports::{
    ContentTypeHandler, DefinitionLinkService, DefinitionOrder, HandlerRegistry, Language,
    PortalPreferences, ResourceLabels, WorkflowDefinitionManager,
};

/// Links are always looked up for the content type as a whole.
const CLASS_PK: i64 = 0;
const TYPE_PK: i64 = 0;

/// Collaborators a query context calls into.
#[derive(Clone, Copy, TypedBuilder)]
pub struct Services<'a> {
    pub registry: &'a dyn HandlerRegistry,
    pub links: &'a dyn DefinitionLinkService,
    pub definitions: &'a dyn WorkflowDefinitionManager,
    pub resources: &'a dyn ResourceLabels,
    pub language: &'a dyn Language,
    pub preferences: &'a dyn PortalPreferences,
}

impl fmt::Debug for Services<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Ambient, read-only request information supplied by the hosting environment.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RequestScope {
    pub company_id: CompanyId,
    /// Site (or live) group of the current page.
    #[builder(default = GroupId::DEFAULT)]
    pub site_group_id: GroupId,
    pub user_id: UserId,
    /// Name of the rendering surface (portlet).
    #[builder(setter(into))]
    pub surface_name: String,
    #[builder(default = "en_US".to_owned(), setter(into))]
    pub locale: String,
    /// Render URL of the current surface, used as the base of page links.
    #[builder(setter(into))]
    pub render_url: String,
}

/// One page of the definition-link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPage {
    /// Number of entries that passed the filter, before pagination.
    pub total_count: usize,
    pub entries: Vec<LinkEntry>,
}

/// Request-scoped assembly of the workflow definition link list.
///
/// One instance serves exactly one request: ordering choices and the active
/// definition list are resolved once and cached for the lifetime of the instance.
pub struct DefinitionLinkQueryContext<'a> {
    services: Services<'a>,
    scope: RequestScope,
    params: RequestParams,
    config: DefinitionLinkConfig,
    order_by_col: OnceCell<String>,
    order_by_type: OnceCell<String>,
    active_definitions: OnceCell<Vec<WorkflowDefinition>>,
}

impl fmt::Debug for DefinitionLinkQueryContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionLinkQueryContext")
            .field("scope", &self.scope)
            .field("params", &self.params)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn memoized<T>(
    cell: &OnceCell<T>,
    init: impl FnOnce() -> Result<T, DefinitionLinkError>,
) -> Result<&T, DefinitionLinkError> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}

impl<'a> DefinitionLinkQueryContext<'a> {
    #[must_use]
    pub fn new(
        services: Services<'a>,
        scope: RequestScope,
        params: RequestParams,
        config: DefinitionLinkConfig,
    ) -> Self {
        Self {
            services,
            scope,
            params,
            config,
            order_by_col: OnceCell::new(),
            order_by_type: OnceCell::new(),
            active_definitions: OnceCell::new(),
        }
    }

    #[must_use]
    pub const fn scope(&self) -> &RequestScope {
        &self.scope
    }

    #[must_use]
    pub const fn params(&self) -> &RequestParams {
        &self.params
    }

    /// `true` when rendered by the global (control panel) administration surface.
    #[must_use]
    pub fn is_global_admin_view(&self) -> bool {
        self.scope.surface_name == CONTROL_PANEL_WORKFLOW
    }

    /// Group whose links are listed: the default scope globally, the site otherwise.
    #[must_use]
    pub fn scope_group_id(&self) -> GroupId {
        if self.is_global_admin_view() { GroupId::DEFAULT } else { self.scope.site_group_id }
    }

    /// Sort column for this request (request, then stored preference, then `resource`).
    ///
    /// # Errors
    /// Propagates preference store failures.
    pub fn order_by_col(&self) -> Result<&str, DefinitionLinkError> {
        memoized(&self.order_by_col, || self.resolve_order(OrderPreference::Column))
            .map(String::as_str)
    }

    /// Sort direction for this request (request, then stored preference, then `asc`).
    ///
    /// # Errors
    /// Propagates preference store failures.
    pub fn order_by_type(&self) -> Result<&str, DefinitionLinkError> {
        memoized(&self.order_by_type, || self.resolve_order(OrderPreference::Direction))
            .map(String::as_str)
    }

    fn resolve_order(&self, preference: OrderPreference) -> Result<String, DefinitionLinkError> {
        preference.resolve(&self.params, self.services.preferences, self.scope.user_id)
    }

    /// Parses search terms and pagination from the request and pairs them with the
    /// resolved ordering.
    ///
    /// # Errors
    /// Propagates preference store failures.
    pub fn query_parameters(&self) -> Result<QueryParameters, DefinitionLinkError> {
        Ok(QueryParameters::from_parts(
            SearchTerms::from_request(&self.params),
            self.order_by_col()?,
            SortDirection::from_param(self.order_by_type()?),
            PageWindow::from_request(&self.params, &self.config),
        ))
    }

    /// Page-navigation URL carrying `delta` and `keywords` forward.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::InvalidUrl`] for an unparsable render URL.
    pub fn portlet_url(&self) -> Result<Url, DefinitionLinkError> {
        crate::navigation::portlet_url(&self.scope.render_url, &self.params)
    }

    /// Active definitions of the company, ordered by name.
    ///
    /// # Errors
    /// Propagates workflow engine failures.
    pub fn active_definitions(&self) -> Result<&[WorkflowDefinition], DefinitionLinkError> {
        memoized(&self.active_definitions, || {
            self.services
                .definitions
                .active_definitions(self.scope.company_id, DefinitionOrder::NameAsc)
                .context("Failed to list active workflow definitions")
        })
        .map(Vec::as_slice)
    }

    fn labels(&self) -> DefinitionLabels<'_> {
        DefinitionLabels::new(self.services.language, &self.scope.locale)
    }

    /// Display label of a definition, e.g. `Approval (version 2)`.
    ///
    /// # Errors
    /// Propagates language bundle failures.
    pub fn definition_label(
        &self,
        definition: &WorkflowDefinition,
    ) -> Result<String, DefinitionLinkError> {
        self.labels().definition_label(definition)
    }

    /// Selector option value of a definition (`name@version`).
    #[must_use]
    pub fn definition_value(&self, definition: &WorkflowDefinition) -> String {
        label::definition_value(definition)
    }

    /// `true` when the current link of `class_name` points at `definition`.
    ///
    /// # Errors
    /// Propagates persistence failures other than a missing link.
    pub fn is_definition_selected(
        &self,
        definition: &WorkflowDefinition,
        class_name: &str,
    ) -> Result<bool, DefinitionLinkError> {
        Ok(self.current_link(class_name)?.is_some_and(|link| definition.is_linked_by(&link)))
    }

    /// Visible handlers for this view, in registry order. Site views only list
    /// scopeable handlers.
    ///
    /// # Errors
    /// Propagates registry failures.
    pub fn content_type_handlers(
        &self,
    ) -> Result<Vec<Arc<dyn ContentTypeHandler>>, DefinitionLinkError> {
        let handlers = if self.is_global_admin_view() {
            self.services.registry.handlers()
        } else {
            self.services.registry.scopeable_handlers()
        }
        .context("Failed to list content type handlers")?;

        Ok(handlers.into_iter().filter(|handler| handler.is_visible()).collect())
    }

    /// Link currently in effect for `class_name`, or `None` when there is none.
    ///
    /// # Errors
    /// Propagates persistence failures other than a missing link.
    pub fn current_link(
        &self,
        class_name: &str,
    ) -> Result<Option<DefinitionLink>, DefinitionLinkError> {
        let links = self.services.links;
        let company_id = self.scope.company_id;

        let result = if self.is_global_admin_view() {
            links.default_link(company_id, class_name, CLASS_PK, TYPE_PK)
        } else {
            links.link(
                company_id,
                self.scope_group_id(),
                class_name,
                CLASS_PK,
                TYPE_PK,
                self.config.strict_site_lookup,
            )
        };

        match result {
            Ok(link) => Ok(Some(link)),
            Err(err) if err.is_no_such_link() => {
                debug!(class_name, error = %err, "No workflow definition link");
                Ok(None)
            },
            Err(err) => Err(err).context(format!("Failed to look up link for {class_name}")),
        }
    }

    /// Workflow label of one content type: the linked definition or a placeholder.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::DefinitionNotFound`] when the link points at a
    /// definition that is not active, and propagates collaborator failures.
    pub fn workflow_label(&self, class_name: &str) -> Result<String, DefinitionLinkError> {
        let Some(link) = self.current_link(class_name)? else {
            return self.unlinked_label(class_name);
        };

        let definition = self
            .active_definitions()?
            .iter()
            .find(|definition| definition.is_linked_by(&link))
            .ok_or_else(|| DefinitionLinkError::DefinitionNotFound {
                message: format!(
                    "{}@{}",
                    link.workflow_definition_name, link.workflow_definition_version
                )
                .into(),
                context: Some(format!("linked from {class_name}").into()),
            })?;

        self.labels().definition_label(definition)
    }

    fn unlinked_label(&self, class_name: &str) -> Result<String, DefinitionLinkError> {
        if self.is_global_admin_view() || self.config.site_fallback != SiteFallback::CompanyDefault
        {
            return self.labels().placeholder();
        }

        match self.services.links.default_link(self.scope.company_id, class_name, CLASS_PK, TYPE_PK)
        {
            Ok(link) => Ok(html::escape(&link.workflow_definition_name)),
            Err(err) if err.is_no_such_link() => {
                debug!(class_name, error = %err, "No company default workflow definition link");
                self.labels().placeholder()
            },
            Err(err) => Err(err).context(format!("Failed to look up default link for {class_name}")),
        }
    }

    /// One entry per visible handler, in handler order. The first failure aborts.
    ///
    /// # Errors
    /// Propagates any label resolution failure.
    pub fn build_entries(&self) -> Result<Vec<LinkEntry>, DefinitionLinkError> {
        self.content_type_handlers()?
            .iter()
            .map(|handler| {
                let class_name = handler.class_name();
                let resource = self
                    .services
                    .resources
                    .model_resource(&self.scope.locale, class_name)
                    .context(format!("Failed to resolve resource label for {class_name}"))?;
                let workflow_label = self.workflow_label(class_name)?;

                trace!(class_name, %resource, %workflow_label, "Built definition link entry");
                Ok(LinkEntry::new(class_name, resource, workflow_label))
            })
            .collect()
    }

    /// Applies the basic or advanced search predicate of `params`.
    #[must_use]
    pub fn filter_entries(
        &self,
        entries: Vec<LinkEntry>,
        params: &QueryParameters,
    ) -> Vec<LinkEntry> {
        let (resource, workflow, and_operator) = params.effective_filters();
        EntryFilter::new(resource, workflow, Combinator::from_and_operator(and_operator))
            .apply(entries)
    }

    /// Sorts with the requested comparator and cuts out the requested page.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::UnrecognizedSortColumn`] for unknown columns.
    pub fn sort_and_paginate(
        &self,
        entries: Vec<LinkEntry>,
        params: &QueryParameters,
    ) -> Result<Vec<LinkEntry>, DefinitionLinkError> {
        let comparator = OrderByComparator::new(&params.sort_column, params.sort_direction)?;
        Ok(sort_and_slice(entries, &comparator, params.window()))
    }

    /// Builds, filters, counts, sorts and paginates the link list.
    ///
    /// The comparator is selected before any collaborator is called, so an unknown
    /// sort column fails without side effects.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::UnrecognizedSortColumn`] for unknown columns and
    /// propagates every collaborator failure except a missing link.
    #[instrument(
        skip_all,
        fields(
            company = %self.scope.company_id,
            group = %self.scope_group_id(),
            surface = %self.scope.surface_name,
        )
    )]
    pub fn query(&self, params: &QueryParameters) -> Result<LinkPage, DefinitionLinkError> {
        let comparator = OrderByComparator::new(&params.sort_column, params.sort_direction)?;

        let entries = self.build_entries()?;
        let built = entries.len();
        let entries = self.filter_entries(entries, params);
        let total_count = entries.len();
        let entries = sort_and_slice(entries, &comparator, params.window());

        debug!(built, total_count, page = entries.len(), "Definition link page assembled");

        Ok(LinkPage { total_count, entries })
    }

    /// [`Self::query`] with the parameters of the current request.
    ///
    /// # Errors
    /// See [`Self::query_parameters`] and [`Self::query`].
    pub fn search(&self) -> Result<LinkPage, DefinitionLinkError> {
        let params = self.query_parameters()?;
        self.query(&params)
    }
}

fn sort_and_slice(
    mut entries: Vec<LinkEntry>,
    comparator: &OrderByComparator,
    window: PageWindow,
) -> Vec<LinkEntry> {
    comparator.sort(&mut entries);

    let end = window.end.min(entries.len());
    let start = window.start.min(end);
    entries.truncate(end);
    entries.drain(..start);
    entries
}
