#![allow(dead_code)]

use std::sync::Arc;
use wadm_definition_link::{DefinitionLinkQueryContext, RequestScope, Services};
use wadm_domain::config::DefinitionLinkConfig;
use wadm_domain::constants::{CONTROL_PANEL_WORKFLOW, NO_WORKFLOW_KEY, VERSION_X_KEY};
use wadm_domain::{
    CompanyId, DefinitionLink, GroupId, HandlerDescriptor, UserId, WorkflowDefinition,
};
use wadm_kernel::params::RequestParams;
use wadm_memory::MemoryAdapters;

pub const COMPANY: CompanyId = CompanyId(10_157);
pub const SITE: GroupId = GroupId(20_121);
pub const USER: UserId = UserId(20_105);

pub const BLOG: &str = "com.liferay.blogs.model.BlogsEntry";
pub const WIKI: &str = "com.liferay.wiki.model.WikiPage";
pub const DOCUMENT: &str = "com.liferay.document.library.kernel.model.DLFileEntry";

/// Blog Entry, Wiki Page and Document handlers; only Wiki Page is linked to Approval v2.
pub fn adapters() -> MemoryAdapters {
    let adapters = MemoryAdapters::default();

    for (class_name, label) in [(BLOG, "Blog Entry"), (WIKI, "Wiki Page"), (DOCUMENT, "Document")]
    {
        adapters.registry.register(Arc::new(HandlerDescriptor::new(class_name).scopeable(true)));
        adapters.resources.insert(class_name, label);
    }

    adapters.definitions.deploy(WorkflowDefinition::new(COMPANY, "Approval", 2));
    adapters.definitions.deploy(WorkflowDefinition::new(COMPANY, "Single Approver", 1));
    adapters.links.insert(link(GroupId::DEFAULT, WIKI, "Approval", 2));

    adapters.language.insert(NO_WORKFLOW_KEY, "no-workflow");
    adapters.language.insert(VERSION_X_KEY, "version {0}");

    adapters
}

pub fn link(group_id: GroupId, class_name: &str, name: &str, version: u32) -> DefinitionLink {
    DefinitionLink {
        company_id: COMPANY,
        group_id,
        class_name: class_name.to_owned(),
        class_pk: 0,
        type_pk: 0,
        workflow_definition_name: name.to_owned(),
        workflow_definition_version: version,
    }
}

pub fn services(adapters: &MemoryAdapters) -> Services<'_> {
    Services::builder()
        .registry(&adapters.registry)
        .links(&adapters.links)
        .definitions(&adapters.definitions)
        .resources(&adapters.resources)
        .language(&adapters.language)
        .preferences(&adapters.preferences)
        .build()
}

pub fn scope(surface: &str) -> RequestScope {
    RequestScope::builder()
        .company_id(COMPANY)
        .site_group_id(SITE)
        .user_id(USER)
        .surface_name(surface)
        .render_url("https://portal.test/group/control_panel/manage")
        .build()
}

pub fn context<'a>(
    adapters: &'a MemoryAdapters,
    surface: &str,
    query: &str,
) -> DefinitionLinkQueryContext<'a> {
    context_with(adapters, surface, query, DefinitionLinkConfig::default())
}

pub fn context_with<'a>(
    adapters: &'a MemoryAdapters,
    surface: &str,
    query: &str,
    config: DefinitionLinkConfig,
) -> DefinitionLinkQueryContext<'a> {
    DefinitionLinkQueryContext::new(
        services(adapters),
        scope(surface),
        RequestParams::from_query(query),
        config,
    )
}

pub fn global<'a>(adapters: &'a MemoryAdapters, query: &str) -> DefinitionLinkQueryContext<'a> {
    context(adapters, CONTROL_PANEL_WORKFLOW, query)
}
