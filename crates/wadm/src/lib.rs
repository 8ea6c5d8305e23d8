//! Facade crate for the workflow administration slices and shared modules.
//! Re-exports domain/kernel primitives, the slices and the in-memory adapters.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use wadm::definition_link::{DefinitionLinkQueryContext, RequestScope};
//! use wadm::domain::config::DefinitionLinkConfig;
//! use wadm::domain::constants::CONTROL_PANEL_WORKFLOW;
//! use wadm::kernel::params::RequestParams;
//! use wadm::memory::Catalog;
//!
//! let adapters = Catalog::from_json(r#"{ "handlers": [{ "className": "wiki.page" }] }"#)
//!     .unwrap()
//!     .into_adapters();
//! let scope = RequestScope::builder()
//!     .company_id(1.into())
//!     .user_id(1.into())
//!     .surface_name(CONTROL_PANEL_WORKFLOW)
//!     .render_url("http://localhost/manage")
//!     .build();
//!
//! let ctx = DefinitionLinkQueryContext::new(
//!     wadm::memory_services(&adapters),
//!     scope,
//!     RequestParams::new(),
//!     DefinitionLinkConfig::default(),
//! );
//! assert_eq!(ctx.search().unwrap().total_count, 1);
//! ```

pub use wadm_definition_link as definition_link;
pub use wadm_domain as domain;
pub use wadm_kernel as kernel;
pub use wadm_memory as memory;

use wadm_definition_link::Services;
use wadm_memory::MemoryAdapters;

/// Wires every port of the definition-link slice to one set of in-memory adapters.
#[must_use]
pub fn memory_services(adapters: &MemoryAdapters) -> Services<'_> {
    Services::builder()
        .registry(&adapters.registry)
        .links(&adapters.links)
        .definitions(&adapters.definitions)
        .resources(&adapters.resources)
        .language(&adapters.language)
        .preferences(&adapters.preferences)
        .build()
}

