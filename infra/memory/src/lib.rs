//! # In-memory adapters
//!
//! Thread-safe, process-local implementations of every collaborator port in
//! [`wadm_kernel::ports`], plus a JSON [`Catalog`] to seed them.
//!
//! ## Overview
//!
//! Each adapter keeps its state behind a `parking_lot::RwLock` (with `FxHashMap` for keyed
//! stores), so one set of adapters can be shared across request threads. They back the
//! shell application and the integration tests.
//!
//! # Example
//!
//! ```rust
//! use wadm_kernel::ports::DefinitionLinkService;
//! use wadm_memory::Catalog;
//!
//! let catalog = Catalog::from_json(r#"{
//!     "links": [{
//!         "companyId": 1,
//!         "className": "wiki.page",
//!         "workflowDefinitionName": "Approval",
//!         "workflowDefinitionVersion": 2
//!     }]
//! }"#).unwrap();
//!
//! let adapters = catalog.into_adapters();
//! let link = adapters.links.default_link(1.into(), "wiki.page", 0, 0).unwrap();
//! assert_eq!(link.workflow_definition_name, "Approval");
//! ```

mod catalog;
mod definitions;
mod error;
mod handlers;
mod language;
mod links;
mod preferences;
mod resources;

pub use crate::catalog::{Catalog, MemoryAdapters, StoredPreference};
pub use crate::definitions::InMemoryDefinitionManager;
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::handlers::InMemoryHandlerRegistry;
pub use crate::language::InMemoryLanguage;
pub use crate::links::InMemoryLinkService;
pub use crate::preferences::InMemoryPreferences;
pub use crate::resources::InMemoryResourceLabels;
