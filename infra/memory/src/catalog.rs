use crate::error::{CatalogError, CatalogErrorExt};
use crate::{
    InMemoryDefinitionManager, InMemoryHandlerRegistry, InMemoryLanguage, InMemoryLinkService,
    InMemoryPreferences, InMemoryResourceLabels,
};
use fxhash::FxHashMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use wadm_domain::{DefinitionLink, HandlerDescriptor, UserId, WorkflowDefinition};
use wadm_kernel::ports::PortalPreferences;

/// One remembered preference value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreference {
    pub user_id: UserId,
    pub namespace: String,
    pub key: String,
    pub value: String,
}

/// Seed data for the in-memory adapters, in JSON:
///
/// ```json
/// {
///   "handlers":    [{ "className": "wiki.page", "scopeable": true }],
///   "definitions": [{ "companyId": 1, "name": "Approval", "version": 2 }],
///   "links":       [{ "companyId": 1, "className": "wiki.page",
///                     "workflowDefinitionName": "Approval", "workflowDefinitionVersion": 2 }],
///   "resources":   { "wiki.page": "Wiki Page" },
///   "messages":    { "no-workflow": "No Workflow" },
///   "preferences": [{ "userId": 1, "namespace": "...", "key": "...", "value": "..." }]
/// }
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub handlers: Vec<HandlerDescriptor>,
    pub definitions: Vec<WorkflowDefinition>,
    pub links: Vec<DefinitionLink>,
    pub resources: FxHashMap<String, String>,
    pub messages: FxHashMap<String, String>,
    pub preferences: Vec<StoredPreference>,
}

/// One instance of every in-memory adapter.
#[derive(Debug, Default)]
pub struct MemoryAdapters {
    pub registry: InMemoryHandlerRegistry,
    pub links: InMemoryLinkService,
    pub definitions: InMemoryDefinitionManager,
    pub resources: InMemoryResourceLabels,
    pub language: InMemoryLanguage,
    pub preferences: InMemoryPreferences,
}

impl Catalog {
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the document does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Parse`] if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&raw)
            .context(format!("Failed to parse catalog {}", path.display()))?;

        info!(
            path = %path.display(),
            handlers = catalog.handlers.len(),
            definitions = catalog.definitions.len(),
            links = catalog.links.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Seeds a fresh set of adapters with this catalog.
    #[must_use]
    pub fn into_adapters(self) -> MemoryAdapters {
        let adapters = MemoryAdapters {
            resources: self.resources.into_iter().collect(),
            ..MemoryAdapters::default()
        };

        for handler in self.handlers {
            adapters.registry.register(Arc::new(handler));
        }
        for definition in self.definitions {
            adapters.definitions.deploy(definition);
        }
        for link in self.links {
            adapters.links.insert(link);
        }
        for (key, message) in self.messages {
            adapters.language.insert(key, message);
        }
        for pref in self.preferences {
            // In-memory writes cannot fail.
            let _ = adapters.preferences.set_value(pref.user_id, &pref.namespace, &pref.key, &pref.value);
        }

        adapters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wadm_kernel::ports::{HandlerRegistry, Language, ResourceLabels};

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.handlers.is_empty());
        assert!(catalog.links.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = Catalog::from_json(r#"{ "handlers": 3 }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn messages_override_built_ins() {
        let catalog =
            Catalog::from_json(r#"{ "messages": { "no-workflow": "Kein Workflow" } }"#).unwrap();
        let adapters = catalog.into_adapters();
        assert_eq!(adapters.language.get("de_DE", "no-workflow").unwrap(), "Kein Workflow");
        assert_eq!(
            adapters.language.format("de_DE", "version-x", &["1".to_owned()], false).unwrap(),
            "Version 1"
        );
    }

    #[test]
    fn seeds_every_adapter() {
        let catalog = Catalog::from_json(
            r#"{
                "handlers": [{ "className": "wiki.page", "scopeable": true }, { "className": "blogs.entry" }],
                "resources": { "wiki.page": "Wiki Page" },
                "preferences": [{ "userId": 3, "namespace": "ns", "key": "k", "value": "v" }]
            }"#,
        )
        .unwrap();
        let adapters = catalog.into_adapters();

        assert_eq!(adapters.registry.handlers().unwrap().len(), 2);
        assert_eq!(adapters.registry.scopeable_handlers().unwrap().len(), 1);
        assert_eq!(adapters.resources.model_resource("en_US", "wiki.page").unwrap(), "Wiki Page");
        assert_eq!(adapters.preferences.value(UserId(3), "ns", "k").unwrap().as_deref(), Some("v"));
    }
}
