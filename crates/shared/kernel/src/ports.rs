//! Collaborator ports consumed by the administration slices.
//!
//! Every trait is synchronous and `Send + Sync`: slices run request-scoped and call the
//! collaborators as plain blocking functions. Implementations live in the infra crates;
//! the `testing` feature generates `mockall` mocks (`MockHandlerRegistry`, ...).

use crate::error::PortError;
use std::fmt::Debug;
use std::sync::Arc;
use strum::{AsRefStr, Display};
use wadm_domain::{CompanyId, DefinitionLink, GroupId, HandlerDescriptor, UserId, WorkflowDefinition};

/// Capability set of a content type that can carry a workflow.
pub trait ContentTypeHandler: Debug + Send + Sync {
    /// Content type identifier (class name).
    fn class_name(&self) -> &str;

    /// Hidden handlers never appear in administration lists.
    fn is_visible(&self) -> bool;

    /// Scopeable handlers can be linked per site, the others only company-wide.
    fn is_scopeable(&self) -> bool;
}

impl ContentTypeHandler for HandlerDescriptor {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_scopeable(&self) -> bool {
        self.scopeable
    }
}

/// Registry of content-type handlers, in registration order.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait HandlerRegistry: Send + Sync {
    /// # Errors
    /// Propagates registry failures.
    fn handlers(&self) -> Result<Vec<Arc<dyn ContentTypeHandler>>, PortError>;

    /// # Errors
    /// Propagates registry failures.
    fn scopeable_handlers(&self) -> Result<Vec<Arc<dyn ContentTypeHandler>>, PortError>;
}

/// Persistence service for definition links.
///
/// A missing link is reported as [`PortError::NoSuchLink`].
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DefinitionLinkService: Send + Sync {
    /// Company-wide default link for a content type.
    ///
    /// # Errors
    /// [`PortError::NoSuchLink`] when absent, any other variant on failure.
    fn default_link(
        &self,
        company_id: CompanyId,
        class_name: &str,
        class_pk: i64,
        type_pk: i64,
    ) -> Result<DefinitionLink, PortError>;

    /// Link scoped to a group. A `strict` lookup never falls back to the company default.
    ///
    /// # Errors
    /// [`PortError::NoSuchLink`] when absent, any other variant on failure.
    fn link(
        &self,
        company_id: CompanyId,
        group_id: GroupId,
        class_name: &str,
        class_pk: i64,
        type_pk: i64,
        strict: bool,
    ) -> Result<DefinitionLink, PortError>;
}

/// Ordering of the active definition list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum DefinitionOrder {
    #[default]
    #[strum(serialize = "name-asc")]
    NameAsc,
    #[strum(serialize = "name-desc")]
    NameDesc,
}

/// Workflow engine view of deployed definitions.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait WorkflowDefinitionManager: Send + Sync {
    /// # Errors
    /// Propagates engine failures.
    fn active_definitions(
        &self,
        company_id: CompanyId,
        order: DefinitionOrder,
    ) -> Result<Vec<WorkflowDefinition>, PortError>;
}

/// Provider of human-readable content type names.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ResourceLabels: Send + Sync {
    /// # Errors
    /// Propagates provider failures.
    fn model_resource(&self, locale: &str, class_name: &str) -> Result<String, PortError>;
}

/// Localization bundle.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Language: Send + Sync {
    /// # Errors
    /// Propagates bundle failures.
    fn get(&self, locale: &str, key: &str) -> Result<String, PortError>;

    /// Formats the `key` template with positional `arguments` (`{0}`, `{1}`, ...).
    /// When `translate_arguments` is set, every argument is itself looked up first.
    ///
    /// # Errors
    /// Propagates bundle failures.
    fn format(
        &self,
        locale: &str,
        key: &str,
        arguments: &[String],
        translate_arguments: bool,
    ) -> Result<String, PortError>;
}

/// Per-user preference store, keyed by (user, namespace, key).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PortalPreferences: Send + Sync {
    /// # Errors
    /// Propagates store failures.
    fn value(&self, user_id: UserId, namespace: &str, key: &str)
    -> Result<Option<String>, PortError>;

    /// # Errors
    /// Propagates store failures.
    fn set_value(
        &self,
        user_id: UserId,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Result<(), PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_exposes_capabilities() {
        let handler: Arc<dyn ContentTypeHandler> =
            Arc::new(HandlerDescriptor::new("wiki.page").scopeable(true).visible(false));
        assert_eq!(handler.class_name(), "wiki.page");
        assert!(handler.is_scopeable());
        assert!(!handler.is_visible());
    }

    #[test]
    fn definition_order_names() {
        assert_eq!(DefinitionOrder::default(), DefinitionOrder::NameAsc);
        assert_eq!(DefinitionOrder::NameDesc.to_string(), "name-desc");
    }

    #[test]
    fn mocked_link_service_reports_absence() {
        let mut links = MockDefinitionLinkService::new();
        links
            .expect_default_link()
            .returning(|_, class_name, _, _| Err(PortError::no_such_link(class_name.to_owned())));

        let err = links.default_link(CompanyId(1), "blogs.entry", 0, 0).unwrap_err();
        assert!(err.is_no_such_link());
    }
}
