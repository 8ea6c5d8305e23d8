use crate::ids::{CompanyId, GroupId};
use serde::{Deserialize, Serialize};

/// A deployed workflow definition as reported by the workflow engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub company_id: CompanyId,
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

const fn active_by_default() -> bool {
    true
}

impl WorkflowDefinition {
    pub fn new(company_id: CompanyId, name: impl Into<String>, version: u32) -> Self {
        Self { company_id, name: name.into(), version, title: None, active: true }
    }

    /// Returns `true` when this definition is the one a link points at.
    #[must_use]
    pub fn is_linked_by(&self, link: &DefinitionLink) -> bool {
        self.name == link.workflow_definition_name
            && self.version == link.workflow_definition_version
    }
}

/// Persisted association between a content type and a workflow definition version.
///
/// `group_id` is [`GroupId::DEFAULT`] for company-wide (default) links. `class_pk` and
/// `type_pk` narrow a link to a single entity or subtype; the administration list
/// always queries with both set to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionLink {
    pub company_id: CompanyId,
    #[serde(default = "default_group")]
    pub group_id: GroupId,
    pub class_name: String,
    #[serde(default)]
    pub class_pk: i64,
    #[serde(default)]
    pub type_pk: i64,
    pub workflow_definition_name: String,
    pub workflow_definition_version: u32,
}

const fn default_group() -> GroupId {
    GroupId::DEFAULT
}

/// Registry-provided description of a content type that can carry a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerDescriptor {
    pub class_name: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default)]
    pub scopeable: bool,
}

const fn visible_by_default() -> bool {
    true
}

impl HandlerDescriptor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), visible: true, scopeable: false }
    }

    #[must_use]
    pub const fn scopeable(mut self, scopeable: bool) -> Self {
        self.scopeable = scopeable;
        self
    }

    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// One row of the definition-link administration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    /// Content type identifier.
    pub class_name: String,
    /// Localized, human-readable content type name.
    pub resource: String,
    /// Linked definition label or the localized "no workflow" placeholder.
    pub workflow_label: String,
}

impl LinkEntry {
    pub fn new(
        class_name: impl Into<String>,
        resource: impl Into<String>,
        workflow_label: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            resource: resource.into(),
            workflow_label: workflow_label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn definition_matches_link_on_name_and_version() {
        let definition = WorkflowDefinition::new(CompanyId(1), "Approval", 2);
        let mut link = DefinitionLink {
            company_id: CompanyId(1),
            group_id: GroupId::DEFAULT,
            class_name: "wiki.page".to_owned(),
            class_pk: 0,
            type_pk: 0,
            workflow_definition_name: "Approval".to_owned(),
            workflow_definition_version: 2,
        };
        assert!(definition.is_linked_by(&link));

        link.workflow_definition_version = 1;
        assert!(!definition.is_linked_by(&link));
    }

    #[test]
    fn link_deserializes_with_defaults() {
        let link: DefinitionLink = serde_json::from_value(json!({
            "companyId": 7,
            "className": "blogs.entry",
            "workflowDefinitionName": "Single Approver",
            "workflowDefinitionVersion": 1
        }))
        .expect("link deserialize");

        assert_eq!(link.group_id, GroupId::DEFAULT);
        assert_eq!(link.class_pk, 0);
        assert_eq!(link.type_pk, 0);
    }

    #[test]
    fn handler_descriptor_defaults_to_visible_and_unscoped() {
        let handler: HandlerDescriptor =
            serde_json::from_value(json!({ "className": "document" })).expect("handler");
        assert!(handler.visible);
        assert!(!handler.scopeable);
    }
}
