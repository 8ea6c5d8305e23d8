use crate::error::{DefinitionLinkError, DefinitionLinkErrorExt};
use wadm_domain::WorkflowDefinition;
use wadm_domain::constants::{NO_WORKFLOW_KEY, VERSION_X_KEY};
use wadm_kernel::html;
use wadm_kernel::ports::Language;

/// Localized labels for workflow definitions in one locale.
#[derive(Clone, Copy)]
pub struct DefinitionLabels<'a> {
    language: &'a dyn Language,
    locale: &'a str,
}

impl std::fmt::Debug for DefinitionLabels<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionLabels").field("locale", &self.locale).finish_non_exhaustive()
    }
}

impl<'a> DefinitionLabels<'a> {
    #[must_use]
    pub fn new(language: &'a dyn Language, locale: &'a str) -> Self {
        Self { language, locale }
    }

    /// The "no workflow" placeholder.
    ///
    /// # Errors
    /// Propagates language bundle failures.
    pub fn placeholder(&self) -> Result<String, DefinitionLinkError> {
        self.language.get(self.locale, NO_WORKFLOW_KEY).context("Failed to localize placeholder")
    }

    /// `"<escaped name> (<localized version>)"`, e.g. `Approval (version 2)`.
    ///
    /// # Errors
    /// Propagates language bundle failures.
    pub fn definition_label(
        &self,
        definition: &WorkflowDefinition,
    ) -> Result<String, DefinitionLinkError> {
        let version = self
            .language
            .format(self.locale, VERSION_X_KEY, &[definition.version.to_string()], false)
            .context("Failed to localize definition version")?;

        Ok(format!("{} ({version})", html::escape(&definition.name)))
    }
}

/// Option value identifying a definition version in the selector: `name@version`.
#[must_use]
pub fn definition_value(definition: &WorkflowDefinition) -> String {
    format!("{}@{}", html::escape_attribute(&definition.name), definition.version)
}
