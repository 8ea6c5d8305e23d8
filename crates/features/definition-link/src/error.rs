use std::borrow::Cow;
use wadm_kernel::{PortError, format_context};

/// A specialized [`DefinitionLinkError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionLinkError {
    /// `orderByCol` named a column no comparator exists for.
    #[error("Unrecognized sort column{}: {message}", format_context(.context))]
    UnrecognizedSortColumn { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A link points at a definition that is not among the active definitions.
    #[error("Linked workflow definition not found{}: {message}", format_context(.context))]
    DefinitionNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failure reported by a collaborator (registry, persistence, localization, preferences).
    #[error("Upstream failure{}: {source}", format_context(.context))]
    Upstream { source: PortError, context: Option<Cow<'static, str>> },

    /// The page URL could not be assembled.
    #[error("Invalid page URL{}: {source}", format_context(.context))]
    InvalidUrl { source: url::ParseError, context: Option<Cow<'static, str>> },
}

impl DefinitionLinkError {
    /// Returns the collaborator error when this is an upstream failure.
    #[must_use]
    pub const fn port_error(&self) -> Option<&PortError> {
        match self {
            Self::Upstream { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PortError> for DefinitionLinkError {
    #[inline]
    fn from(source: PortError) -> Self {
        Self::Upstream { source, context: None }
    }
}

impl From<url::ParseError> for DefinitionLinkError {
    #[inline]
    fn from(source: url::ParseError) -> Self {
        Self::InvalidUrl { source, context: None }
    }
}

/// `.context(..)` for results of this crate and of the collaborators it calls.
pub trait DefinitionLinkErrorExt<T> {
    /// # Errors
    /// Returns the failure converted into [`DefinitionLinkError`] with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DefinitionLinkError>;
}

impl<T> DefinitionLinkErrorExt<T> for Result<T, DefinitionLinkError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                DefinitionLinkError::UnrecognizedSortColumn { context: c, .. }
                | DefinitionLinkError::DefinitionNotFound { context: c, .. }
                | DefinitionLinkError::Upstream { context: c, .. }
                | DefinitionLinkError::InvalidUrl { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> DefinitionLinkErrorExt<T> for Result<T, PortError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DefinitionLinkError> {
        self.map_err(|source| DefinitionLinkError::Upstream {
            source,
            context: Some(context.into()),
        })
    }
}

impl<T> DefinitionLinkErrorExt<T> for Result<T, url::ParseError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DefinitionLinkError> {
        self.map_err(|source| DefinitionLinkError::InvalidUrl {
            source,
            context: Some(context.into()),
        })
    }
}
