use std::borrow::Cow;

/// Renders an optional error context as ` (context)` for error messages.
#[must_use]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Failures reported by external collaborators (registry, persistence, localization,
/// preference storage).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The persistence service holds no definition link for the requested key.
    #[error("No such definition link{}: {message}", format_context(.context))]
    NoSuchLink { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The collaborator could not serve the call (backend down, store poisoned, ...).
    #[error("Collaborator unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PortError {
    pub fn no_such_link(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NoSuchLink { message: message.into(), context: None }
    }

    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn is_no_such_link(&self) -> bool {
        matches!(self, Self::NoSuchLink { .. })
    }

    const fn context_mut(&mut self) -> &mut Option<Cow<'static, str>> {
        match self {
            Self::NoSuchLink { context, .. } | Self::Unavailable { context, .. } => context,
        }
    }
}

/// Attaches a human-readable context to a failed port call.
pub trait PortErrorExt<T> {
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PortError>;
}

impl<T> PortErrorExt<T> for Result<T, PortError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            *e.context_mut() = Some(context.into());
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_when_present() {
        let err: Result<(), PortError> = Err(PortError::unavailable("link store offline"));
        let err = err.context("Failed to read link").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Collaborator unavailable (Failed to read link): link store offline"
        );
    }

    #[test]
    fn display_without_context() {
        let err = PortError::no_such_link("blogs.entry");
        assert_eq!(err.to_string(), "No such definition link: blogs.entry");
        assert!(err.is_no_such_link());
    }

    #[test]
    fn context_keeps_the_variant() {
        let err: Result<(), PortError> = Err(PortError::no_such_link("wiki.page"));
        let err = err.context("no company default").unwrap_err();
        assert!(err.is_no_such_link());
        assert_eq!(err.to_string(), "No such definition link (no company default): wiki.page");
    }
}
