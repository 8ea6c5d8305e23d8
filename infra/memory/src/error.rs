use std::borrow::Cow;
use wadm_kernel::format_context;

/// Errors raised while loading a [`crate::Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Catalog I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The catalog is not valid JSON or does not match the expected shape.
    #[error("Catalog parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl From<std::io::Error> for CatalogError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source, context: None }
    }
}

pub trait CatalogErrorExt<T> {
    /// # Errors
    /// Returns the failure converted into [`CatalogError`] with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError>;
}

impl<T> CatalogErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Io { source, context: Some(context.into()) })
    }
}

impl<T> CatalogErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Parse { source, context: Some(context.into()) })
    }
}
