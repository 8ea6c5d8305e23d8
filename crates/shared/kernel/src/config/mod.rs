use crate::error::format_context;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Name of the settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "wadm";

/// Prefix of environment overrides (`WADM__DEFINITION_LINK__DEFAULT_DELTA=50`).
pub const ENV_PREFIX: &str = "WADM";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

trait ConfigResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: &'static str) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// Loads a configuration structure from a settings file plus environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Settings file**: the given path (required), or `wadm.{toml,yaml,json}` in the
///    working directory when `path` is `None` (optional; defaults apply when missing).
/// 2. **Environment**: variables prefixed with `WADM__`; nested keys are separated by
///    double underscores (`WADM__LOGGER__LEVEL` maps to `logger.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a value cannot be
/// parsed, or the merged tree does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use wadm_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     catalog: Option<String>,
/// }
///
/// let cfg: ShellConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert!(cfg.catalog.is_none());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => File::from(p.as_ref()).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
    );

    match &path {
        Some(p) => info!("Loading config from {}", p.as_ref().display()),
        None => info!("Loading config from ./{DEFAULT_CONFIG_NAME} (optional)"),
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
