//! # Logger
//!
//! Process-wide `tracing` setup for the workflow administration tools.
//!
//! Console output goes to **stderr** so that command output on stdout stays clean.
//! An optional rolling file layer writes through a non-blocking worker, in plain text
//! or JSON. Filtering combines a default level with `RUST_LOG` or an explicit
//! env-filter directive string.
//!
//! Settings usually come from the `[logger]` section of the application config
//! ([`LogSettings`]) and can be adjusted on the [`LoggerBuilder`] afterwards.
//!
//! ## Example
//!
//! ```rust
//! use wadm_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("wadm")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// How often the log file rolls over.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RotationPolicy {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl From<RotationPolicy> for Rotation {
    fn from(policy: RotationPolicy) -> Self {
        match policy {
            RotationPolicy::Minutely => Self::MINUTELY,
            RotationPolicy::Hourly => Self::HOURLY,
            RotationPolicy::Daily => Self::DAILY,
            RotationPolicy::Never => Self::NEVER,
        }
    }
}

/// Deserializable logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Human-readable output on stderr.
    pub console: bool,
    /// Default level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra env-filter directives, e.g. `wadm_definition_link=trace`.
    pub env_filter: Option<String>,
    /// Directory for rolling log files. No file output when absent.
    pub path: Option<PathBuf>,
    /// File output as JSON lines.
    pub json: bool,
    pub rotation: RotationPolicy,
    pub max_files: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO.to_string(),
            env_filter: None,
            path: None,
            json: false,
            rotation: RotationPolicy::Daily,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    path: Option<PathBuf>,
    json: bool,
    rotation: RotationPolicy,
    max_files: usize,
}

impl LoggerBuilder {
    /// Applies deserialized settings on top of the current builder state.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn settings(mut self, settings: &LogSettings) -> Result<Self, LoggerError> {
        self.level = LevelFilter::from_str(settings.level.trim()).map_err(|_| {
            LoggerError::InvalidConfiguration {
                message: settings.level.clone().into(),
                context: Some("unknown log level".into()),
            }
        })?;
        self.console = settings.console;
        self.env_filter.clone_from(&settings.env_filter);
        self.path.clone_from(&settings.path);
        self.json = settings.json;
        self.rotation = settings.rotation;
        self.max_files = settings.max_files;
        Ok(self)
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds env-filter directives. Invalid directives make [`Self::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables rolling file output into `path`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: it owns the file worker.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already set,
    /// [`LoggerError::InvalidConfiguration`] for invalid settings, and
    /// [`LoggerError::Io`] or [`LoggerError::Appender`] when file output cannot be set up.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let env_filter = self.build_env_filter()?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = match &self.path {
            Some(path) => {
                fs::create_dir_all(path)
                    .context(format!("Failed to create log directory {}", path.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.rotation.into())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(path)
                    .context(format!("Failed to open log files in {}", path.display()))?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No logging output enabled. Enable console or file output."));
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, level = %self.level, "Logger initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.path.is_some() && self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            }),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

/// Handle to the installed logging system. Dropping it flushes and stops file output.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolling log files (`wadm.2026-10-19.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        let defaults = LogSettings::default();
        LoggerBuilder {
            name: name.into(),
            console: defaults.console,
            level: LevelFilter::INFO,
            env_filter: None,
            path: None,
            json: defaults.json,
            rotation: defaults.rotation,
            max_files: defaults.max_files,
        }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("wadm");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.rotation, RotationPolicy::Daily);
        assert_eq!(builder.max_files, DEFAULT_MAX_FILES);
        assert!(builder.path.is_none());
    }

    #[test]
    fn settings_override_builder() {
        let settings: LogSettings = serde_json::from_value(json!({
            "console": false,
            "level": "debug",
            "env_filter": null,
            "path": "/tmp/wadm-logs",
            "json": true,
            "rotation": "hourly",
            "max_files": 3
        }))
        .expect("settings");

        let builder = Logger::builder("wadm").settings(&settings).expect("valid settings");
        assert!(!builder.console);
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert!(builder.json);
        assert_eq!(builder.rotation, RotationPolicy::Hourly);
        assert_eq!(builder.max_files, 3);
        assert_eq!(builder.path.as_deref(), Some(std::path::Path::new("/tmp/wadm-logs")));
    }

    #[test]
    fn unknown_level_is_rejected() {
        let settings = LogSettings { level: "chatty".to_owned(), ..LogSettings::default() };
        let err = Logger::builder("wadm").settings(&settings).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn validation_catches_bad_builders() {
        assert!(Logger::builder("  ").validate().is_err());
        assert!(Logger::builder("wadm").path("/tmp").max_files(0).validate().is_err());
        assert!(Logger::builder("wadm").max_files(0).validate().is_ok());
    }

    #[test]
    fn invalid_env_filter_is_rejected() {
        let err = Logger::builder("wadm").env_filter("wadm=verbose").build_env_filter().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rotation_names() {
        assert_eq!(RotationPolicy::from_str("never").unwrap(), RotationPolicy::Never);
        assert_eq!(Rotation::from(RotationPolicy::Minutely), Rotation::MINUTELY);
    }

    #[test]
    fn nothing_enabled_is_an_error() {
        let err = Logger::builder("wadm").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
