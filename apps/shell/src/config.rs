use serde::Deserialize;
use std::path::PathBuf;
use wadm::domain::config::DefinitionLinkConfig;
use wadm_logger::LogSettings;

/// Render URL used when the settings do not name one.
const DEFAULT_RENDER_URL: &str = "http://localhost:8080/group/control_panel/manage";

/// Settings of the `wadm` shell, loaded from `wadm.{toml,yaml,json}` and `WADM__*`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    pub(crate) logger: LogSettings,
    pub(crate) definition_link: DefinitionLinkConfig,
    /// Catalog used when `--catalog` is not given.
    pub(crate) catalog: Option<PathBuf>,
    /// Base URL of the page-navigation link.
    pub(crate) render_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            logger: LogSettings { console: false, ..LogSettings::default() },
            definition_link: DefinitionLinkConfig::default(),
            catalog: None,
            render_url: DEFAULT_RENDER_URL.to_owned(),
        }
    }
}
