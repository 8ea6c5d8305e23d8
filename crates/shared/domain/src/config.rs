use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// What the site-scoped view shows for a content type that has no site link.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SiteFallback {
    /// Show the localized "no workflow" placeholder.
    #[default]
    Placeholder,
    /// Show the name of the company-wide default definition, if one is linked.
    CompanyDefault,
}

/// Settings of the definition-link administration slice.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefinitionLinkConfig {
    /// Page size used when the request carries no valid `delta`.
    pub default_delta: u32,
    /// Upper bound for a requested page size.
    pub max_delta: u32,
    /// Site lookups do not fall back to the company default link.
    pub strict_site_lookup: bool,
    pub site_fallback: SiteFallback,
}

impl Default for DefinitionLinkConfig {
    fn default() -> Self {
        Self {
            default_delta: 20,
            max_delta: 200,
            strict_site_lookup: true,
            site_fallback: SiteFallback::Placeholder,
        }
    }
}
