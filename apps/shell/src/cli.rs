//! Command-line arguments of the `wadm` shell.

use clap::Parser;
use std::path::PathBuf;
use wadm::domain::constants::CONTROL_PANEL_WORKFLOW;

/// Lists workflow definition links from a JSON catalog.
#[derive(Debug, Parser)]
#[command(name = "wadm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Workflow definition link listing over an in-memory catalog")]
pub(crate) struct Cli {
    /// Settings file (TOML, YAML or JSON). Defaults to `./wadm.*` when present.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// JSON catalog of handlers, definitions and links. Overrides the settings file.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,

    /// Rendering surface: the control panel lists company-wide links, any other
    /// surface lists the links of `--group`.
    #[arg(long, default_value = CONTROL_PANEL_WORKFLOW)]
    pub(crate) surface: String,

    #[arg(long, default_value_t = 1)]
    pub(crate) company: i64,

    /// Site group of the current page.
    #[arg(long, default_value_t = 0)]
    pub(crate) group: i64,

    /// User whose ordering preferences are read and saved.
    #[arg(long, default_value_t = 1)]
    pub(crate) user: i64,

    #[arg(long, default_value = "en_US")]
    pub(crate) locale: String,

    /// Request parameter, repeatable (`--param keywords=wiki --param delta=5`).
    #[arg(long = "param", value_parser = parse_param)]
    pub(crate) params: Vec<(String, String)>,

    /// Print the page as JSON instead of tab-separated rows.
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_owned(), value.to_owned()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_split_on_first_equals() {
        assert_eq!(parse_param("keywords=a=b").unwrap(), ("keywords".to_owned(), "a=b".to_owned()));
        assert_eq!(parse_param("delta=").unwrap(), ("delta".to_owned(), String::new()));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let cli = Cli::parse_from([
            "wadm",
            "--catalog",
            "catalog.json",
            "--surface",
            "workflow_admin_site_administration",
            "--group",
            "20121",
            "--param",
            "orderByCol=workflow",
            "--param",
            "saveOrderBy=true",
        ]);

        assert_eq!(cli.group, 20_121);
        assert_eq!(cli.company, 1);
        assert_eq!(cli.params.len(), 2);
        assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("catalog.json")));
        assert!(!cli.json);
    }

    #[test]
    fn defaults_to_control_panel() {
        let cli = Cli::parse_from(["wadm"]);
        assert_eq!(cli.surface, CONTROL_PANEL_WORKFLOW);
        assert_eq!(cli.locale, "en_US");
        assert!(cli.params.is_empty());
    }
}
