mod cli;
mod config;
mod render;

use crate::cli::Cli;
use crate::config::ShellConfig;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use wadm::definition_link::{DefinitionLinkQueryContext, RequestScope};
use wadm::domain::{CompanyId, GroupId, UserId};
use wadm::kernel::config::load_config;
use wadm::kernel::params::RequestParams;
use wadm::memory::Catalog;
use wadm_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: ShellConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).settings(&cfg.logger)?.init()?;

    let catalog = match cli.catalog.as_ref().or(cfg.catalog.as_ref()) {
        Some(path) => Catalog::from_path(path)?,
        None => {
            debug!("No catalog given, listing an empty registry");
            Catalog::default()
        },
    };
    let adapters = catalog.into_adapters();

    let scope = RequestScope::builder()
        .company_id(CompanyId(cli.company))
        .site_group_id(GroupId(cli.group))
        .user_id(UserId(cli.user))
        .surface_name(cli.surface)
        .locale(cli.locale)
        .render_url(cfg.render_url)
        .build();
    let params: RequestParams = cli.params.into_iter().collect();

    let ctx = DefinitionLinkQueryContext::new(
        wadm::memory_services(&adapters),
        scope,
        params,
        cfg.definition_link,
    );

    let page = ctx.search()?;
    let url = ctx.portlet_url()?;

    let mut out = io::stdout().lock();
    if cli.json {
        render::write_json(&mut out, &page, url.as_str())?;
    } else {
        render::write_rows(&mut out, &page, url.as_str())?;
    }
    out.flush()?;

    Ok(())
}
