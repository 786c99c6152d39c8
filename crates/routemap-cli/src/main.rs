//! `routemap` — print the HTTP routes declared by a project's controllers
//! as a single JSON array on stdout.

mod cli;
mod layout;

use anyhow::{Context, Result};
use clap::Parser;
use routemap_analysis::RouteScanner;
use routemap_core::config::RouteMapConfig;
use routemap_core::logging::init_tracing;

use crate::cli::Cli;

fn main() -> Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();

    let project_root = match &cli.project_root {
        Some(root) => root.clone(),
        None => layout::default_project_root()?,
    };

    let mut config = RouteMapConfig::load(&project_root, cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    tracing::info!(project_root = %project_root.display(), "resolved project root");

    let outcome = RouteScanner::new(config.scan)
        .scan(&project_root)
        .with_context(|| format!("Failed to scan {}", project_root.display()))?;

    let report = if cli.pretty {
        outcome.table.to_json_pretty()
    } else {
        outcome.table.to_json()
    }
    .context("Failed to serialize route report")?;

    println!("{report}");
    Ok(())
}
