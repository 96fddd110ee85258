//! Wardrobe command-line application: bootstrap, CLI and command handlers
//! over the `wd-*` crates.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use tracing::info;
use wd_app::{AppPaths, LoadWardrobe};

use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::{default_data_root, resolve_config, wire_dependencies};
use crate::cli::Cli;

/// Resolves config, installs logging, loads the wardrobe and runs one
/// command. Returns the text to print.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let paths = AppPaths::under(default_data_root()?);
    let config = resolve_config(cli.config.as_deref(), &paths)?;

    init_tracing_subscriber(&config.log_filter, &paths.logs_dir, cli.verbose)?;
    info!(snapshot = %config.snapshot_path.display(), "Starting wardrobe");

    let deps = wire_dependencies(&config);
    let mut store = LoadWardrobe::from_ports(deps.snapshots.clone(), deps.clock.clone())
        .execute(config.seed_sample_data.unwrap_or(true))
        .await?;

    let rendered = commands::dispatch(cli.command, &mut store, &deps).await?;
    rendered.to_output(cli.json)
}
