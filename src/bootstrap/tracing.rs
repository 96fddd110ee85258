//! Tracing configuration for Wardrobe
//!
//! ## Architecture / 架构
//!
//! - **Console**: stderr, warnings only unless `--verbose`; stdout stays free
//!   for command output
//! - **File**: everything the env filter lets through, appended daily under
//!   the app's `logs/` directory
//! - **Filter**: `RUST_LOG` first, then `[logging] filter` from config, then
//!   the build-profile default

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    filter::LevelFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter,
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default directives, replaced wholesale by a non-empty configured filter.
fn build_filter_directives(is_dev: bool, configured: &str) -> Vec<String> {
    let configured: Vec<String> = configured
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect();
    if !configured.is_empty() {
        return configured;
    }

    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev { "wd_infra=debug" } else { "wd_infra=info" }.to_string(),
    ]
}

fn console_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    }
}

/// Initialize the global tracing subscriber. Call once, before any command
/// runs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered. A log directory that
/// cannot be created only disables the file layer.
pub fn init_tracing_subscriber(
    configured_filter: &str,
    logs_dir: &Path,
    verbose: bool,
) -> anyhow::Result<()> {
    let directives = build_filter_directives(is_development(), configured_filter);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr))
        .with_filter(console_level(verbose));

    let file_layer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("Failed to initialize file logging, logging to console only: {err:#}");
            None
        }
    };

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, "wardrobe.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
