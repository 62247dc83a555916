use std::fs::{self, File};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::cli::{Cli, Command};
use crate::constants::{MUSEUM_NAME, TAGLINE};
use crate::domain::{Catalog, builtin_catalog, validate_catalog};
use crate::state::config::APP_NAME;
use crate::state::{App, AppConfig, StartupOptions};

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "CODEMUSEUM_LOG";

/// Log file name inside the cache directory.
const LOG_FILE: &str = "codemuseum.log";

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging()?;

    let config = AppConfig::load().with_overrides(cli.traversal, cli.catalog, cli.skip_entry);
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Some(Command::Version) => {
            println!("{MUSEUM_NAME} v{VERSION}");
            println!("{TAGLINE}");
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Validate) => {
            let catalog = load_catalog(&config)?;
            let report = validate_catalog(&catalog);
            tracing::info!(codes = ?report.codes(), "catalog validated");
            print!("{}", cli::format_report(&report));
            Ok(if report.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(Command::Path { category }) => {
            let catalog = load_catalog(&config)?;
            print!("{}", cli::format_path(&catalog, &category)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let catalog = Arc::new(load_catalog(&config)?);
            run_museum(catalog, config.skip_entry).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Opens the museum in the terminal and restores it afterwards, even if
/// the loop fails.
async fn run_museum(catalog: Arc<Catalog>, skip_entry: bool) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new(catalog, StartupOptions { skip_entry });

    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// The configured catalog file, or the built-in collection.
fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let catalog = match &config.catalog {
        Some(path) => Catalog::from_json_file(path, config.traversal)
            .wrap_err_with(|| format!("Failed to load catalog {}", path.display()))?,
        None => builtin_catalog(config.traversal)?,
    };

    tracing::info!(
        categories = catalog.categories().len(),
        exhibits = catalog.exhibits().len(),
        strategy = %catalog.strategy(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Sends logs to a file in the cache directory when `CODEMUSEUM_LOG` is
/// set. The terminal belongs to the TUI, so nothing is logged to stderr.
fn init_logging() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(());
    };

    let dir = dirs::cache_dir()
        .ok_or_else(|| eyre!("Could not determine cache directory for the log file"))?
        .join(APP_NAME);
    fs::create_dir_all(&dir)?;
    let file = File::create(dir.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(version = VERSION, "logging started");
    Ok(())
}
