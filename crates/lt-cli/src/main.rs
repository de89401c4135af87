use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lt_cli::commands::{audit, show, venues};
use lt_cli::{Cli, Commands, Config};
use lt_core::{Criteria, Session, Venue};

/// Resolve the catalog path (flag wins over config) and load the sessions.
fn load_catalog(config_path: Option<&Path>, catalog_flag: Option<PathBuf>) -> Result<Vec<Session>> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let catalog_path = catalog_flag.unwrap_or(config.catalog_path);
    let text = std::fs::read_to_string(&catalog_path)
        .with_context(|| format!("failed to read catalog at {}", catalog_path.display()))?;

    let sessions = lt_core::parse_catalog(&text).context("failed to parse catalog")?;
    tracing::debug!(count = sessions.len(), "catalog loaded");
    Ok(sessions)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match cli.command {
        Some(Commands::Show {
            mode,
            venues,
            category,
            no_virtual,
            pool_type,
            json,
        }) => {
            let sessions = load_catalog(cli.config.as_deref(), cli.catalog)?;
            let venue_set: BTreeSet<Venue> = if venues.is_empty() {
                Venue::ALL.into_iter().collect()
            } else {
                venues.into_iter().collect()
            };
            let criteria = Criteria {
                mode,
                venues: venue_set,
                category,
                include_virtual: !no_virtual,
                pool_type,
            };
            show::run(&sessions, &criteria, json)?;
        }
        Some(Commands::Venues) => {
            venues::run();
        }
        Some(Commands::Audit { json }) => {
            let sessions = load_catalog(cli.config.as_deref(), cli.catalog)?;
            audit::run(&sessions, json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
