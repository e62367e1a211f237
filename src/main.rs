mod cli;
mod config;
mod discovery;
mod error;
mod platform;
mod report;
mod store;
mod types;


use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::load_settings;
use discovery::discover_installed_editions;
use platform::RegistryStore;
use store::MemoryStore;
use types::{DiscoveredEdition, ProbeSettings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(&cli)?;

    match cli.command.unwrap_or(Commands::Discover) {
        Commands::Version => {
            println!("vsprobe v{}", env!("CARGO_PKG_VERSION"));
        }

        Commands::ListKnown => {
            print!("{}", report::render_known());
        }

        Commands::Discover => {
            let settings = resolve_settings(&cli)?;
            let editions = run_discovery(&cli)?;

            if editions.is_empty() {
                tracing::info!("No Visual Studio installations found");
            }
            print!("{}", report::render_editions(&editions, &settings)?);
        }
    }

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if cli.quiet {
        "error"
    } else if cli.verbose == 0 {
        "warn"
    } else if cli.verbose == 1 {
        "info"
    } else {
        "debug"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr; stdout carries only the report
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}

/// Settings file and environment, then command-line flags on top.
fn resolve_settings(cli: &Cli) -> Result<ProbeSettings> {
    let mut settings = load_settings()?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if cli.show_paths {
        settings.show_paths = true;
    }
    tracing::debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

fn run_discovery(cli: &Cli) -> Result<Vec<DiscoveredEdition>> {
    match &cli.snapshot {
        Some(path) => {
            tracing::info!("Reading registry snapshot {}", path.display());
            let store = MemoryStore::load_snapshot(path)?;
            discover_installed_editions(&store)
                .context("Could not discover Visual Studio installations")
        }
        None => discover_installed_editions(&RegistryStore)
            .context("Could not discover Visual Studio installations"),
    }
}
