use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sc_cli::commands::{colors, day, summary};
use sc_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Summary {
            records,
            month,
            json,
        }) => {
            let today = Local::now().date_naive();
            let window = config.window.resolve(*month, today);
            summary::run(&config, records, window, *json)?;
        }
        Some(Commands::Day {
            records,
            date,
            json,
        }) => {
            day::run(&config, records, *date, *json)?;
        }
        Some(Commands::Colors { all }) => {
            colors::run(&config.theme_colors, *all);
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
