use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;

mod collector;
mod config;
mod directory;
mod error;
mod images;
mod logo;
mod models;
mod utils;

use config::Config;

#[derive(Parser)]
#[command(name = "radioharvest")]
#[command(about = "Christian radio station catalog harvester")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest stations from the directory and build the catalog
    Harvest {
        /// Stop after this many accepted stations
        #[arg(short, long)]
        target: Option<usize>,
    },
    /// Write a default configuration file
    Init,
    /// Resolve a single station logo by scraping its homepage
    Logo {
        /// Station homepage URL
        homepage: String,
        /// Station name, used as the stored file name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let mut config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Harvest { target } => {
            if let Some(target) = target {
                config.directory.target_count = target;
            }
            run_harvest(&config).await?;
        }
        Commands::Init => {
            Config::default().save(&cli.config)?;
            info!("Wrote default configuration to {}", cli.config);
        }
        Commands::Logo { homepage, name } => {
            run_resolve_logo(&config, &homepage, &name).await;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("radioharvest={}", level))
        .with_target(false)
        .init();

    Ok(())
}

async fn run_harvest(config: &Config) -> Result<()> {
    let collector = collector::Collector::new(config);
    let catalog = collector.collect().await?;

    collector::write_catalog(&catalog, Path::new(&config.storage.catalog_path)).await?;

    Ok(())
}

async fn run_resolve_logo(config: &Config, homepage: &str, name: &str) {
    let store = images::ImageStore::new(&config.storage);
    let resolver = logo::LogoResolver::new();

    match resolver.resolve(&store, homepage, name).await {
        Some(reference) => info!("🧲 Logo stored: {}", reference),
        None => info!("No logo could be resolved for {}", name),
    }
}
