//! Shiptrack CLI - Command line interface for shipment queries

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, shipment, sort};
use config::{Config, DataSource};
use output::OutputFormat;
use shiptrack_core::{ShipmentLedger, SAMPLE_DATA};

#[derive(Parser)]
#[command(name = "shiptrack")]
#[command(author, version, about = "Look up, sort and trace shipment records")]
pub struct Cli {
    /// Shipment data file ("-" reads stdin); defaults to the built-in sample
    #[arg(short, long, global = true, env = "SHIPTRACK_DATA")]
    pub data: Option<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every shipment
    List,
    /// Show a single shipment
    Get(shipment::GetArgs),
    /// Show all shipments for an order
    Order(shipment::OrderArgs),
    /// Sort all shipments
    Sort(sort::SortArgs),
    /// Find the original shipment at the top of a parent chain
    Root(shipment::RootArgs),
    /// List shipments whose parent is the given shipment
    Children(shipment::ChildrenArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded shipment ledger
pub struct AppContext {
    pub ledger: ShipmentLedger,
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load();
        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(config.format.as_str()));

        let source = DataSource::from_env(cli.data.as_deref(), &config);
        tracing::debug!("Dataset source: {}", source);
        let ledger = match source.path() {
            Some(_) if source.is_stdin() => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read shipments from stdin")?;
                ShipmentLedger::parse(&raw)
            }
            Some(path) => ShipmentLedger::from_path(path)
                .with_context(|| format!("Failed to load shipments from {}", path.display()))?,
            None => ShipmentLedger::parse(SAMPLE_DATA),
        };
        tracing::info!("Loaded {} shipments", ledger.len());

        Ok(Self {
            ledger,
            config,
            format,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting shiptrack CLI");

    // These don't need the dataset
    match &cli.command {
        Commands::Config(args) => return commands::config::run(args, &cli),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Commands::List => shipment::run_list(&ctx)?,
        Commands::Get(args) => shipment::run_get(args, &ctx)?,
        Commands::Order(args) => shipment::run_order(args, &ctx)?,
        Commands::Sort(args) => sort::run(args, &ctx)?,
        Commands::Root(args) => shipment::run_root(args, &ctx)?,
        Commands::Children(args) => shipment::run_children(args, &ctx)?,
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
