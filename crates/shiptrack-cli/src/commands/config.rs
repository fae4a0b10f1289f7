//! Config command: stored defaults and where the dataset comes from

use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config, DataSource, DATA_ENV};
use crate::Cli;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one stored value
    Get {
        /// One of: data_file, format, descending
        key: String,
    },
    /// Store a value and print it as saved
    Set {
        /// One of: data_file, format, descending
        key: String,
        /// New value (empty string clears data_file)
        value: String,
    },
    /// Show stored values and which dataset a query would load
    List,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, cli: &Cli) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Get { key } => run_get(key),
        ConfigCommands::Set { key, value } => run_set(key, value),
        ConfigCommands::List => run_list(cli),
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
        ConfigCommands::Init { force } => run_init(*force),
    }
}

fn run_get(key: &str) -> anyhow::Result<()> {
    let Some(value) = Config::load().get(key) else {
        anyhow::bail!(
            "Unknown config key: {} (available: {})",
            key,
            Config::keys().join(", ")
        );
    };
    println!("{}", value);
    Ok(())
}

fn run_set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load();
    let stored = apply_set(&mut config, key, value)?;
    config.save()?;
    println!("Set {} = {}", key, stored);
    Ok(())
}

/// Update `config` and return the value as it will be saved
fn apply_set(config: &mut Config, key: &str, value: &str) -> anyhow::Result<String> {
    config.set(key, value)?;
    config
        .get(key)
        .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}", key))
}

fn run_list(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load();
    let source = DataSource::from_env(cli.data.as_deref(), &config);
    print!("{}", render_list(&config, &source));
    Ok(())
}

fn render_list(config: &Config, source: &DataSource) -> String {
    let mut out = format!("Config file: {}\n\n", config_file_path().display());
    for key in Config::keys() {
        let value = config.get(key).unwrap_or_else(|| "(not set)".to_string());
        out.push_str(&format!("{} = {}\n", key, value));
    }
    out.push_str(&format!(
        "\nDataset: {}\n  precedence: --data, {}, data_file, built-in sample\n",
        source, DATA_ENV
    ));
    out
}

fn run_init(force: bool) -> anyhow::Result<()> {
    let path = config_file_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("Created config file at {}", path.display());
    Ok(())
}
