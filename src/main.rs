use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use torn_travel::{OutputFormat, commands, config, platform};

#[derive(Parser)]
#[command(name = "ttravel")]
#[command(about = "Check a Torn player's travel status")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,

    #[arg(long, global = true, env = "TTRAVEL_CONFIG_DIR", help = "Config directory override")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and show the current travel status
    Check {
        #[arg(long, env = "TORN_API_KEY", hide_env_values = true, help = "Torn API key")]
        key: Option<String>,
    },
    /// Poll the travel status and print every update
    Watch {
        #[arg(long, env = "TORN_API_KEY", hide_env_values = true, help = "Torn API key")]
        key: Option<String>,
        #[arg(long, help = "Seconds between requests (defaults to watch.interval_secs)")]
        interval: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..), help = "Stop after this many updates")]
        count: Option<u32>,
    },
    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
    /// Print the config file location
    Path,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = cli.config_dir.as_deref();
    let config_path = platform::config_path(config_dir);

    match &cli.command {
        Commands::Check { key } => {
            let config = config::load(config_dir)?;
            commands::check::check(&config, key.as_deref(), cli.format)?;
        }
        Commands::Watch {
            key,
            interval,
            count,
        } => {
            let config = config::load(config_dir)?;
            commands::watch::watch(&config, key.as_deref(), *interval, *count, cli.format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(&config::load(config_dir)?)?,
            ConfigAction::Get { key } => commands::config::get(key, &config::load(config_dir)?)?,
            ConfigAction::Set { key, value } => commands::config::set(&config_path, key, value)?,
            ConfigAction::Path => commands::config::path(&config_path)?,
        },
    }

    Ok(())
}
