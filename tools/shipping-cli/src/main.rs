//! shipquote - Command line tool for storefront shipping rates.
//!
//! Commands:
//! - `shipquote quote` - Quote shipping for a destination
//! - `shipquote zones` - List configured shipping zones
//! - `shipquote audit` - Check rate data and report overlapping postal codes
//! - `shipquote config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{AuditArgs, ConfigArgs, QuoteArgs, ZonesArgs};

/// shipquote - Quote and audit storefront shipping rates
#[derive(Parser)]
#[command(name = "shipquote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Rate file path (overrides `rates.path` from the config)
    #[arg(short, long, global = true)]
    rates: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote shipping for a destination
    Quote(QuoteArgs),

    /// List configured shipping zones
    Zones(ZonesArgs),

    /// Validate rate data and report overlapping postal codes
    Audit(AuditArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.rates.as_deref(), output)?;

    let result = match cli.command {
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Zones(args) => commands::zones::run(args, &ctx).await,
        Commands::Audit(args) => commands::audit::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
