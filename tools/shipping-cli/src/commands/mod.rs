//! CLI command implementations.

pub mod audit;
pub mod config;
pub mod quote;
pub mod zones;

use clap::{Args, Subcommand};

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Destination postal code, matched exactly.
    pub postal_code: String,

    /// Order subtotal as a decimal amount (default: 0).
    #[arg(short, long)]
    pub subtotal: Option<f64>,

    /// Parcel weight in rate units (default: 1).
    #[arg(short, long)]
    pub weight: Option<f64>,
}

/// Arguments for the zones command.
#[derive(Args)]
pub struct ZonesArgs {
    /// Only show zones listing this postal code.
    #[arg(short, long)]
    pub postal_code: Option<String>,
}

/// Arguments for the audit command.
#[derive(Args)]
pub struct AuditArgs {
    /// Exit with an error when postal codes overlap.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
