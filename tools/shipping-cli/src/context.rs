//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use shipping_core::Currency;
use shipping_data::{parse_snapshot, RateFormat, RateSnapshot};
use tracing::{debug, warn};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative rate paths are resolved against.
    pub config_dir: PathBuf,
    /// Rate file given on the command line.
    rates_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, rates: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_dir) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                (CliConfig::load(&path)?, dir)
            }
            None => Self::find_config(&cwd)
                .unwrap_or_else(|| (CliConfig::default(), cwd.clone())),
        };

        Ok(Self {
            config,
            output,
            rates_override: rates.map(|r| cwd.join(r)),
            cwd,
            config_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if !config_path.exists() {
                    continue;
                }
                match CliConfig::load(&config_path) {
                    Ok(config) => {
                        debug!(path = %config_path.display(), "using config file");
                        return Some((config, current));
                    }
                    Err(e) => warn!(
                        path = %config_path.display(),
                        error = %format!("{:#}", e),
                        "skipping unreadable config file"
                    ),
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Rate file to read: the command-line override, else `rates.path`.
    pub fn rates_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.rates_override {
            return Ok(path.clone());
        }
        match &self.config.rates.path {
            Some(path) => Ok(self.config_dir.join(path)),
            None => bail!("No rate file configured. Pass --rates or set rates.path in shipquote.toml."),
        }
    }

    /// Read and validate the rate snapshot.
    pub async fn load_rates(&self) -> Result<RateSnapshot> {
        let path = self.rates_path()?;
        let format = RateFormat::from_path(&path)?;
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read rate file: {}", path.display()))?;

        self.output.debug(&format!("Loaded rates from {}", path.display()));

        let snapshot = parse_snapshot(&content, format)
            .with_context(|| format!("Invalid rate file: {}", path.display()))?;

        if let Some(currency) = snapshot.currency() {
            if currency != self.config.resolver.currency {
                self.output.warn(&format!(
                    "Rate data is priced in {} but resolver.currency is {}; quoting in {}",
                    currency, self.config.resolver.currency, currency
                ));
            }
        }

        Ok(snapshot)
    }

    /// Currency quotes are entered and shown in.
    pub fn quote_currency(&self, snapshot: &RateSnapshot) -> Currency {
        snapshot.currency().unwrap_or(self.config.resolver.currency)
    }
}
