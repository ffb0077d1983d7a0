//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let resolver = &ctx.config.resolver;
    ctx.output.info("[resolver]");
    ctx.output.kv("currency", resolver.currency.code());
    ctx.output.kv("fallback_rate", &resolver.fallback_rate().display());
    ctx.output.kv("fallback_estimate", &resolver.fallback_estimate);
    ctx.output.kv("fallback_methods", &format!("{:?}", resolver.fallback_methods).to_lowercase());

    ctx.output.info("[rates]");
    match ctx.rates_path() {
        Ok(path) => ctx.output.kv("path", &path.display().to_string()),
        Err(_) => ctx.output.kv("path", "(not set)"),
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    tokio::fs::write(&config_path, generate_default_config()).await?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors = ctx.config.problems();

    match ctx.rates_path() {
        Ok(path) if !path.exists() => {
            errors.push(format!("rate file not found: {}", path.display()));
        }
        Ok(_) => {}
        Err(_) => ctx.output.warn("Warning: no rate file configured"),
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid");

    Ok(())
}
