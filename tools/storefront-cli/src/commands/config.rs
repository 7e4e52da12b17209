//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { catalog, force } => init_config(&catalog, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output
        .kv("path", ctx.config.catalog.path.as_deref().unwrap_or("(not set)"));

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv(
        "currency",
        ctx.config.display.currency.as_deref().unwrap_or("(per product)"),
    );

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);

    let labels = &ctx.config.labels;
    ctx.output.info("");
    ctx.output.info("[labels.card]");
    ctx.output.kv("add_to_cart", &labels.card.add_to_cart);
    ctx.output.kv("sold_out", &labels.card.sold_out);
    ctx.output.kv("featured", &labels.card.featured);
    ctx.output.kv("no_image", &labels.card.no_image);

    Ok(())
}

async fn init_config(catalog: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(catalog))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no storefront.toml found, using defaults".to_string());
    }

    // Check catalog path
    match &ctx.config.catalog.path {
        Some(path) if !ctx.resolve_path(path).exists() => {
            errors.push(format!("catalog.path '{}' does not exist", path));
        }
        Some(_) => {}
        None => warnings.push("catalog.path is not set".to_string()),
    }

    // Check currency
    if let Err(e) = ctx.config.display_currency() {
        errors.push(format!("display.currency: {}", e));
    }

    // Check log filter
    if let Err(e) = EnvFilter::try_new(&ctx.config.logging.level) {
        errors.push(format!("logging.level '{}': {}", ctx.config.logging.level, e));
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
