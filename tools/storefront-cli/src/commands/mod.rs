//! CLI command implementations.

pub mod config;
pub mod index;
pub mod preview;
pub mod subscribe;
pub mod validate;

mod services;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Catalog JSON file (default: [catalog] path).
    pub catalog: Option<String>,
}

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Product slug.
    pub slug: String,

    /// Catalog JSON file (default: [catalog] path).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Option choice as Axis=Value, applied in order.
    #[arg(short, long = "select", value_name = "AXIS=VALUE")]
    pub selections: Vec<String>,

    /// Print the rendered card HTML.
    #[arg(long)]
    pub html: bool,

    /// Add the resolved variant to a dry-run cart.
    #[arg(long)]
    pub add_to_cart: bool,

    /// Make the dry-run cart fail with this reason.
    #[arg(long, value_name = "REASON", requires = "add_to_cart")]
    pub cart_fail: Option<String>,
}

/// Arguments for the index command.
#[derive(Args)]
pub struct IndexArgs {
    /// Catalog JSON file (default: [catalog] path).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Show only this collection's products.
    #[arg(long)]
    pub collection: Option<String>,

    /// Print the rendered page HTML.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,

    /// Make the dry-run service fail with this reason.
    #[arg(long, value_name = "REASON")]
    pub fail: Option<String>,
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
        /// Catalog path to write into the config.
        #[arg(long, default_value = "catalog.json")]
        catalog: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Split an `Axis=Value` choice.
pub(crate) fn parse_selection(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((axis, value)) if !axis.trim().is_empty() && !value.trim().is_empty() => {
            Ok((axis.trim(), value.trim()))
        }
        _ => bail!("Invalid selection '{}', expected AXIS=VALUE", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("Size=M").unwrap(), ("Size", "M"));
        assert_eq!(parse_selection(" Color = Azul marino ").unwrap(), ("Color", "Azul marino"));
        assert!(parse_selection("Size").is_err());
        assert!(parse_selection("=M").is_err());
        assert!(parse_selection("Size=").is_err());
    }
}
