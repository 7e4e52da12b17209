//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::Currency;
use storefront_headless::sections::Labels;

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Price display.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Shop copy used by the HTML renderers.
    #[serde(default)]
    pub labels: Labels,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Currency forced for price display, if configured.
    pub fn display_currency(&self) -> Result<Option<Currency>> {
        match self.display.currency.as_deref() {
            None => Ok(None),
            Some(code) => match Currency::from_code(code) {
                Some(currency) => Ok(Some(currency)),
                None => bail!("Unknown currency code: {}", code),
            },
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Price display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code overriding each product's own currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Storefront configuration

[catalog]
path = "{catalog_path}"

[display]
# currency = "MXN"

[logging]
level = "warn"

# Shop copy; every key is optional.
[labels.card]
add_to_cart = "Agregar"
sold_out = "Agotado"
featured = "Destacado"
no_image = "Sin imagen"

[labels.index]
featured_heading = "Productos Destacados"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config("catalog.json")).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("catalog.json"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.labels.card.add_to_cart, "Agregar");
        assert_eq!(config.display_currency().unwrap(), None);
    }

    #[test]
    fn test_display_currency() {
        let config: StorefrontConfig = toml::from_str("[display]\ncurrency = \"mxn\"").unwrap();
        assert_eq!(config.display_currency().unwrap(), Some(Currency::MXN));

        let config: StorefrontConfig = toml::from_str("[display]\ncurrency = \"XYZ\"").unwrap();
        assert!(config.display_currency().is_err());
    }

    #[test]
    fn test_empty_config() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }
}
