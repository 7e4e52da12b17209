//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::money::{self, MoneyFormatter};

use crate::config::{StorefrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (StorefrontConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Catalog file from the argument, else from `[catalog] path`.
    pub fn catalog_path(&self, arg: Option<&str>) -> Result<PathBuf> {
        match arg.or(self.config.catalog.path.as_deref()) {
            Some(path) => Ok(self.resolve_path(path)),
            None => bail!("No catalog given. Pass a catalog path or set [catalog] path in storefront.toml."),
        }
    }

    /// Read and parse the catalog.
    pub fn load_catalog(&self, arg: Option<&str>) -> Result<Catalog> {
        let path = self.catalog_path(arg)?;
        self.output.debug(&format!("Loading catalog: {}", path.display()));

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

        tracing::debug!(
            products = catalog.products.len(),
            collections = catalog.collections.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Formatter forced by `[display] currency`, if set.
    pub fn display_formatter(&self) -> Result<Option<MoneyFormatter>> {
        Ok(self.config.display_currency()?.map(money::formatter))
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = StorefrontConfig::load(&config_path) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
