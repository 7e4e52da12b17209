//! Product catalog module.
//!
//! Contains types for products, option axes, variants, stock and collections.

mod collection;
mod inventory;
mod product;

pub use collection::Collection;
pub use inventory::Stock;
pub use product::{OptionAxis, Product, Variant};

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// An already-loaded set of products and collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find a product by slug.
    pub fn product_by_slug(&self, slug: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|product| product.slug == slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))
    }
}
