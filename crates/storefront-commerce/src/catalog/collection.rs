//! Collections group products for browsing.

use crate::ids::{CollectionId, ProductId};
use serde::{Deserialize, Serialize};

/// A curated, ordered group of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: CollectionId,
    /// Collection name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Collection description.
    #[serde(default)]
    pub description: Option<String>,
    /// Collection image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Member products in display order.
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

impl Collection {
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            image: None,
            product_ids: Vec::new(),
        }
    }

    /// Add a product to this collection.
    pub fn add_product(&mut self, product_id: ProductId) {
        if !self.product_ids.contains(&product_id) {
            self.product_ids.push(product_id);
        }
    }

    /// Check if the collection contains a product.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Number of member products.
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}
