//! Storefront home page logic.

use std::sync::Arc;

use storefront_commerce::catalog::{Catalog, Collection, Product};
use storefront_commerce::{CollectionId, CommerceError};

use crate::collaborators::CartService;
use crate::product_card::ProductCardLogic;

/// A product card ready to render, or the reason it cannot be.
#[derive(Debug)]
pub enum CardSlot {
    Ready(ProductCardLogic),
    /// Catalog data for this product is invalid; render a degraded card.
    Unavailable {
        product: Product,
        reason: CommerceError,
    },
}

impl CardSlot {
    pub fn product(&self) -> &Product {
        match self {
            CardSlot::Ready(card) => card.product(),
            CardSlot::Unavailable { product, .. } => product,
        }
    }

    pub fn card(&self) -> Option<&ProductCardLogic> {
        match self {
            CardSlot::Ready(card) => Some(card),
            CardSlot::Unavailable { .. } => None,
        }
    }
}

/// Collection filter over the product grid.
#[derive(Debug, Clone, Default)]
pub struct StorefrontIndexLogic {
    products: Vec<Product>,
    collections: Vec<Collection>,
    selected_collection: Option<CollectionId>,
}

impl StorefrontIndexLogic {
    pub fn new(products: Vec<Product>, collections: Vec<Collection>) -> Self {
        Self {
            products,
            collections,
            selected_collection: None,
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog.products, catalog.collections)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn selected_collection(&self) -> Option<&Collection> {
        let id = self.selected_collection.as_ref()?;
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Narrow the grid to one collection. Unknown ids are ignored.
    pub fn view_collection_products(&mut self, collection_id: &CollectionId) -> bool {
        if !self.collections.iter().any(|c| &c.id == collection_id) {
            tracing::debug!(collection_id = %collection_id, "unknown collection ignored");
            return false;
        }

        self.selected_collection = Some(collection_id.clone());
        true
    }

    pub fn show_all_products(&mut self) {
        self.selected_collection = None;
    }

    /// Products in the grid.
    ///
    /// With a collection selected, its products in collection order; ids
    /// missing from the catalog are skipped.
    pub fn filtered_products(&self) -> Vec<&Product> {
        match self.selected_collection() {
            Some(collection) => collection
                .product_ids
                .iter()
                .filter_map(|id| self.products.iter().find(|p| &p.id == id))
                .collect(),
            None => self.products.iter().collect(),
        }
    }

    /// Grid heading: the selected collection's name, or `None` for the
    /// featured products heading.
    pub fn heading(&self) -> Option<&str> {
        self.selected_collection().map(|c| c.name.as_str())
    }

    /// Mount a card for every product in the grid.
    ///
    /// Invalid products are logged once here and come back as
    /// `Unavailable` instead of failing the whole page.
    pub fn mount_cards(&self, cart: Arc<dyn CartService>) -> Vec<CardSlot> {
        self.filtered_products()
            .into_iter()
            .map(|product| match ProductCardLogic::mount(product.clone(), cart.clone()) {
                Ok(card) => CardSlot::Ready(card),
                Err(reason) => {
                    tracing::error!(product_id = %product.id, error = %reason, "invalid catalog data");
                    CardSlot::Unavailable {
                        product: product.clone(),
                        reason,
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{AddToCartRequest, CollaboratorError};
    use async_trait::async_trait;
    use storefront_commerce::catalog::{OptionAxis, Variant};
    use storefront_commerce::ProductId;

    struct NoopCart;

    #[async_trait]
    impl CartService for NoopCart {
        async fn add_to_cart(&self, _request: AddToCartRequest) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    fn product(id: &str) -> Product {
        let mut product = Product::new(id, id, id.to_uppercase());
        product.base_price = Some(1000);
        product
    }

    fn storefront() -> StorefrontIndexLogic {
        let mut broken = product("broken");
        broken.options = vec![OptionAxis::new("Size", ["S"])];
        broken.variants = vec![Variant::new("v1").with_option("Size", "XL")];

        let mut caps = Collection::new("caps", "Gorras", "gorras");
        caps.add_product(ProductId::new("trucker"));
        caps.add_product(ProductId::new("missing"));
        caps.add_product(ProductId::new("snapback"));

        StorefrontIndexLogic::new(
            vec![product("snapback"), product("trucker"), broken],
            vec![caps],
        )
    }

    fn ids(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_collection_filter() {
        let mut index = storefront();
        assert_eq!(index.heading(), None);
        assert_eq!(ids(index.filtered_products()), vec!["snapback", "trucker", "broken"]);

        assert!(index.view_collection_products(&CollectionId::new("caps")));
        assert_eq!(index.heading(), Some("Gorras"));
        assert_eq!(ids(index.filtered_products()), vec!["trucker", "snapback"]);

        assert!(!index.view_collection_products(&CollectionId::new("hats")));
        assert_eq!(index.heading(), Some("Gorras"));

        index.show_all_products();
        assert_eq!(index.selected_collection(), None);
        assert_eq!(index.filtered_products().len(), 3);
    }

    #[test]
    fn test_invalid_product_gets_unavailable_slot() {
        let index = storefront();
        let slots = index.mount_cards(Arc::new(NoopCart));

        assert_eq!(slots.len(), 3);
        assert!(slots[0].card().is_some());
        assert!(slots[1].card().is_some());
        match &slots[2] {
            CardSlot::Unavailable { product, reason } => {
                assert_eq!(product.id.as_str(), "broken");
                assert!(matches!(reason, CommerceError::InvalidVariant { .. }));
            }
            CardSlot::Ready(_) => panic!("broken product should not mount"),
        }
    }
}
