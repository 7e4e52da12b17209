//! Catalog types and variant resolution for the headless storefront.
//!
//! This crate holds everything a product card needs to reason about a
//! product without touching the network:
//!
//! - **Catalog**: Products, option axes, variants, stock, collections
//! - **Variants**: Selection tracking, the variant index, option availability
//!   and variant matching
//! - **Pricing**: Display price, compare-at price and discount percentage
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let indexed = IndexedProduct::new(product)?;
//! let selection = Selection::new().with("Size", "M");
//!
//! assert!(indexed.is_value_available("Color", "Red", &selection));
//!
//! let matched = indexed.resolve(&selection);
//! if let Some(view) = pricing::derive(indexed.product(), &matched) {
//!     println!("{}", Money::new(view.price, indexed.product().currency));
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod pricing;
pub mod variants;

pub use error::{CommerceError, InvalidAxisReason, InvalidVariantReason};
pub use ids::*;
pub use money::{Currency, Money, MoneyFormatter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, InvalidAxisReason, InvalidVariantReason};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money, MoneyFormatter};

    // Catalog
    pub use crate::catalog::{Catalog, Collection, OptionAxis, Product, Stock, Variant};

    // Variants
    pub use crate::variants::{
        AxisState, IndexedProduct, MatchResult, Selection, ValueState, VariantIndex,
    };

    // Pricing
    pub use crate::pricing::{self, PriceView};
}
