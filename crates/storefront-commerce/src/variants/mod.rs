//! Variant resolution.
//!
//! Contains the selection type, the variant index, option availability and
//! variant matching. [`IndexedProduct`] bundles a product with its validated
//! index so callers cannot query an index built for another product.

mod availability;
mod index;
mod matcher;
mod selection;

pub use availability::{is_value_available, option_states, AxisState, ValueState};
pub use index::{Positions, VariantIndex};
pub use matcher::{resolve, MatchResult};
pub use selection::Selection;

use crate::catalog::Product;
use crate::error::CommerceError;

/// A product whose options and variants passed validation.
#[derive(Debug, Clone)]
pub struct IndexedProduct {
    product: Product,
    index: VariantIndex,
}

impl IndexedProduct {
    /// Validate and index a product.
    pub fn new(product: Product) -> Result<Self, CommerceError> {
        let index = VariantIndex::build(&product)?;
        Ok(Self { product, index })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn index(&self) -> &VariantIndex {
        &self.index
    }

    /// See [`is_value_available`].
    pub fn is_value_available(&self, axis: &str, value: &str, selection: &Selection) -> bool {
        is_value_available(&self.index, axis, value, selection)
    }

    /// See [`option_states`].
    pub fn option_states(&self, selection: &Selection) -> Vec<AxisState> {
        option_states(&self.product, &self.index, selection)
    }

    /// See [`resolve`].
    pub fn resolve(&self, selection: &Selection) -> MatchResult {
        resolve(&self.product, &self.index, selection)
    }
}
