//! Display pricing for a resolved selection.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, Variant};
use crate::variants::MatchResult;

/// Prices shown on a product card, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceView {
    /// Current price.
    pub price: i64,
    /// Compare-at ("was") price, as supplied.
    pub compare_at: Option<i64>,
    /// Whole percent saved; only set when `compare_at > price`.
    pub discount_pct: Option<u32>,
}

impl PriceView {
    pub fn new(price: i64, compare_at: Option<i64>) -> Self {
        Self {
            price,
            compare_at,
            discount_pct: compare_at.and_then(|cap| discount_percentage(price, cap)),
        }
    }

    /// Check if the compare-at price is higher than the price.
    pub fn is_on_sale(&self) -> bool {
        self.discount_pct.is_some()
    }

    /// Compare-at price, only when it is worth striking through.
    pub fn strike_through(&self) -> Option<i64> {
        self.compare_at.filter(|cap| *cap > self.price)
    }
}

/// Percentage saved, rounded to the nearest whole percent with ties up.
///
/// Undefined (not zero) unless `compare_at > price`.
pub fn discount_percentage(price: i64, compare_at: i64) -> Option<u32> {
    if compare_at <= price || compare_at <= 0 {
        return None;
    }

    let savings = i128::from(compare_at) - i128::from(price);
    let compare_at = i128::from(compare_at);
    // floor(savings * 100 / compare_at + 1/2)
    let pct = (savings * 200 + compare_at) / (compare_at * 2);
    u32::try_from(pct).ok()
}

/// Variant whose prices are shown for a match result.
///
/// Exact and partial matches use their representative; with no match the
/// first declared variant stands in.
pub fn priced_variant<'a>(product: &'a Product, matched: &'a MatchResult) -> Option<&'a Variant> {
    matched.representative().or_else(|| product.variants.first())
}

/// Derive the display prices for a match result.
///
/// Variant prices fall back field by field to the product's base prices.
/// Returns `None` only when no price can be found at all, which a validated
/// product never produces for a variantless listing.
pub fn derive(product: &Product, matched: &MatchResult) -> Option<PriceView> {
    let variant = priced_variant(product, matched);

    let price = variant.and_then(|v| v.price).or(product.base_price)?;
    let compare_at = variant
        .and_then(|v| v.compare_at_price)
        .or(product.base_compare_at_price);

    Some(PriceView::new(price, compare_at))
}
