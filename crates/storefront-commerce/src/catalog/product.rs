//! Product, option axis and variant types.

use std::collections::BTreeMap;

use crate::catalog::Stock;
use crate::ids::{ProductId, VariantId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Axis name whose swatches are rendered as color chips.
const COLOR_AXIS: &str = "color";

/// A product in the catalog, as supplied by the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Product title.
    pub title: String,
    /// Rich-text description (may contain HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the product is highlighted in listings.
    #[serde(default)]
    pub featured: bool,
    /// Currency of every price on this product.
    #[serde(default)]
    pub currency: Currency,
    /// Price in minor units when the product has no variants, and the
    /// fallback for variants that omit one.
    #[serde(default)]
    pub base_price: Option<i64>,
    /// Compare-at price in minor units, same fallback rules as `base_price`.
    #[serde(default)]
    pub base_compare_at_price: Option<i64>,
    /// Stock of a product without variants.
    #[serde(default)]
    pub stock: Stock,
    /// Option axes in display order.
    #[serde(default)]
    pub options: Vec<OptionAxis>,
    /// Purchasable variants in declared order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product with no options, variants or price.
    pub fn new(id: impl Into<ProductId>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            description: None,
            images: Vec::new(),
            featured: false,
            currency: Currency::default(),
            base_price: None,
            base_compare_at_price: None,
            stock: Stock::default(),
            options: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Check if the product is sold through variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Check if the shopper has anything to choose.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// First image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Description with markup tags removed.
    pub fn plain_description(&self) -> Option<String> {
        self.description.as_deref().map(strip_tags)
    }
}

/// An option axis (e.g., Size with values S, M, L).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionAxis {
    /// Axis name, unique per product.
    pub name: String,
    /// Values in display order, unique within the axis.
    pub values: Vec<String>,
    /// Color token per value; only used on the color axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatches: Option<BTreeMap<String, String>>,
}

impl OptionAxis {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            swatches: None,
        }
    }

    /// Attach a swatch color to a value.
    pub fn with_swatch(mut self, value: impl Into<String>, color: impl Into<String>) -> Self {
        self.swatches
            .get_or_insert_with(BTreeMap::new)
            .insert(value.into(), color.into());
        self
    }

    /// Check if this is the color axis.
    pub fn is_color(&self) -> bool {
        self.name.eq_ignore_ascii_case(COLOR_AXIS)
    }

    /// Swatch color for a value, only on the color axis.
    pub fn swatch(&self, value: &str) -> Option<&str> {
        if !self.is_color() {
            return None;
        }
        self.swatches
            .as_ref()
            .and_then(|swatches| swatches.get(value))
            .map(String::as_str)
    }
}

/// A purchasable combination of option values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Variant identifier, unique within the product.
    pub id: VariantId,
    /// One value per product axis.
    pub option_values: BTreeMap<String, String>,
    /// Price in minor units; falls back to the product base price.
    #[serde(default)]
    pub price: Option<i64>,
    /// Compare-at price in minor units; falls back to the product's.
    #[serde(default)]
    pub compare_at_price: Option<i64>,
    /// Stock on hand.
    #[serde(default)]
    pub stock: Stock,
    /// Image shown while this variant is resolved.
    #[serde(default)]
    pub image: Option<String>,
}

impl Variant {
    /// Create a variant with unlimited stock and no price override.
    pub fn new(id: impl Into<VariantId>) -> Self {
        Self {
            id: id.into(),
            option_values: BTreeMap::new(),
            price: None,
            compare_at_price: None,
            stock: Stock::default(),
            image: None,
        }
    }

    /// Set the value for an axis.
    pub fn with_option(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.option_values.insert(axis.into(), value.into());
        self
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_compare_at(mut self, compare_at: i64) -> Self {
        self.compare_at_price = Some(compare_at);
        self
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Value chosen for an axis.
    pub fn value(&self, axis: &str) -> Option<&str> {
        self.option_values.get(axis).map(String::as_str)
    }

    /// Check if the variant can be sold.
    pub fn is_purchasable(&self) -> bool {
        self.stock.is_available()
    }

    /// Build the variant name from its values in axis order.
    pub fn build_name(&self, axes: &[OptionAxis]) -> String {
        let parts: Vec<&str> = axes.iter().filter_map(|axis| self.value(&axis.name)).collect();
        if parts.is_empty() {
            "Default".to_string()
        } else {
            parts.join(" / ")
        }
    }
}

/// Remove `<...>` tags, leaving an unterminated `<` untouched.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
