//! Option value availability.
//!
//! Availability is recomputed from scratch for every query: the candidate
//! selection is built fresh from the current one, so an answer never
//! reflects an earlier selection.

use serde::Serialize;

use crate::catalog::{Product, Variant};
use crate::variants::{Selection, VariantIndex};

/// Check if choosing `value` on `axis` still leaves at least one variant.
///
/// The current choice on `axis`, if any, is replaced rather than combined.
/// Stock is ignored: sold-out combinations stay selectable so the shopper
/// can see they are sold out.
pub fn is_value_available(
    index: &VariantIndex,
    axis: &str,
    value: &str,
    selection: &Selection,
) -> bool {
    let hypothetical = selection.with(axis, value);
    !index.candidates(&hypothetical).is_empty()
}

/// Display state of one option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueState {
    pub value: String,
    /// Some variant matches the selection with this value chosen.
    pub available: bool,
    /// This is the current choice for the axis.
    pub selected: bool,
    /// Available, but every matching variant is out of stock.
    pub sold_out: bool,
    /// Color token for color swatches.
    pub swatch: Option<String>,
}

/// Display state of one option axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisState {
    pub name: String,
    pub values: Vec<ValueState>,
}

impl AxisState {
    /// Current choice for this axis.
    pub fn selected_value(&self) -> Option<&str> {
        self.values
            .iter()
            .find(|state| state.selected)
            .map(|state| state.value.as_str())
    }

    /// Values that can be offered to the shopper.
    pub fn available_values(&self) -> impl Iterator<Item = &ValueState> {
        self.values.iter().filter(|state| state.available)
    }

    /// Look up a value.
    pub fn value(&self, value: &str) -> Option<&ValueState> {
        self.values.iter().find(|state| state.value == value)
    }
}

/// Availability of every value on every axis, in declaration order.
pub fn option_states(product: &Product, index: &VariantIndex, selection: &Selection) -> Vec<AxisState> {
    product
        .options
        .iter()
        .map(|axis| AxisState {
            name: axis.name.clone(),
            values: axis
                .values
                .iter()
                .map(|value| {
                    let candidates = index.candidates(&selection.with(axis.name.as_str(), value.as_str()));
                    let available = !candidates.is_empty();
                    let purchasable = candidates
                        .iter()
                        .filter_map(|&position| product.variants.get(position))
                        .any(Variant::is_purchasable);

                    ValueState {
                        value: value.clone(),
                        available,
                        selected: selection.is_selected(&axis.name, value),
                        sold_out: available && !purchasable,
                        swatch: axis.swatch(value).map(str::to_string),
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OptionAxis, Stock};

    fn caps() -> Product {
        let mut product = Product::new("cap", "cap", "Cap");
        product.options = vec![
            OptionAxis::new("Size", ["S", "M", "L"]),
            OptionAxis::new("Color", ["Red", "Blue"])
                .with_swatch("Red", "#d00")
                .with_swatch("Blue", "#00d"),
        ];
        product.variants = vec![
            Variant::new("s-red")
                .with_option("Size", "S")
                .with_option("Color", "Red")
                .with_stock(Stock::Limited(0)),
            Variant::new("s-blue")
                .with_option("Size", "S")
                .with_option("Color", "Blue")
                .with_stock(Stock::Limited(5)),
            Variant::new("m-red")
                .with_option("Size", "M")
                .with_option("Color", "Red")
                .with_stock(Stock::Limited(3)),
        ];
        product
    }

    #[test]
    fn test_sold_out_combination_stays_available() {
        let product = caps();
        let index = VariantIndex::build(&product).unwrap();
        let selection = Selection::new().with("Size", "S");

        assert!(is_value_available(&index, "Color", "Red", &selection));
        assert!(is_value_available(&index, "Color", "Blue", &selection));
    }

    #[test]
    fn test_unlisted_combination_is_unavailable() {
        let product = caps();
        let index = VariantIndex::build(&product).unwrap();
        let selection = Selection::new().with("Size", "M");

        assert!(!is_value_available(&index, "Color", "Blue", &selection));
        assert!(!is_value_available(&index, "Size", "L", &Selection::new()));
        assert!(!is_value_available(&index, "Fit", "Slim", &selection));
    }

    #[test]
    fn test_choice_on_same_axis_is_replaced() {
        let product = caps();
        let index = VariantIndex::build(&product).unwrap();

        // The current Size=M is dropped; S is judged against Color=Red only.
        let selection = Selection::new().with("Size", "M").with("Color", "Red");
        assert!(is_value_available(&index, "Size", "S", &selection));

        let selection = Selection::new().with("Size", "S").with("Color", "Blue");
        assert!(!is_value_available(&index, "Size", "M", &selection));
    }

    #[test]
    fn test_availability_matches_brute_force() {
        let product = caps();
        let index = VariantIndex::build(&product).unwrap();
        let sizes = [None, Some("S"), Some("M"), Some("L")];
        let colors = [None, Some("Red"), Some("Blue")];

        for size in sizes {
            for color in colors {
                let mut selection = Selection::new();
                if let Some(size) = size {
                    selection.set("Size", size);
                }
                if let Some(color) = color {
                    selection.set("Color", color);
                }

                for axis in &product.options {
                    for value in &axis.values {
                        let union = selection.with(axis.name.as_str(), value.as_str());
                        let expected = product.variants.iter().any(|v| union.matches(v));
                        assert_eq!(
                            is_value_available(&index, &axis.name, value, &selection),
                            expected,
                            "{}={} with {:?}",
                            axis.name,
                            value,
                            selection
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_option_states() {
        let product = caps();
        let index = VariantIndex::build(&product).unwrap();
        let selection = Selection::new().with("Size", "S");

        let states = option_states(&product, &index, &selection);
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].selected_value(), Some("S"));

        let color = &states[1];
        let red = color.value("Red").unwrap();
        assert!(red.available);
        assert!(red.sold_out);
        assert_eq!(red.swatch.as_deref(), Some("#d00"));

        let blue = color.value("Blue").unwrap();
        assert!(blue.available);
        assert!(!blue.sold_out);

        let sizes: Vec<&str> = states[0].available_values().map(|s| s.value.as_str()).collect();
        assert_eq!(sizes, vec!["S", "M"]);
    }
}
