//! Variant lookup structures.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::catalog::{Product, Variant};
use crate::error::{CommerceError, InvalidAxisReason, InvalidVariantReason};
use crate::variants::Selection;

/// Positions into `Product::variants`, kept in declared order.
pub type Positions = BTreeSet<usize>;

/// Lookup structures over a product's variants.
///
/// `by_combination` maps the full value tuple (in axis declaration order) to
/// the variant position for exact lookups. `by_value` maps each axis value to
/// the positions of every variant carrying it, which is what availability
/// queries intersect.
#[derive(Debug, Clone)]
pub struct VariantIndex {
    axes: Vec<String>,
    by_combination: HashMap<Vec<String>, usize>,
    by_value: HashMap<String, HashMap<String, Positions>>,
    len: usize,
}

impl VariantIndex {
    /// Validate a product's options and variants and index them.
    ///
    /// # Errors
    ///
    /// - [`CommerceError::InvalidOptionAxis`] for duplicate axis names or values
    /// - [`CommerceError::MissingBasePrice`] for a variantless product without a price
    /// - [`CommerceError::OptionsWithoutVariants`] for axes with no variant behind them
    /// - [`CommerceError::InvalidVariant`] when a variant misses an axis, names an
    ///   unknown axis or value, repeats another variant's values, or reuses an id
    pub fn build(product: &Product) -> Result<Self, CommerceError> {
        let mut by_value: HashMap<String, HashMap<String, Positions>> = HashMap::new();
        let mut axes = Vec::with_capacity(product.options.len());

        for axis in &product.options {
            if by_value.contains_key(&axis.name) {
                return Err(invalid_axis(product, &axis.name, InvalidAxisReason::DuplicateName));
            }

            let mut values = HashMap::with_capacity(axis.values.len());
            for value in &axis.values {
                if values.insert(value.clone(), Positions::new()).is_some() {
                    return Err(invalid_axis(
                        product,
                        &axis.name,
                        InvalidAxisReason::DuplicateValue(value.clone()),
                    ));
                }
            }

            by_value.insert(axis.name.clone(), values);
            axes.push(axis.name.clone());
        }

        if !product.has_variants() {
            if product.has_options() {
                return Err(CommerceError::OptionsWithoutVariants(product.id.clone()));
            }
            if product.base_price.is_none() {
                return Err(CommerceError::MissingBasePrice(product.id.clone()));
            }
        }

        let mut seen_ids = HashSet::with_capacity(product.variants.len());
        let mut by_combination: HashMap<Vec<String>, usize> =
            HashMap::with_capacity(product.variants.len());

        for (position, variant) in product.variants.iter().enumerate() {
            if !seen_ids.insert(&variant.id) {
                return Err(invalid_variant(product, variant, InvalidVariantReason::DuplicateId));
            }

            if let Some(unknown) = variant
                .option_values
                .keys()
                .find(|name| !by_value.contains_key(*name))
            {
                return Err(invalid_variant(
                    product,
                    variant,
                    InvalidVariantReason::UnknownAxis(unknown.clone()),
                ));
            }

            let mut key = Vec::with_capacity(axes.len());
            for axis in &axes {
                let value = variant.value(axis).ok_or_else(|| {
                    invalid_variant(product, variant, InvalidVariantReason::MissingAxis(axis.clone()))
                })?;

                let positions = by_value
                    .get_mut(axis)
                    .and_then(|values| values.get_mut(value))
                    .ok_or_else(|| {
                        invalid_variant(
                            product,
                            variant,
                            InvalidVariantReason::UnknownValue {
                                axis: axis.clone(),
                                value: value.to_string(),
                            },
                        )
                    })?;
                positions.insert(position);
                key.push(value.to_string());
            }

            if let Some(&existing) = by_combination.get(&key) {
                let other = product.variants[existing].id.clone();
                return Err(invalid_variant(
                    product,
                    variant,
                    InvalidVariantReason::DuplicateCombination(other),
                ));
            }
            by_combination.insert(key, position);
        }

        Ok(Self {
            axes,
            by_combination,
            by_value,
            len: product.variants.len(),
        })
    }

    /// Axis names in declaration order.
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    /// Number of indexed variants.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the variant whose values equal a complete selection.
    pub fn exact(&self, selection: &Selection) -> Option<usize> {
        if selection.len() != self.axes.len() {
            return None;
        }

        let key = self
            .axes
            .iter()
            .map(|axis| selection.get(axis).map(str::to_string))
            .collect::<Option<Vec<_>>>()?;

        self.by_combination.get(&key).copied()
    }

    /// Positions of the variants carrying `value` on `axis`.
    pub fn positions_with(&self, axis: &str, value: &str) -> Option<&Positions> {
        self.by_value.get(axis).and_then(|values| values.get(value))
    }

    /// Positions of every variant that agrees with the chosen axes, in
    /// declared order. Unchosen axes match anything.
    pub fn candidates(&self, selection: &Selection) -> Vec<usize> {
        let mut fixed = selection.iter();

        let Some((axis, value)) = fixed.next() else {
            return (0..self.len).collect();
        };
        let Some(first) = self.positions_with(axis, value) else {
            return Vec::new();
        };

        let mut result = first.clone();
        for (axis, value) in fixed {
            let Some(positions) = self.positions_with(axis, value) else {
                return Vec::new();
            };
            result = result.intersection(positions).copied().collect();
            if result.is_empty() {
                break;
            }
        }

        result.into_iter().collect()
    }
}

fn invalid_variant(product: &Product, variant: &Variant, reason: InvalidVariantReason) -> CommerceError {
    CommerceError::InvalidVariant {
        product_id: product.id.clone(),
        variant_id: variant.id.clone(),
        reason,
    }
}

fn invalid_axis(product: &Product, axis: &str, reason: InvalidAxisReason) -> CommerceError {
    CommerceError::InvalidOptionAxis {
        product_id: product.id.clone(),
        axis: axis.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OptionAxis, Stock};
    use crate::ids::VariantId;

    fn caps() -> Product {
        let mut product = Product::new("cap", "cap", "Cap");
        product.options = vec![
            OptionAxis::new("Size", ["S", "M", "L"]),
            OptionAxis::new("Color", ["Red", "Blue"]),
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
    fn test_exact_lookup() {
        let index = VariantIndex::build(&caps()).unwrap();
        let selection: Selection = [("Size", "M"), ("Color", "Red")].into_iter().collect();

        assert_eq!(index.exact(&selection), Some(2));
        assert_eq!(index.exact(&selection.with("Size", "L")), None);
        assert_eq!(index.exact(&Selection::new().with("Size", "M")), None);
    }

    #[test]
    fn test_value_positions() {
        let index = VariantIndex::build(&caps()).unwrap();

        let red: Vec<usize> = index.positions_with("Color", "Red").unwrap().iter().copied().collect();
        assert_eq!(red, vec![0, 2]);
        assert!(index.positions_with("Size", "L").unwrap().is_empty());
        assert!(index.positions_with("Material", "Wool").is_none());
    }

    #[test]
    fn test_candidates_intersect_fixed_axes() {
        let index = VariantIndex::build(&caps()).unwrap();

        assert_eq!(index.candidates(&Selection::new()), vec![0, 1, 2]);
        assert_eq!(index.candidates(&Selection::new().with("Color", "Red")), vec![0, 2]);
        assert_eq!(
            index.candidates(&Selection::new().with("Color", "Blue").with("Size", "M")),
            Vec::<usize>::new()
        );
        assert!(index.candidates(&Selection::new().with("Fit", "Slim")).is_empty());
    }

    #[test]
    fn test_missing_axis_is_rejected() {
        let mut product = caps();
        product.variants.push(Variant::new("l").with_option("Size", "L"));

        let err = VariantIndex::build(&product).unwrap_err();
        assert_eq!(
            err,
            CommerceError::InvalidVariant {
                product_id: product.id.clone(),
                variant_id: VariantId::new("l"),
                reason: InvalidVariantReason::MissingAxis("Color".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_axis_is_rejected() {
        let mut product = caps();
        product.variants[1] = product.variants[1].clone().with_option("Fit", "Slim");

        let err = VariantIndex::build(&product).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidVariant {
                reason: InvalidVariantReason::UnknownAxis(ref axis),
                ..
            } if axis == "Fit"
        ));
    }

    #[test]
    fn test_undeclared_value_is_rejected() {
        let mut product = caps();
        product.variants.push(
            Variant::new("xl")
                .with_option("Size", "XL")
                .with_option("Color", "Red"),
        );

        let err = VariantIndex::build(&product).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidVariant {
                reason: InvalidVariantReason::UnknownValue { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_combination_is_rejected() {
        let mut product = caps();
        product.variants.push(
            Variant::new("s-red-again")
                .with_option("Size", "S")
                .with_option("Color", "Red"),
        );

        let err = VariantIndex::build(&product).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidVariant {
                reason: InvalidVariantReason::DuplicateCombination(ref other),
                ..
            } if other.as_str() == "s-red"
        ));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut product = caps();
        product.variants.push(
            Variant::new("s-red")
                .with_option("Size", "L")
                .with_option("Color", "Blue"),
        );

        let err = VariantIndex::build(&product).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidVariant {
                reason: InvalidVariantReason::DuplicateId,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_axes_are_rejected() {
        let mut product = caps();
        product.options.push(OptionAxis::new("Size", ["XL"]));
        assert!(matches!(
            VariantIndex::build(&product).unwrap_err(),
            CommerceError::InvalidOptionAxis {
                reason: InvalidAxisReason::DuplicateName,
                ..
            }
        ));

        let mut product = caps();
        product.options[1] = OptionAxis::new("Color", ["Red", "Red"]);
        assert!(matches!(
            VariantIndex::build(&product).unwrap_err(),
            CommerceError::InvalidOptionAxis {
                reason: InvalidAxisReason::DuplicateValue(_),
                ..
            }
        ));
    }

    #[test]
    fn test_variantless_product_needs_base_price() {
        let mut product = Product::new("sticker", "sticker", "Sticker");
        assert_eq!(
            VariantIndex::build(&product).unwrap_err(),
            CommerceError::MissingBasePrice(product.id.clone())
        );

        product.base_price = Some(500);
        let index = VariantIndex::build(&product).unwrap();
        assert!(index.is_empty());
        assert!(index.axes().is_empty());
    }

    #[test]
    fn test_options_without_variants_are_rejected() {
        let mut product = Product::new("scarf", "scarf", "Scarf");
        product.base_price = Some(1200);
        product.options = vec![OptionAxis::new("Size", ["S", "M"])];

        assert_eq!(
            VariantIndex::build(&product).unwrap_err(),
            CommerceError::OptionsWithoutVariants(product.id.clone())
        );
    }
}
