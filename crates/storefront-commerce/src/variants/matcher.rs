//! Variant matching.

use std::slice;

use crate::catalog::{Product, Variant};
use crate::variants::{Selection, VariantIndex};

/// Outcome of resolving a selection against a product's variants.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// Every axis is chosen and exactly this variant carries those values.
    Exact(Variant),
    /// Some axes are still open; these variants fit the chosen ones, in
    /// declared order. Used for previews only, never for the cart.
    Partial(Vec<Variant>),
    /// Nothing fits the selection, or the product has no variants.
    NoMatch,
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchResult::Exact(_))
    }

    /// The variant to purchase, only for an exact match.
    pub fn exact(&self) -> Option<&Variant> {
        match self {
            MatchResult::Exact(variant) => Some(variant),
            _ => None,
        }
    }

    /// Every variant consistent with the selection.
    pub fn candidates(&self) -> &[Variant] {
        match self {
            MatchResult::Exact(variant) => slice::from_ref(variant),
            MatchResult::Partial(candidates) => candidates,
            MatchResult::NoMatch => &[],
        }
    }

    /// Single variant to preview: the exact match, or the first candidate in
    /// declared order.
    pub fn representative(&self) -> Option<&Variant> {
        self.candidates().first()
    }
}

/// Resolve a selection.
///
/// A selection that covers every axis is looked up exactly; anything less
/// yields the consistent candidates.
pub fn resolve(product: &Product, index: &VariantIndex, selection: &Selection) -> MatchResult {
    if !product.has_variants() {
        return MatchResult::NoMatch;
    }

    if selection.covers(&product.options) {
        return index
            .exact(selection)
            .and_then(|position| product.variants.get(position))
            .map_or(MatchResult::NoMatch, |variant| MatchResult::Exact(variant.clone()));
    }

    let candidates: Vec<Variant> = index
        .candidates(selection)
        .into_iter()
        .filter_map(|position| product.variants.get(position).cloned())
        .collect();

    if candidates.is_empty() {
        MatchResult::NoMatch
    } else {
        MatchResult::Partial(candidates)
    }
}
