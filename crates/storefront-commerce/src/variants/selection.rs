//! Shopper option selection.

use std::collections::BTreeMap;

use crate::catalog::{OptionAxis, Variant};
use serde::{Deserialize, Serialize};

/// A possibly incomplete choice of one value per option axis.
///
/// Axes the shopper has not chosen yet are simply absent; they act as
/// wildcards when matching variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    chosen: BTreeMap<String, String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value chosen for an axis.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.chosen.get(axis).map(String::as_str)
    }

    /// Check if `value` is the current choice for `axis`.
    pub fn is_selected(&self, axis: &str, value: &str) -> bool {
        self.get(axis) == Some(value)
    }

    /// Choose a value, replacing any earlier choice on the same axis.
    ///
    /// Returns the replaced value.
    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.chosen.insert(axis.into(), value.into())
    }

    /// Copy of this selection with `axis` set to `value`.
    pub fn with(&self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(axis, value);
        next
    }

    /// Number of chosen axes.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Iterate over `(axis, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen.iter().map(|(axis, value)| (axis.as_str(), value.as_str()))
    }

    /// Check if every axis has a value.
    pub fn covers(&self, axes: &[OptionAxis]) -> bool {
        axes.iter().all(|axis| self.chosen.contains_key(&axis.name))
    }

    /// Check if a variant agrees with every chosen axis.
    pub fn matches(&self, variant: &Variant) -> bool {
        self.iter().all(|(axis, value)| variant.value(axis) == Some(value))
    }
}

impl<A, V> FromIterator<(A, V)> for Selection
where
    A: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        Self {
            chosen: iter
                .into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
        }
    }
}
