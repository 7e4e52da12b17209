//! Commerce error types.

use thiserror::Error;

use crate::ids::{ProductId, VariantId};

/// Errors raised while validating or reading catalog data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A variant does not fit the product's option axes.
    #[error("Invalid variant {variant_id} on product {product_id}: {reason}")]
    InvalidVariant {
        product_id: ProductId,
        variant_id: VariantId,
        reason: InvalidVariantReason,
    },

    /// An option axis is malformed.
    #[error("Invalid option axis {axis:?} on product {product_id}: {reason}")]
    InvalidOptionAxis {
        product_id: ProductId,
        axis: String,
        reason: InvalidAxisReason,
    },

    /// A product without variants has no base price.
    #[error("Product {0} has no variants and no base price")]
    MissingBasePrice(ProductId),

    /// A product declares option axes but has no variant to sell.
    #[error("Product {0} declares options but has no variants")]
    OptionsWithoutVariants(ProductId),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Why a variant was rejected by the variant index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVariantReason {
    /// The variant has no value for a product axis.
    #[error("missing value for axis {0:?}")]
    MissingAxis(String),

    /// The variant names an axis the product does not declare.
    #[error("unknown axis {0:?}")]
    UnknownAxis(String),

    /// The value is not one of the axis' declared values.
    #[error("value {value:?} is not declared on axis {axis:?}")]
    UnknownValue { axis: String, value: String },

    /// Another variant already carries the same option values.
    #[error("same option values as variant {0}")]
    DuplicateCombination(VariantId),

    /// Another variant already uses this id.
    #[error("duplicate variant id")]
    DuplicateId,
}

/// Why an option axis was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAxisReason {
    /// Two axes share the same name.
    #[error("axis declared more than once")]
    DuplicateName,

    /// A value appears twice within the axis.
    #[error("value {0:?} declared more than once")]
    DuplicateValue(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
