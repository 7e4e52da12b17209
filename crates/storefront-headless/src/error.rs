//! Error types for the headless logic.

use storefront_commerce::CommerceError;
use thiserror::Error;

use crate::email::EmailError;

/// Errors returned by the headless logic handles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadlessError {
    /// Add to cart was requested while the card cannot add anything.
    ///
    /// The add button should already be disabled in this state.
    #[error("No purchasable variant selected")]
    NoVariantSelected,

    /// The newsletter email failed local validation; nothing was sent.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The handle was unmounted.
    #[error("Component is no longer mounted")]
    Unmounted,

    /// Catalog data could not be used.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
