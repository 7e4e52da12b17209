//! External services the headless logic calls into.

use async_trait::async_trait;
use serde::Serialize;
use storefront_commerce::{ProductId, VariantId};

use crate::email::Email;

/// Failure reported by a collaborator.
///
/// The reason, when present, is shown to the shopper verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .reason.as_deref().unwrap_or(Self::DEFAULT_REASON))]
pub struct CollaboratorError {
    pub reason: Option<String>,
}

impl CollaboratorError {
    /// Shown when the service gives no reason.
    pub const DEFAULT_REASON: &'static str = "The service is unavailable, please try again";

    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// A failure without a reason.
    pub fn unexplained() -> Self {
        Self { reason: None }
    }
}

/// Line added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Absent for products sold without variants.
    pub variant_id: Option<VariantId>,
    pub quantity: u32,
}

/// Newsletter opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    pub email: Email,
}

/// Cart backend.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add a line to the shopper's cart.
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<(), CollaboratorError>;
}

/// Newsletter backend.
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    /// Subscribe an email address.
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), CollaboratorError>;
}
