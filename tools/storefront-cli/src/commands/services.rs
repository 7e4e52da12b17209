//! Dry-run collaborators that log instead of calling a backend.

use async_trait::async_trait;
use storefront_headless::{
    AddToCartRequest, CartService, CollaboratorError, SubscribeRequest, SubscriptionService,
};

/// Cart that accepts every line, or rejects every line with a fixed reason.
#[derive(Debug, Default)]
pub struct DryRunCart {
    pub fail_with: Option<String>,
}

#[async_trait]
impl CartService for DryRunCart {
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<(), CollaboratorError> {
        tracing::info!(
            product_id = %request.product_id,
            variant_id = ?request.variant_id.as_ref().map(|id| id.as_str()),
            quantity = request.quantity,
            "dry-run add to cart"
        );

        match &self.fail_with {
            Some(reason) => Err(CollaboratorError::new(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Newsletter service that accepts every address, or rejects with a fixed reason.
#[derive(Debug, Default)]
pub struct DryRunSubscriptions {
    pub fail_with: Option<String>,
}

#[async_trait]
impl SubscriptionService for DryRunSubscriptions {
    async fn subscribe(&self, request: SubscribeRequest) -> Result<(), CollaboratorError> {
        tracing::info!(email = %request.email, "dry-run subscribe");

        match &self.fail_with {
            Some(reason) => Err(CollaboratorError::new(reason.clone())),
            None => Ok(()),
        }
    }
}
