//! Headless storefront logic.
//!
//! Each presentational component of the storefront consumes one of these
//! logic handles and renders from its view snapshot:
//!
//! - `ProductCardLogic` - option selection, pricing, stock and add-to-cart
//! - `NewsletterLogic` - email opt-in state machine
//! - `StorefrontIndexLogic` - collection filter and product card mounting
//!
//! Network calls go through the injected [`CartService`] and
//! [`SubscriptionService`]. They are handed back to the caller as futures so
//! the host event loop decides where they run; a handle that has been
//! unmounted ignores whatever those futures return.
//!
//! The `sections` module renders the views to HTML.

mod collaborators;
mod email;
mod error;
mod lifecycle;
mod newsletter;
mod product_card;
mod storefront;

pub mod sections;

pub use collaborators::*;
pub use email::{Email, EmailError};
pub use error::HeadlessError;
pub use lifecycle::{ChangeObserver, Mount};
pub use newsletter::{NewsletterLogic, NewsletterView, SubscribeOutcome, SubscribeTask, SubscriptionStatus};
pub use product_card::{AddToCartTask, CartOutcome, ProductCardLogic, ProductCardView};
pub use storefront::{CardSlot, StorefrontIndexLogic};

// Re-export the domain crate for convenience
pub use storefront_commerce;
