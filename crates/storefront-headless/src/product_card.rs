//! Product card logic.
//!
//! Owns the shopper's option selection for one product and everything
//! derived from it: availability, the matched variant, display prices,
//! stock and add-to-cart eligibility. Every option change recomputes the
//! derived state in the same step, so a view never mixes a new selection
//! with stale availability.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::BoxFuture;
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::money::{self, MoneyFormatter};
use storefront_commerce::pricing::{self, PriceView};
use storefront_commerce::variants::{AxisState, IndexedProduct, MatchResult, Selection};
use storefront_commerce::{CommerceError, ProductId, VariantId};

use crate::collaborators::{AddToCartRequest, CartService, CollaboratorError};
use crate::error::HeadlessError;
use crate::lifecycle::{lock, ChangeObserver, Mount};

/// Pending add-to-cart call, to be driven by the host executor.
pub type AddToCartTask = BoxFuture<'static, CartOutcome>;

/// How an add-to-cart call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    Added,
    /// The cart service failed; the message is shown on the card.
    Failed(String),
    /// The card was unmounted before the call returned.
    Discarded,
}

#[derive(Debug)]
struct CardState {
    selection: Selection,
    matched: MatchResult,
    price: Option<PriceView>,
    is_adding_to_cart: bool,
    cart_error: Option<String>,
    revision: u64,
}

impl CardState {
    fn bump(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

/// Logic handle for one product card.
///
/// Clones share the same card; separate cards never share state.
#[derive(Clone)]
pub struct ProductCardLogic {
    product: Arc<IndexedProduct>,
    state: Arc<Mutex<CardState>>,
    cart: Arc<dyn CartService>,
    format_money: MoneyFormatter,
    observer: Option<Arc<dyn ChangeObserver>>,
    mount: Mount,
}

impl ProductCardLogic {
    /// Validate the product and mount a card with nothing selected.
    pub fn mount(product: Product, cart: Arc<dyn CartService>) -> Result<Self, CommerceError> {
        let indexed = IndexedProduct::new(product)?;
        Ok(Self::from_indexed(Arc::new(indexed), cart))
    }

    /// Mount a card for an already validated product.
    pub fn from_indexed(product: Arc<IndexedProduct>, cart: Arc<dyn CartService>) -> Self {
        let selection = Selection::new();
        let matched = product.resolve(&selection);
        let price = pricing::derive(product.product(), &matched);
        let format_money = money::formatter(product.product().currency);

        tracing::debug!(product_id = %product.product().id, "product card mounted");

        Self {
            product,
            state: Arc::new(Mutex::new(CardState {
                selection,
                matched,
                price,
                is_adding_to_cart: false,
                cart_error: None,
                revision: 0,
            })),
            cart,
            format_money,
            observer: None,
            mount: Mount::new(),
        }
    }

    /// Replace the currency formatter.
    pub fn with_formatter(mut self, format_money: MoneyFormatter) -> Self {
        self.format_money = format_money;
        self
    }

    /// Register the change observer.
    pub fn with_observer(mut self, observer: Arc<dyn ChangeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn product(&self) -> &Product {
        self.product.product()
    }

    pub fn selection(&self) -> Selection {
        self.state().selection.clone()
    }

    pub fn match_result(&self) -> MatchResult {
        self.state().matched.clone()
    }

    pub fn price(&self) -> Option<PriceView> {
        self.state().price
    }

    pub fn revision(&self) -> u64 {
        self.state().revision
    }

    pub fn is_adding_to_cart(&self) -> bool {
        self.state().is_adding_to_cart
    }

    pub fn cart_error(&self) -> Option<String> {
        self.state().cart_error.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Whether choosing `value` on `axis` leaves some variant reachable.
    pub fn is_value_available(&self, axis: &str, value: &str) -> bool {
        let state = self.state();
        self.product.is_value_available(axis, value, &state.selection)
    }

    /// Per-axis value states for the current selection.
    pub fn option_states(&self) -> Vec<AxisState> {
        let state = self.state();
        self.product.option_states(&state.selection)
    }

    /// Choose `value` on `axis`.
    ///
    /// Unavailable values are ignored and return false. Otherwise the
    /// previous value on the axis is replaced, the match and prices are
    /// recomputed, and the observer is notified.
    pub fn handle_option_change(&self, axis: &str, value: &str) -> bool {
        if !self.mount.is_mounted() {
            tracing::debug!(axis, value, "option change on unmounted card ignored");
            return false;
        }

        let product = self.product.product();
        let revision = {
            let mut state = self.state();
            if !self.product.is_value_available(axis, value, &state.selection) {
                tracing::debug!(product_id = %product.id, axis, value, "unavailable option value ignored");
                return false;
            }

            state.selection.set(axis, value);
            state.matched = self.product.resolve(&state.selection);
            state.price = pricing::derive(product, &state.matched);

            if product.has_variants() && state.matched == MatchResult::NoMatch {
                tracing::warn!(
                    product_id = %product.id,
                    axis,
                    value,
                    "selection matches no variant"
                );
            }

            state.bump()
        };

        self.notify(revision);
        true
    }

    /// Whether the resolved selection has stock.
    ///
    /// A partial selection counts as in stock when any candidate is.
    pub fn in_stock(&self) -> bool {
        resolved_in_stock(self.product(), &self.state().matched)
    }

    /// Whether the add button is enabled.
    ///
    /// Requires an exact variant (or a product without options) with stock.
    pub fn can_add_to_cart(&self) -> bool {
        cart_request(self.product(), &self.state().matched).is_some()
    }

    /// Start adding the resolved variant to the cart.
    ///
    /// Marks the card as adding and returns the task performing the call.
    /// Returns `Ok(None)` while a previous call is still pending, so a
    /// repeated click never reaches the cart twice. When nothing can be
    /// added, returns `NoVariantSelected` without touching state.
    pub fn handle_add_to_cart(&self) -> Result<Option<AddToCartTask>, HeadlessError> {
        if !self.mount.is_mounted() {
            return Err(HeadlessError::Unmounted);
        }

        let product = self.product.product();
        let (request, revision) = {
            let mut state = self.state();
            if state.is_adding_to_cart {
                tracing::debug!(product_id = %product.id, "add to cart already pending, ignored");
                return Ok(None);
            }

            let Some(request) = cart_request(product, &state.matched) else {
                tracing::warn!(
                    product_id = %product.id,
                    exact = state.matched.is_exact(),
                    "add to cart requested without a purchasable variant"
                );
                return Err(HeadlessError::NoVariantSelected);
            };

            state.is_adding_to_cart = true;
            state.cart_error = None;
            (request, state.bump())
        };
        self.notify(revision);

        tracing::info!(
            product_id = %request.product_id,
            variant_id = ?request.variant_id.as_ref().map(VariantId::as_str),
            "adding to cart"
        );

        let card = self.clone();
        Ok(Some(Box::pin(async move {
            let result = card.cart.add_to_cart(request).await;
            card.finish_add_to_cart(result)
        })))
    }

    fn finish_add_to_cart(&self, result: Result<(), CollaboratorError>) -> CartOutcome {
        if !self.mount.is_mounted() {
            tracing::debug!(product_id = %self.product().id, "card unmounted, add-to-cart result discarded");
            return CartOutcome::Discarded;
        }

        let (outcome, revision) = {
            let mut state = self.state();
            state.is_adding_to_cart = false;

            let outcome = match result {
                Ok(()) => {
                    state.cart_error = None;
                    CartOutcome::Added
                }
                Err(err) => {
                    tracing::warn!(product_id = %self.product().id, error = %err, "add to cart failed");
                    let message = err.to_string();
                    state.cart_error = Some(message.clone());
                    CartOutcome::Failed(message)
                }
            };

            (outcome, state.bump())
        };

        self.notify(revision);
        outcome
    }

    /// Destroy the card. Pending tasks finish as `Discarded`.
    pub fn unmount(&self) {
        if self.mount.unmount() {
            tracing::debug!(product_id = %self.product().id, "product card unmounted");
        }
    }

    /// Snapshot everything the presentational layer renders.
    pub fn view(&self) -> ProductCardView {
        let product = self.product.product();
        let state = self.state();

        let matched = &state.matched;
        let image = matched
            .representative()
            .and_then(|v| v.image.as_deref())
            .or_else(|| product.primary_image())
            .map(str::to_string);

        let price = state.price;
        let formatted_price = price.map(|p| (self.format_money)(p.price));
        let formatted_compare_at = price
            .and_then(|p| p.strike_through())
            .map(|cap| (self.format_money)(cap));

        ProductCardView {
            product_id: product.id.clone(),
            slug: product.slug.clone(),
            title: product.title.clone(),
            description: product.plain_description(),
            featured: product.featured,
            image,
            has_variants: product.has_options(),
            options: self.product.option_states(&state.selection),
            selection: state.selection.clone(),
            variant_id: matched.exact().map(|v| v.id.clone()),
            variant_name: matched.exact().map(|v| v.build_name(&product.options)),
            price,
            formatted_price,
            formatted_compare_at,
            discount_pct: price.and_then(|p| p.discount_pct),
            in_stock: resolved_in_stock(product, matched),
            can_add_to_cart: cart_request(product, matched).is_some(),
            is_adding_to_cart: state.is_adding_to_cart,
            cart_error: state.cart_error.clone(),
            revision: state.revision,
        }
    }

    fn state(&self) -> MutexGuard<'_, CardState> {
        lock(&self.state)
    }

    fn notify(&self, revision: u64) {
        if let Some(observer) = &self.observer {
            observer.on_change(revision);
        }
    }
}

impl std::fmt::Debug for ProductCardLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCardLogic")
            .field("product_id", &self.product().id)
            .field("state", &*self.state())
            .field("mounted", &self.mount.is_mounted())
            .finish_non_exhaustive()
    }
}

/// Stock of the resolved selection.
fn resolved_in_stock(product: &Product, matched: &MatchResult) -> bool {
    match matched {
        MatchResult::Exact(variant) => variant.is_purchasable(),
        MatchResult::Partial(candidates) => candidates.iter().any(|v| v.is_purchasable()),
        MatchResult::NoMatch => !product.has_variants() && product.stock.is_available(),
    }
}

/// The cart line for the resolved selection, if it can be added.
fn cart_request(product: &Product, matched: &MatchResult) -> Option<AddToCartRequest> {
    let variant_id = match matched {
        MatchResult::Exact(variant) if variant.is_purchasable() => Some(variant.id.clone()),
        MatchResult::Exact(_) => return None,
        _ if !product.has_options() && !product.has_variants() && product.stock.is_available() => None,
        _ => return None,
    };

    Some(AddToCartRequest {
        product_id: product.id.clone(),
        variant_id,
        quantity: 1,
    })
}

/// Immutable snapshot of a product card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub slug: String,
    pub title: String,
    /// Description with markup removed.
    pub description: Option<String>,
    pub featured: bool,
    /// Matched variant image, else the product's first image.
    pub image: Option<String>,
    /// Whether option pickers are shown.
    pub has_variants: bool,
    pub options: Vec<AxisState>,
    pub selection: Selection,
    /// Set only for an exact match.
    pub variant_id: Option<VariantId>,
    pub variant_name: Option<String>,
    pub price: Option<PriceView>,
    pub formatted_price: Option<String>,
    /// Only present when the product is on sale.
    pub formatted_compare_at: Option<String>,
    pub discount_pct: Option<u32>,
    pub in_stock: bool,
    pub can_add_to_cart: bool,
    pub is_adding_to_cart: bool,
    pub cart_error: Option<String>,
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use storefront_commerce::catalog::{OptionAxis, Stock, Variant};
    use storefront_commerce::InvalidVariantReason;

    #[derive(Default)]
    struct CountingCart {
        calls: AtomicUsize,
        fail_with: Option<String>,
        requests: Mutex<Vec<AddToCartRequest>>,
    }

    impl CountingCart {
        fn failing(reason: &str) -> Self {
            Self {
                fail_with: Some(reason.to_string()),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl CartService for CountingCart {
        async fn add_to_cart(&self, request: AddToCartRequest) -> Result<(), CollaboratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request);
            match &self.fail_with {
                Some(reason) => Err(CollaboratorError::new(reason.clone())),
                None => Ok(()),
            }
        }
    }

    fn caps() -> Product {
        let mut product = Product::new("cap", "cap", "Cap");
        product.description = Some("<p>Wool <b>cap</b></p>".to_string());
        product.images = vec!["cap.jpg".to_string()];
        product.base_price = Some(2000);
        product.base_compare_at_price = Some(2500);
        product.options = vec![
            OptionAxis::new("Size", ["S", "M", "L"]),
            OptionAxis::new("Color", ["Red", "Blue"]).with_swatch("Red", "#d00"),
        ];
        product.variants = vec![
            Variant::new("s-red")
                .with_option("Size", "S")
                .with_option("Color", "Red")
                .with_stock(Stock::Limited(0)),
            Variant::new("s-blue")
                .with_option("Size", "S")
                .with_option("Color", "Blue")
                .with_stock(Stock::Limited(5))
                .with_price(1800),
            Variant::new("m-red")
                .with_option("Size", "M")
                .with_option("Color", "Red")
                .with_stock(Stock::Limited(3)),
        ];
        product
    }

    fn sticker(stock: Stock) -> Product {
        let mut product = Product::new("sticker", "sticker", "Sticker");
        product.base_price = Some(300);
        product.stock = stock;
        product
    }

    fn card(product: Product, cart: Arc<CountingCart>) -> ProductCardLogic {
        ProductCardLogic::mount(product, cart).unwrap()
    }

    #[test]
    fn test_mount_rejects_invalid_variants() {
        let mut product = caps();
        product.variants.push(Variant::new("l").with_option("Size", "L"));

        let err = ProductCardLogic::mount(product, Arc::new(CountingCart::default())).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidVariant {
                reason: InvalidVariantReason::MissingAxis(_),
                ..
            }
        ));
    }

    #[test]
    fn test_size_then_color_walkthrough() {
        let card = card(caps(), Arc::new(CountingCart::default()));

        assert!(card.handle_option_change("Size", "S"));
        assert!(card.is_value_available("Color", "Red"));
        assert!(card.is_value_available("Color", "Blue"));

        let view = card.view();
        let color = &view.options[1];
        let red = color.value("Red").unwrap();
        assert!(red.available);
        assert!(red.sold_out);
        assert_eq!(red.swatch.as_deref(), Some("#d00"));
        assert!(!color.value("Blue").unwrap().sold_out);

        assert!(card.handle_option_change("Color", "Red"));
        let matched = card.match_result();
        assert_eq!(matched.exact().map(|v| v.id.as_str()), Some("s-red"));
        assert!(!card.in_stock());
        assert!(!card.can_add_to_cart());
    }

    #[test]
    fn test_unavailable_value_is_ignored() {
        let observed = Arc::new(AtomicU64::new(0));
        let seen = observed.clone();
        let card = card(caps(), Arc::new(CountingCart::default())).with_observer(Arc::new(
            move |revision: u64| {
                seen.store(revision, Ordering::SeqCst);
            },
        ));

        assert!(card.handle_option_change("Size", "M"));
        assert_eq!(observed.load(Ordering::SeqCst), 1);

        assert!(!card.handle_option_change("Color", "Blue"));
        assert!(!card.handle_option_change("Size", "L"));
        assert_eq!(card.selection().get("Color"), None);
        assert_eq!(card.revision(), 1);
        assert_eq!(observed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_changing_one_axis_keeps_others() {
        let card = card(caps(), Arc::new(CountingCart::default()));
        card.handle_option_change("Size", "S");
        card.handle_option_change("Color", "Blue");
        assert!(card.can_add_to_cart());

        // M only comes in Red; Blue was the other choice.
        assert!(!card.handle_option_change("Size", "M"));

        card.handle_option_change("Color", "Red");
        assert!(card.handle_option_change("Size", "M"));
        assert_eq!(card.match_result().exact().map(|v| v.id.as_str()), Some("m-red"));
        assert!(card.can_add_to_cart());
    }

    #[test]
    fn test_partial_selection() {
        let card = card(caps(), Arc::new(CountingCart::default()));
        card.handle_option_change("Size", "S");

        let matched = card.match_result();
        assert!(!matched.is_exact());
        assert_eq!(matched.candidates().len(), 2);
        // s-blue has stock
        assert!(card.in_stock());
        assert!(!card.can_add_to_cart());

        // Prices preview the first candidate, s-red, on base prices.
        let price = card.price().unwrap();
        assert_eq!(price.price, 2000);
        assert_eq!(price.discount_pct, Some(20));
    }

    #[test]
    fn test_view_snapshot() {
        let card = card(caps(), Arc::new(CountingCart::default()));
        card.handle_option_change("Size", "S");
        card.handle_option_change("Color", "Blue");

        let view = card.view();
        assert_eq!(view.title, "Cap");
        assert_eq!(view.description.as_deref(), Some("Wool cap"));
        assert_eq!(view.image.as_deref(), Some("cap.jpg"));
        assert!(view.has_variants);
        assert_eq!(view.variant_id.as_ref().map(VariantId::as_str), Some("s-blue"));
        assert_eq!(view.variant_name.as_deref(), Some("S / Blue"));
        assert_eq!(view.formatted_price.as_deref(), Some("$18.00"));
        assert_eq!(view.formatted_compare_at.as_deref(), Some("$25.00"));
        assert_eq!(view.discount_pct, Some(28));
        assert!(view.in_stock);
        assert!(view.can_add_to_cart);
        assert_eq!(view.revision, 2);
    }

    #[test]
    fn test_custom_formatter() {
        let formatter: MoneyFormatter = Arc::new(|amount| format!("{amount} cents"));
        let card = card(sticker(Stock::Unlimited), Arc::new(CountingCart::default()))
            .with_formatter(formatter);

        assert_eq!(card.view().formatted_price.as_deref(), Some("300 cents"));
    }

    #[test]
    fn test_variantless_product_stock() {
        let card_with_stock = card(sticker(Stock::Limited(2)), Arc::new(CountingCart::default()));
        assert!(card_with_stock.in_stock());
        assert!(card_with_stock.can_add_to_cart());
        assert!(!card_with_stock.view().has_variants);

        let sold_out = card(sticker(Stock::Limited(0)), Arc::new(CountingCart::default()));
        assert!(!sold_out.in_stock());
        assert!(!sold_out.can_add_to_cart());
        assert_eq!(
            sold_out.handle_add_to_cart().err(),
            Some(HeadlessError::NoVariantSelected)
        );
    }

    #[tokio::test]
    async fn test_add_exact_variant_to_cart() {
        let cart = Arc::new(CountingCart::default());
        let card = card(caps(), cart.clone());
        card.handle_option_change("Size", "M");
        card.handle_option_change("Color", "Red");

        let task = card.handle_add_to_cart().unwrap().unwrap();
        assert!(card.is_adding_to_cart());

        assert_eq!(task.await, CartOutcome::Added);
        assert!(!card.is_adding_to_cart());
        assert_eq!(cart.calls.load(Ordering::SeqCst), 1);

        let requests = cart.requests.lock().unwrap();
        assert_eq!(requests[0].product_id.as_str(), "cap");
        assert_eq!(requests[0].variant_id.as_ref().map(VariantId::as_str), Some("m-red"));
        assert_eq!(requests[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_add_variantless_product_without_variant_id() {
        let cart = Arc::new(CountingCart::default());
        let card = card(sticker(Stock::Unlimited), cart.clone());

        let task = card.handle_add_to_cart().unwrap().unwrap();
        assert_eq!(task.await, CartOutcome::Added);
        assert_eq!(cart.requests.lock().unwrap()[0].variant_id, None);
    }

    #[tokio::test]
    async fn test_incomplete_selection_is_rejected() {
        let cart = Arc::new(CountingCart::default());
        let card = card(caps(), cart.clone());
        card.handle_option_change("Size", "S");

        let revision = card.revision();
        assert_eq!(
            card.handle_add_to_cart().err(),
            Some(HeadlessError::NoVariantSelected)
        );
        assert!(!card.is_adding_to_cart());
        assert_eq!(card.revision(), revision);
        assert_eq!(cart.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cart_failure_is_shown_and_retryable() {
        let cart = Arc::new(CountingCart::failing("Cart is full"));
        let card = card(sticker(Stock::Unlimited), cart.clone());

        let outcome = card.handle_add_to_cart().unwrap().unwrap().await;
        assert_eq!(outcome, CartOutcome::Failed("Cart is full".to_string()));
        assert_eq!(card.cart_error().as_deref(), Some("Cart is full"));
        assert!(!card.is_adding_to_cart());

        // Retrying clears the previous error until the call returns.
        let task = card.handle_add_to_cart().unwrap().unwrap();
        assert_eq!(card.cart_error(), None);
        task.await;
        assert_eq!(cart.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unmount_discards_pending_result() {
        let cart = Arc::new(CountingCart::failing("Cart is full"));
        let observed = Arc::new(AtomicUsize::new(0));
        let seen = observed.clone();
        let card = card(sticker(Stock::Unlimited), cart.clone()).with_observer(Arc::new(
            move |_revision: u64| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
        ));

        let task = card.handle_add_to_cart().unwrap().unwrap();
        let before = card.view();
        let notifications = observed.load(Ordering::SeqCst);

        card.unmount();
        assert_eq!(task.await, CartOutcome::Discarded);

        assert_eq!(card.view(), before);
        assert_eq!(observed.load(Ordering::SeqCst), notifications);
        assert_eq!(card.handle_add_to_cart().err(), Some(HeadlessError::Unmounted));
        assert!(!card.handle_option_change("Size", "S"));
    }

    #[tokio::test]
    async fn test_repeated_click_while_pending_is_ignored() {
        let cart = Arc::new(CountingCart::default());
        let card = card(sticker(Stock::Unlimited), cart.clone());

        let first = card.handle_add_to_cart().unwrap().unwrap();
        let revision = card.revision();
        assert!(card.handle_add_to_cart().unwrap().is_none());
        assert_eq!(card.revision(), revision);

        assert_eq!(first.await, CartOutcome::Added);
        assert_eq!(cart.calls.load(Ordering::SeqCst), 1);

        // Once settled, the card accepts a new click.
        let again = card.handle_add_to_cart().unwrap().unwrap();
        again.await;
        assert_eq!(cart.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_variant_image_overrides_product_image() {
        let mut product = caps();
        product.variants[0].image = Some("s-red.jpg".to_string());
        product.variants[1] = product.variants[1].clone().with_image("s-blue.jpg");
        let card = card(product, Arc::new(CountingCart::default()));

        // Partial selections preview the first candidate, s-red.
        card.handle_option_change("Size", "S");
        assert_eq!(card.view().image.as_deref(), Some("s-red.jpg"));

        card.handle_option_change("Color", "Blue");
        assert_eq!(card.view().image.as_deref(), Some("s-blue.jpg"));

        // m-red has no image of its own.
        card.handle_option_change("Color", "Red");
        card.handle_option_change("Size", "M");
        assert_eq!(card.match_result().exact().map(|v| v.id.as_str()), Some("m-red"));
        assert_eq!(card.view().image.as_deref(), Some("cap.jpg"));
    }

    #[test]
    fn test_image_falls_back_to_first_product_image() {
        let mut product = caps();
        product.images.push("cap-back.jpg".to_string());
        let card = card(product, Arc::new(CountingCart::default()));

        assert_eq!(card.view().image.as_deref(), Some("cap.jpg"));
        card.handle_option_change("Size", "S");
        card.handle_option_change("Color", "Blue");
        assert_eq!(card.view().image.as_deref(), Some("cap.jpg"));

        let mut bare = caps();
        bare.images.clear();
        let bare = ProductCardLogic::mount(bare, Arc::new(CountingCart::default())).unwrap();
        assert_eq!(bare.view().image, None);
    }

    #[test]
    fn test_cards_do_not_share_state() {
        let cart = Arc::new(CountingCart::default());
        let first = card(caps(), cart.clone());
        let second = card(caps(), cart);

        first.handle_option_change("Size", "S");
        assert!(second.selection().is_empty());

        let same_card = first.clone();
        assert_eq!(same_card.selection().get("Size"), Some("S"));
    }
}
