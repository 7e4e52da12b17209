//! Storefront home page renderer.

use super::{escape_html, render_collection_card, render_newsletter, render_product_card};
use super::{render_unavailable_card, Labels};
use crate::newsletter::NewsletterView;
use crate::storefront::{CardSlot, StorefrontIndexLogic};

/// Render the home page: collections, the product grid and the newsletter.
///
/// `cards` should come from [`StorefrontIndexLogic::mount_cards`] so they
/// follow the current collection filter.
pub fn render_index(
    index: &StorefrontIndexLogic,
    cards: &[CardSlot],
    newsletter: &NewsletterView,
    labels: &Labels,
) -> String {
    let collections = if index.collections().is_empty() {
        String::new()
    } else {
        let tiles: String = index
            .collections()
            .iter()
            .map(|c| render_collection_card(c, &labels.index))
            .collect();
        format!(
            r#"<section id="collections" class="collections" data-section="collections">
    <h2>{heading}</h2>
    <div class="collections__grid">{tiles}</div>
</section>"#,
            heading = escape_html(&labels.index.collections_heading),
        )
    };

    let heading = index
        .heading()
        .unwrap_or(labels.index.featured_heading.as_str());

    let show_all = if index.selected_collection().is_some() {
        format!(
            r#"<button type="button" class="btn-show-all">{}</button>"#,
            escape_html(&labels.index.show_all)
        )
    } else {
        String::new()
    };

    let grid = if cards.is_empty() {
        format!(
            r#"<p class="products__empty">{}</p>"#,
            escape_html(&labels.index.empty)
        )
    } else {
        let rendered: String = cards
            .iter()
            .map(|slot| match slot {
                CardSlot::Ready(card) => render_product_card(&card.view(), &labels.card),
                CardSlot::Unavailable { product, .. } => {
                    render_unavailable_card(product, &labels.card)
                }
            })
            .collect();
        format!(r#"<div class="products__grid">{rendered}</div>"#)
    };

    format!(
        r#"<main class="storefront">
{collections}
<section id="products" class="products" data-section="products">
    <div class="products__header">
        <h2>{heading}</h2>
        {show_all}
    </div>
    {grid}
</section>
{newsletter}
</main>"#,
        heading = escape_html(heading),
        newsletter = render_newsletter(newsletter, &labels.newsletter),
    )
}
