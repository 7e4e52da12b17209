//! Render the storefront home page.

use std::sync::Arc;

use anyhow::{bail, Result};
use serde::Serialize;
use storefront_commerce::CollectionId;
use storefront_headless::sections::render_index;
use storefront_headless::{CardSlot, NewsletterLogic, StorefrontIndexLogic};

use super::services::{DryRunCart, DryRunSubscriptions};
use super::IndexArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct GridEntry {
    slug: String,
    title: String,
    price: Option<String>,
    in_stock: bool,
    /// Set when the product failed validation.
    error: Option<String>,
}

/// Run the index command.
pub async fn run(args: IndexArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let mut index = StorefrontIndexLogic::from_catalog(catalog);

    if let Some(id) = &args.collection {
        if !index.view_collection_products(&CollectionId::new(id.as_str())) {
            bail!("Unknown collection: {}", id);
        }
    }

    let formatter = ctx.display_formatter()?;
    let cards: Vec<CardSlot> = index
        .mount_cards(Arc::new(DryRunCart::default()))
        .into_iter()
        .map(|slot| match (slot, &formatter) {
            (CardSlot::Ready(card), Some(formatter)) => {
                CardSlot::Ready(card.with_formatter(formatter.clone()))
            }
            (slot, _) => slot,
        })
        .collect();

    if args.html {
        let newsletter = NewsletterLogic::new(Arc::new(DryRunSubscriptions::default()));
        println!(
            "{}",
            render_index(&index, &cards, &newsletter.view(), &ctx.config.labels)
        );
        return Ok(());
    }

    let entries: Vec<GridEntry> = cards
        .iter()
        .map(|slot| match slot {
            CardSlot::Ready(card) => {
                let view = card.view();
                GridEntry {
                    slug: view.slug,
                    title: view.title,
                    price: view.formatted_price,
                    in_stock: view.in_stock,
                    error: None,
                }
            }
            CardSlot::Unavailable { product, reason } => GridEntry {
                slug: product.slug.clone(),
                title: product.title.clone(),
                price: None,
                in_stock: false,
                error: Some(reason.to_string()),
            },
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    let heading = index
        .heading()
        .unwrap_or(ctx.config.labels.index.featured_heading.as_str());
    ctx.output.header(heading);

    if entries.is_empty() {
        ctx.output.info(&ctx.config.labels.index.empty);
    }

    for entry in &entries {
        match &entry.error {
            Some(error) => ctx.output.warn(&format!("{} ({}): {}", entry.title, entry.slug, error)),
            None => ctx.output.list_item(&format!(
                "{} ({})  {}  {}",
                entry.title,
                entry.slug,
                entry.price.as_deref().unwrap_or("-"),
                stock_badge(entry.in_stock)
            )),
        }
    }

    if !index.collections().is_empty() && index.selected_collection().is_none() {
        ctx.output.info("");
        ctx.output.info(&ctx.config.labels.index.collections_heading);
        for collection in index.collections() {
            ctx.output.list_item(&format!(
                "{} ({}, {} product(s))",
                collection.name,
                collection.id,
                collection.len()
            ));
        }
    }

    Ok(())
}
