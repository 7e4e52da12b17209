//! Preview a product card.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_headless::sections::render_product_card;
use storefront_headless::{CartOutcome, ProductCardLogic, ProductCardView};

use super::services::DryRunCart;
use super::{parse_selection, PreviewArgs};
use crate::context::Context;
use crate::output::{flag, stock_badge};

/// Run the preview command.
pub async fn run(args: PreviewArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let product = catalog.product_by_slug(&args.slug)?.clone();

    let cart = Arc::new(DryRunCart {
        fail_with: args.cart_fail.clone(),
    });
    let mut card = ProductCardLogic::mount(product, cart)
        .with_context(|| format!("Product '{}' has invalid catalog data", args.slug))?;
    if let Some(formatter) = ctx.display_formatter()? {
        card = card.with_formatter(formatter);
    }

    for raw in &args.selections {
        let (axis, value) = parse_selection(raw)?;
        if card.handle_option_change(axis, value) {
            ctx.output.debug(&format!("Selected {}={}", axis, value));
        } else {
            ctx.output
                .warn(&format!("{}={} is not available with the current selection", axis, value));
        }
    }

    if args.add_to_cart {
        match card.handle_add_to_cart() {
            Ok(Some(task)) => match task.await {
                CartOutcome::Added => ctx.output.success("Added to cart"),
                CartOutcome::Failed(reason) => ctx.output.warn(&format!("Cart failed: {}", reason)),
                CartOutcome::Discarded => {}
            },
            Ok(None) => ctx.output.debug("Add to cart already pending"),
            Err(err) => ctx.output.warn(&format!("Cannot add to cart: {}", err)),
        }
    }

    let view = card.view();
    card.unmount();

    if ctx.output.is_json() {
        ctx.output.json(&view);
    } else if args.html {
        println!("{}", render_product_card(&view, &ctx.config.labels.card));
    } else {
        print_card(&view, ctx);
    }

    Ok(())
}

fn print_card(view: &ProductCardView, ctx: &Context) {
    ctx.output.header(&view.title);

    if let Some(description) = &view.description {
        ctx.output.info(description);
    }

    if let Some(price) = &view.formatted_price {
        ctx.output.kv("price", price);
    }
    if let Some(compare_at) = &view.formatted_compare_at {
        ctx.output.kv("compare at", compare_at);
    }
    if let Some(pct) = view.discount_pct {
        ctx.output.kv("discount", &format!("{}%", pct));
    }
    if let Some(name) = &view.variant_name {
        ctx.output.kv("variant", name);
    }
    ctx.output.kv("stock", &stock_badge(view.in_stock));
    ctx.output.kv("can add to cart", &flag(view.can_add_to_cart));
    ctx.output.kv("featured", &flag(view.featured));
    if let Some(error) = &view.cart_error {
        ctx.output.kv("cart error", error);
    }

    for axis in &view.options {
        ctx.output.info(&axis.name);
        for value in &axis.values {
            let mut marks = Vec::new();
            if value.selected {
                marks.push("selected");
            }
            if !value.available {
                marks.push("unavailable");
            } else if value.sold_out {
                marks.push("sold out");
            }

            if marks.is_empty() {
                ctx.output.list_item(&value.value);
            } else {
                ctx.output
                    .list_item(&format!("{} ({})", value.value, marks.join(", ")));
            }
        }
    }
}
