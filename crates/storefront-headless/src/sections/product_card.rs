//! Product card renderer.

use storefront_commerce::catalog::Product;
use storefront_commerce::variants::AxisState;

use super::{escape_html, CardLabels};
use crate::product_card::ProductCardView;

/// Render a product card.
///
/// Option values that cannot lead to any variant are left out; sold-out
/// ones are shown and marked.
pub fn render_product_card(view: &ProductCardView, labels: &CardLabels) -> String {
    let slug = escape_html(&view.slug);
    let title = escape_html(&view.title);

    let media = match &view.image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="product-card__image">"#,
            escape_html(src),
            title
        ),
        None => format!(
            r#"<div class="product-card__placeholder">{}</div>"#,
            escape_html(&labels.no_image)
        ),
    };

    let mut badges = String::new();
    if let Some(pct) = view.discount_pct {
        badges.push_str(&format!(r#"<span class="badge badge--sale">-{pct}%</span>"#));
    }
    if view.featured {
        badges.push_str(&format!(
            r#"<span class="badge badge--featured">{}</span>"#,
            escape_html(&labels.featured)
        ));
    }
    if !view.in_stock {
        badges.push_str(&format!(
            r#"<span class="badge badge--sold-out">{}</span>"#,
            escape_html(&labels.sold_out)
        ));
    }

    let description = view
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(r#"<p class="product-card__description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let options = if view.has_variants {
        let axes: String = view.options.iter().map(render_axis).collect();
        format!(r#"<div class="product-card__options">{axes}</div>"#)
    } else {
        String::new()
    };

    let price = view
        .formatted_price
        .as_deref()
        .map(|p| format!(r#"<span class="price">{}</span>"#, escape_html(p)))
        .unwrap_or_default();
    let compare_at = view
        .formatted_compare_at
        .as_deref()
        .map(|p| format!(r#"<span class="price price--compare">{}</span>"#, escape_html(p)))
        .unwrap_or_default();

    let button_label = if view.is_adding_to_cart {
        &labels.adding
    } else if view.in_stock {
        &labels.add_to_cart
    } else {
        &labels.sold_out
    };
    let disabled = if view.can_add_to_cart && !view.is_adding_to_cart {
        ""
    } else {
        " disabled"
    };

    let cart_error = view
        .cart_error
        .as_deref()
        .map(|e| format!(r#"<p class="product-card__error" role="alert">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-product="{slug}">
    <a href="/products/{slug}" class="product-card__link">
        <div class="product-card__media">
            {media}
            <div class="product-card__badges">{badges}</div>
        </div>
        <div class="product-card__body">
            <h3 class="product-card__title">{title}</h3>
            {description}
        </div>
    </a>
    {options}
    <div class="product-card__footer">
        <div class="product-card__prices">{price}{compare_at}</div>
        <button type="button" class="btn-add-to-cart"{disabled}>{button_label}</button>
    </div>
    {cart_error}
</article>"#,
        button_label = escape_html(button_label),
    )
}

fn render_axis(axis: &AxisState) -> String {
    let name = escape_html(&axis.name);
    let has_selection = axis.selected_value().is_some();

    let buttons: String = axis
        .available_values()
        .map(|state| {
            let value = escape_html(&state.value);
            let mut class = String::from("option");
            if state.selected {
                class.push_str(" option--selected");
            } else if has_selection {
                class.push_str(" option--dimmed");
            }
            if state.sold_out {
                class.push_str(" option--sold-out");
            }

            match &state.swatch {
                Some(color) => format!(
                    r#"<button type="button" class="{class} option--swatch" style="background-color: {color}" title="{name}: {value}" aria-label="{name}: {value}" aria-pressed="{pressed}"></button>"#,
                    color = escape_html(color),
                    pressed = state.selected,
                ),
                None => format!(
                    r#"<button type="button" class="{class}" title="{name}: {value}" aria-label="{name}: {value}" aria-pressed="{pressed}">{value}</button>"#,
                    pressed = state.selected,
                ),
            }
        })
        .collect();

    format!(
        r#"<div class="option-axis" data-axis="{name}"><div class="option-axis__name">{name}</div><div class="option-axis__values">{buttons}</div></div>"#
    )
}

/// Render the degraded card for a product whose data failed validation.
pub fn render_unavailable_card(product: &Product, labels: &CardLabels) -> String {
    format!(
        r#"<article class="product-card product-card--unavailable" data-product="{slug}">
    <div class="product-card__placeholder">{no_image}</div>
    <h3 class="product-card__title">{title}</h3>
    <button type="button" class="btn-add-to-cart" disabled>{unavailable}</button>
</article>"#,
        slug = escape_html(&product.slug),
        no_image = escape_html(&labels.no_image),
        title = escape_html(&product.title),
        unavailable = escape_html(&labels.unavailable),
    )
}
