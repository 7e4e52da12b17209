//! Collection card renderer.

use storefront_commerce::catalog::Collection;

use super::{escape_html, IndexLabels};

/// Render a collection tile with its "view products" action.
pub fn render_collection_card(collection: &Collection, labels: &IndexLabels) -> String {
    let name = escape_html(&collection.name);

    let image_html = match &collection.image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="collection-card__image">"#,
            escape_html(src),
            name
        ),
        None => r#"<div class="collection-card__placeholder"></div>"#.to_string(),
    };

    let description = collection
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="collection-card__description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<div class="collection-card" data-collection="{id}">
    {image_html}
    <h3 class="collection-card__name">{name}</h3>
    {description}
    <button type="button" class="btn-view-collection" data-collection="{id}">{view}</button>
</div>"#,
        id = escape_html(collection.id.as_str()),
        view = escape_html(&labels.view_collection),
    )
}
