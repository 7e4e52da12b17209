//! Newsletter section renderer.

use super::{escape_html, NewsletterLabels};
use crate::newsletter::NewsletterView;

/// Render the newsletter section.
///
/// After a successful subscription only the thank-you message is shown.
pub fn render_newsletter(view: &NewsletterView, labels: &NewsletterLabels) -> String {
    if view.success {
        return format!(
            r#"<section class="newsletter newsletter--done" data-section="newsletter">
    <h3 class="newsletter__heading">{thanks}</h3>
    <p class="newsletter__pitch">{detail}</p>
</section>"#,
            thanks = escape_html(&labels.thanks),
            detail = escape_html(&labels.thanks_detail),
        );
    }

    let disabled = if view.is_submitting { " disabled" } else { "" };
    let button_label = if view.is_submitting {
        &labels.subscribing
    } else {
        &labels.subscribe
    };

    let error = view
        .error
        .as_deref()
        .map(|e| format!(r#"<p class="newsletter__error" role="alert">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<section class="newsletter" data-section="newsletter">
    <h3 class="newsletter__heading">{heading}</h3>
    <p class="newsletter__pitch">{pitch}</p>
    <form class="newsletter__form" method="post">
        <input type="email" name="email" value="{email}" placeholder="{placeholder}" required{disabled}>
        <button type="submit" class="btn-subscribe"{disabled}>{button_label}</button>
    </form>
    {error}
</section>"#,
        heading = escape_html(&labels.heading),
        pitch = escape_html(&labels.pitch),
        email = escape_html(&view.email),
        placeholder = escape_html(&labels.placeholder),
        button_label = escape_html(button_label),
    )
}
