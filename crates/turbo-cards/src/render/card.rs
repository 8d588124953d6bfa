//! Product card renderer.

use super::escape_html;
use crate::controller::CardController;

/// Render one card as it looks right now.
///
/// Reads the theme through the card's context, so this panics if the card
/// has no theme provided.
pub fn render_card(card: &CardController) -> String {
    let view = card.view();
    let classes = card.classes();
    let labels = card.labels();
    let image_state = card.image_state();

    let placeholder = if image_state.shows_placeholder() {
        format!(r#"<div class="{}"></div>"#, classes.placeholder())
    } else {
        String::new()
    };

    let description = match &view.description {
        Some(text) => format!(
            r#"<p class="{}" aria-label="{}">{}</p>"#,
            classes.description(),
            labels.description,
            escape_html(text)
        ),
        None => String::new(),
    };

    let stars: String = view
        .stars()
        .map(|filled| {
            format!(
                r#"<span class="{}" aria-hidden="true">&#9733;</span>"#,
                classes.star(filled)
            )
        })
        .collect();

    format!(
        r#"<div class="{container}" role="region" aria-label="{container_label}" data-product-id="{id}" data-image-state="{image_state}">
    <figure class="relative">
        {placeholder}
        <img src="{src}" alt="{alt}" width="400" height="400" class="{image_class}" loading="lazy">
        <span class="{badge_class}" data-badge="{badge_name}">{badge}</span>
    </figure>
    <div class="p-4 space-y-2">
        <h2 class="{title_class}" aria-label="{title_label}">{title}</h2>
        {description}
        <div class="flex items-center gap-1">
            {stars}
            <span class="{rating_class}">{rating}</span>
        </div>
        <div class="flex items-center gap-2">
            <p class="{price_class}" aria-label="{price_label}">{price}</p>
            <p class="{original_class}" aria-label="{original_label}">{original}</p>
            <span class="{discount_class}">{discount}</span>
        </div>
    </div>
    <div class="px-4 pb-4">
        <button type="button" class="{action_class}" aria-label="{action_label}" data-action="view-more" data-product-id="{id}">View More</button>
    </div>
</div>"#,
        container = card.container_classes(),
        container_label = escape_html(&labels.container),
        id = escape_html(&view.id.to_string()),
        image_state = image_state.as_str(),
        placeholder = placeholder,
        src = escape_html(&view.image),
        alt = escape_html(&labels.image_alt),
        image_class = classes.image(image_state),
        badge_class = classes.badge(view.badge),
        badge_name = view.badge.as_str(),
        badge = view.badge.label(),
        title_class = classes.title(),
        title_label = labels.title,
        title = escape_html(&view.title),
        description = description,
        stars = stars,
        rating_class = classes.rating_text(),
        rating = escape_html(&view.rating_label),
        price_class = classes.price(),
        price_label = labels.discounted_price,
        price = escape_html(&view.price_label),
        original_class = classes.original_price(),
        original_label = labels.original_price,
        original = escape_html(&view.original_price_label),
        discount_class = classes.discount(),
        discount = view.discount_label(),
        action_class = classes.action(),
        action_label = escape_html(&labels.action),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::CardProps;
    use std::sync::Arc;
    use turbo_cache::Cache;
    use turbo_commerce::catalog::Product;
    use turbo_theme::{ThemeContext, ThemeStore};

    fn card(product: Product) -> CardController {
        let store = Arc::new(ThemeStore::builder(Cache::memory()).initialize());
        CardController::new(product, ThemeContext::provide(store), CardProps::new())
    }

    fn product() -> Product {
        Product::new("1", "Test Product", 800.0, 1000.0, "/test-image.jpg")
            .with_rating(4.0)
            .with_sale(true)
    }

    #[test]
    fn test_render_card_fields() {
        let html = render_card(&card(product()));
        assert!(html.contains(r#"aria-label="Product card for Test Product""#));
        assert!(html.contains(r#"alt="Test Product""#));
        assert!(html.contains("\u{20b9}800"));
        assert!(html.contains("\u{20b9}1000"));
        assert!(html.contains("20% off"));
        assert!(html.contains(">Sale</span>"));
        assert!(html.contains("(4)"));
        assert!(html.contains(r#"aria-label="View more about Test Product""#));
        assert_eq!(html.matches("fill-yellow-400").count(), 4);
        assert_eq!(html.matches("&#9733;").count(), 5);
    }

    #[test]
    fn test_placeholder_only_while_loading() {
        let mut c = card(product());
        let loading = render_card(&c);
        assert!(loading.contains("animate-pulse"));
        assert!(loading.contains("opacity-0"));

        c.on_image_loaded();
        let loaded = render_card(&c);
        assert!(!loaded.contains("animate-pulse"));
        assert!(loaded.contains("opacity-100"));
    }

    #[test]
    fn test_missing_description_is_omitted() {
        let html = render_card(&card(product()));
        assert!(!html.contains("Product Description"));

        let html = render_card(&card(product().with_description("Soft cotton")));
        assert!(html.contains(r#"aria-label="Product Description">Soft cotton</p>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let p = Product::new("x", "<script>", 1.0, 2.0, "/a.jpg");
        let html = render_card(&card(p));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
