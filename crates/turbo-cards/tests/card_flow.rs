use std::sync::{Arc, Mutex};

use turbo_cache::Cache;
use turbo_cards::prelude::*;
use turbo_commerce::catalog::Catalog;
use turbo_commerce::ProductId;
use turbo_theme::{FixedColorScheme, ThemeContext, ThemePreference, ThemeStore};

const PRODUCTS: &str = r#"[
    {
        "id": 1,
        "title": "Classic Tee",
        "description": "Soft cotton tee",
        "discountPrice": 800,
        "originalPrice": 1000,
        "image": "/tee.jpg",
        "rating": 4,
        "reviewsCount": 12,
        "sale": true
    },
    {
        "id": "hoodie-2",
        "title": "Hoodie",
        "discountPrice": 0,
        "originalPrice": 100,
        "image": "/hoodie.jpg"
    }
]"#;

#[test]
fn test_full_card_flow() {
    let cache = Cache::memory();
    let store = Arc::new(
        ThemeStore::builder(cache.clone())
            .color_scheme(FixedColorScheme::dark())
            .initialize(),
    );
    let theme = ThemeContext::provide(store.clone());
    assert_eq!(theme.preference(), ThemePreference::Dark);

    let clicked = Arc::new(Mutex::new(Vec::new()));
    let sink = clicked.clone();
    let props = CardProps::new()
        .class_name("featured")
        .on_action(move |id: &ProductId| sink.lock().unwrap().push(id.to_string()));

    // Loading state first
    let html = render_page(&CatalogPage::new(theme.clone()).loading(true));
    assert_eq!(html.matches("h-58 bg-gray-300").count(), 6);

    let catalog = Catalog::from_json(PRODUCTS).unwrap();
    let mut page = CatalogPage::from_catalog(&catalog, theme, &props);
    assert_eq!(page.cards().len(), 2);

    let html = render_page(&page);
    assert!(html.contains(r#"<html class="dark">"#));
    assert!(html.contains("Classic Tee"));
    assert!(html.contains("20% off"));
    assert!(html.contains("100% off"));
    assert!(html.contains("Out of Stock"));
    assert!(html.contains("featured"));
    assert_eq!(html.matches("opacity-0").count(), 2);

    // Image loads on the first card only
    assert!(page.cards_mut()[0].on_image_loaded());
    let html = render_page(&page);
    assert_eq!(html.matches("opacity-0").count(), 1);
    assert_eq!(html.matches("opacity-100").count(), 1);

    // Primary action goes out with each card's id
    for card in page.cards() {
        card.on_primary_action();
    }
    assert_eq!(*clicked.lock().unwrap(), vec!["1", "hoodie-2"]);

    // Toggle is persisted and every card reads the new theme
    store.toggle();
    assert_eq!(cache.get_str("theme").unwrap().as_deref(), Some("light"));
    let html = render_page(&page);
    assert!(html.contains(r#"<html class="light">"#));
    assert!(!html.contains("bg-gray-800"));
    assert_eq!(html.matches("bg-white").count(), 2);

    // A fresh store picks up the persisted preference over the system one
    let reloaded = ThemeStore::builder(cache)
        .color_scheme(FixedColorScheme::dark())
        .initialize();
    assert_eq!(reloaded.theme(), ThemePreference::Light);
}
