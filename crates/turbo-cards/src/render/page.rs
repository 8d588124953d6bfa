//! Catalog page renderer.

use turbo_commerce::catalog::Catalog;
use turbo_theme::{ThemeContext, ThemePreference};

use super::{escape_html, render_card, render_card_skeleton, SKELETON_COUNT};
use crate::classes::{self, TOGGLE};
use crate::controller::{CardController, CardProps};

const DEFAULT_TITLE: &str = "Products";
const DEFAULT_COLUMNS: u8 = 3;

/// A grid of product cards under a theme toggle.
#[derive(Debug)]
pub struct CatalogPage {
    theme: ThemeContext,
    cards: Vec<CardController>,
    loading: bool,
    title: String,
    columns: u8,
    meta: Vec<(String, String)>,
    stylesheets: Vec<String>,
}

impl CatalogPage {
    /// An empty, loaded page.
    pub fn new(theme: ThemeContext) -> Self {
        Self {
            theme,
            cards: Vec::new(),
            loading: false,
            title: DEFAULT_TITLE.to_string(),
            columns: DEFAULT_COLUMNS,
            meta: Vec::new(),
            stylesheets: Vec::new(),
        }
    }

    /// One card per catalog product, in catalog order.
    pub fn from_catalog(catalog: &Catalog, theme: ThemeContext, props: &CardProps) -> Self {
        let cards = catalog
            .iter()
            .map(|product| CardController::new(product.clone(), theme.clone(), props.clone()))
            .collect();
        Self::new(theme).with_cards(cards)
    }

    pub fn with_cards(mut self, cards: Vec<CardController>) -> Self {
        self.cards = cards;
        self
    }

    /// Render placeholders instead of cards.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cards(&self) -> &[CardController] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [CardController] {
        &mut self.cards
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }
}

/// Render the theme toggle button for the current theme.
pub fn render_theme_toggle(theme: ThemePreference) -> String {
    format!(
        r#"<button type="button" class="{}" data-action="toggle-theme" data-theme="{}">{}</button>"#,
        TOGGLE,
        theme.as_str(),
        theme.toggle_label()
    )
}

/// Render the page body: toggle plus grid.
pub fn render_main(page: &CatalogPage) -> String {
    let theme = page.theme.preference();

    let items: Vec<String> = if page.loading {
        (0..SKELETON_COUNT).map(|_| render_card_skeleton()).collect()
    } else {
        page.cards.iter().map(render_card).collect()
    };

    format!(
        r#"<main class="{main_class}">
    {toggle}
    <div class="{grid_class}">
{items}
    </div>
</main>"#,
        main_class = classes::page_main(theme),
        toggle = render_theme_toggle(theme),
        grid_class = classes::grid(page.columns),
        items = items.join("\n"),
    )
}

/// Render a complete HTML document.
///
/// The `<html>` class attribute carries the theme markers currently on the
/// visual root.
pub fn render_page(page: &CatalogPage) -> String {
    let markers = page.theme.theme().root_markers().join(" ");

    let mut head = format!("<title>{}</title>\n", escape_html(&page.title));
    head.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    head.push('\n');
    for (name, content) in &page.meta {
        head.push_str(&format!(
            r#"<meta name="{}" content="{}">"#,
            escape_html(name),
            escape_html(content)
        ));
        head.push('\n');
    }
    for href in &page.stylesheets {
        head.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(href)));
        head.push('\n');
    }

    format!(
        "<!DOCTYPE html>\n<html class=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n{}</head>\n<body>\n{}\n</body>\n</html>\n",
        markers,
        head,
        render_main(page)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use turbo_cache::Cache;
    use turbo_commerce::catalog::Product;
    use turbo_theme::{FixedColorScheme, ThemeStore};

    fn context(dark: bool) -> (Arc<ThemeStore>, ThemeContext) {
        let store = Arc::new(
            ThemeStore::builder(Cache::memory())
                .color_scheme(FixedColorScheme::new(dark))
                .initialize(),
        );
        let ctx = ThemeContext::provide(store.clone());
        (store, ctx)
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("b", "Second Listed First", 1.0, 2.0, "/b.jpg"),
            Product::new("a", "Then This", 1.0, 2.0, "/a.jpg"),
        ])
        .unwrap()
    }

    #[test]
    fn test_loading_page_shows_six_skeletons() {
        let (_, ctx) = context(false);
        let page = CatalogPage::from_catalog(&catalog(), ctx, &CardProps::new()).loading(true);
        let html = render_main(&page);
        assert_eq!(html.matches("rounded-xl shadow-md").count(), SKELETON_COUNT);
        assert!(!html.contains("Second Listed First"));
    }

    #[test]
    fn test_cards_keep_catalog_order() {
        let (_, ctx) = context(false);
        let page = CatalogPage::from_catalog(&catalog(), ctx, &CardProps::new());
        let html = render_main(&page);
        let first = html.find("Second Listed First").unwrap();
        let second = html.find("Then This").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_page_reflects_theme() {
        let (store, ctx) = context(true);
        let page = CatalogPage::new(ctx);

        let dark = render_page(&page);
        assert!(dark.contains(r#"<html class="dark">"#));
        assert!(dark.contains("bg-gray-900"));
        assert!(dark.contains("\u{1f319} Dark Mode"));

        store.toggle();
        let light = render_page(&page);
        assert!(light.contains(r#"<html class="light">"#));
        assert!(light.contains("bg-gray-100"));
        assert!(light.contains("Light Mode"));
    }

    #[test]
    fn test_meta_is_rendered() {
        let (_, ctx) = context(false);
        let page = CatalogPage::new(ctx)
            .with_title("Shop")
            .with_meta("generated-at", "2024-01-01T00:00:00Z");
        let html = render_page(&page);
        assert!(html.contains("<title>Shop</title>"));
        assert!(html.contains(r#"<meta name="generated-at" content="2024-01-01T00:00:00Z">"#));
    }
}
