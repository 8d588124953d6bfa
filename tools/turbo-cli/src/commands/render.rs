//! Render a catalog to an HTML page.

use std::fs;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use chrono::Utc;

use turbo_cards::prelude::*;
use turbo_theme::ThemeContext;

use super::{load_catalog, resolve_currency, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let logger = ctx.logger();
    let catalog = load_catalog(&args.catalog, ctx)?;
    let currency = resolve_currency(args.currency.as_deref(), ctx)?;

    let store = Arc::new(ctx.theme_store(ctx.cache()?));
    let theme = ThemeContext::provide(store.clone());

    let props = CardProps::new().currency(currency);
    let mut page = CatalogPage::from_catalog(&catalog, theme, &props)
        .loading(args.loading)
        .with_title(args.title.as_str())
        .with_columns(ctx.config.storefront.columns)
        .with_meta("generator", "turbo-cli")
        .with_meta("generated-at", &Utc::now().to_rfc3339());

    if args.loaded {
        for card in page.cards_mut() {
            card.on_image_loaded();
        }
    }

    let html = render_page(&page);

    logger
        .info_builder("page rendered")
        .field("theme", store.theme().as_str())
        .field_i64("cards", page.cards().len() as i64)
        .field_bool("loading", page.is_loading())
        .field_i64("bytes", html.len() as i64)
        .emit();

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            ctx.output.success(&format!(
                "Rendered {} card(s) in {} theme to {}",
                page.cards().len(),
                store.theme(),
                path.display()
            ));
        }
        None => print!("{}", html),
    }

    Ok(())
}
