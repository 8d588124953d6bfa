//! Show the display fields derived for each product.

use anyhow::Result;

use turbo_commerce::catalog::{ProductView, MAX_STARS};
use turbo_commerce::ProductId;

use super::{load_catalog, resolve_currency, InspectArgs};
use crate::context::Context;
use crate::output::{badge_label, star_row};

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(&args.catalog, ctx)?;
    let currency = resolve_currency(args.currency.as_deref(), ctx)?;

    let views: Vec<ProductView> = match &args.id {
        Some(id) => {
            let product = catalog.get(&ProductId::new(id.as_str()))?;
            vec![ProductView::derive(product, currency)]
        }
        None => catalog.views(currency),
    };

    if ctx.output.is_json() {
        ctx.output.json(&views);
        return Ok(());
    }

    ctx.output.header(&format!("{} product(s) in {}", views.len(), currency));

    let widths = [10, 28, 10, 10, 8, 14, 12];
    ctx.output.table_row(
        &["ID", "TITLE", "PRICE", "WAS", "OFF", "BADGE", "RATING"],
        &widths,
    );

    for view in &views {
        let id = view.id.to_string();
        let off = view.discount_label();
        let badge = badge_label(view.badge);
        let rating = format!(
            "{} {}",
            star_row(view.stars_filled, MAX_STARS),
            view.rating_label
        );
        ctx.output.table_row(
            &[
                id.as_str(),
                view.title.as_str(),
                view.price_label.as_str(),
                view.original_price_label.as_str(),
                off.as_str(),
                badge.as_str(),
                rating.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}
