//! Product card view-model.
//!
//! [`ProductView::derive`] is a pure function of a [`Product`] and a
//! currency. Views carry no identity of their own and are rebuilt on every
//! render.

use serde::Serialize;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{format_number, Currency};

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

/// Stock badge shown on the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Sale,
    OutOfStock,
}

impl Badge {
    /// Badge for a sale flag; a missing flag is treated as `false`.
    pub fn from_sale(sale: Option<bool>) -> Self {
        if sale.unwrap_or(false) {
            Badge::Sale
        } else {
            Badge::OutOfStock
        }
    }

    /// Text shown inside the badge.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Sale => "Sale",
            Badge::OutOfStock => "Out of Stock",
        }
    }

    /// Machine name (e.g. for data attributes).
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Sale => "sale",
            Badge::OutOfStock => "out-of-stock",
        }
    }
}

/// Display-ready fields for one product card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    /// `None` means the description element is not rendered at all.
    pub description: Option<String>,
    pub image: String,
    pub price_label: String,
    pub original_price_label: String,
    /// Whole percent off the original price, 0..=100.
    pub discount_percent: u8,
    pub badge: Badge,
    /// Filled stars, 0..=5.
    pub stars_filled: u8,
    /// Rating in parentheses, "(0)" when the product has none.
    pub rating_label: String,
}

impl ProductView {
    /// Derive the view for a product.
    pub fn derive(product: &Product, currency: Currency) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price_label: currency.label(product.discount_price),
            original_price_label: currency.label(product.original_price),
            discount_percent: discount_percent(product.discount_price, product.original_price),
            badge: Badge::from_sale(product.sale),
            stars_filled: stars_filled(product.rating),
            rating_label: rating_label(product.rating),
        }
    }

    /// Text for the discount chip (e.g. "20% off").
    pub fn discount_label(&self) -> String {
        format!("{}% off", self.discount_percent)
    }

    /// Fill state of each star, left to right.
    pub fn stars(&self) -> impl Iterator<Item = bool> + '_ {
        (0..MAX_STARS).map(move |i| i < self.stars_filled)
    }
}

/// Round to the nearest integer, halves going up (2.5 -> 3, -2.5 -> -2).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Percent saved relative to the original price.
///
/// A zero or non-finite original price yields 0 instead of NaN or infinity.
/// A discount price above the original would be negative and is clamped to 0.
pub fn discount_percent(discount_price: f64, original_price: f64) -> u8 {
    if !original_price.is_finite() || original_price <= 0.0 || !discount_price.is_finite() {
        return 0;
    }
    let percent = (original_price - discount_price) / original_price * 100.0;
    round_half_up(percent).clamp(0.0, 100.0) as u8
}

/// Number of filled stars for a rating; missing or NaN ratings fill none.
pub fn stars_filled(rating: Option<f64>) -> u8 {
    let rating = rating.filter(|r| r.is_finite()).unwrap_or(0.0);
    round_half_up(rating).clamp(0.0, f64::from(MAX_STARS)) as u8
}

/// Label shown next to the stars, e.g. "(4)" or "(4.5)".
pub fn rating_label(rating: Option<f64>) -> String {
    let rating = rating.filter(|r| r.is_finite()).unwrap_or(0.0);
    format!("({})", format_number(rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(discount: f64, original: f64) -> Product {
        Product::new("1", "Test Product", discount, original, "/test-image.jpg")
    }

    #[test]
    fn test_eight_hundred_of_thousand() {
        let view = ProductView::derive(&product(800.0, 1000.0), Currency::INR);
        assert_eq!(view.discount_percent, 20);
        assert_eq!(view.price_label, "\u{20b9}800");
        assert_eq!(view.original_price_label, "\u{20b9}1000");
        assert_eq!(view.discount_label(), "20% off");
    }

    #[test]
    fn test_free_product_is_hundred_percent_off() {
        assert_eq!(discount_percent(0.0, 100.0), 100);
    }

    #[test]
    fn test_equal_prices_are_zero_percent_off() {
        assert_eq!(discount_percent(1000.0, 1000.0), 0);
    }

    #[test]
    fn test_zero_original_price_is_guarded() {
        assert_eq!(discount_percent(0.0, 0.0), 0);
        assert_eq!(discount_percent(50.0, 0.0), 0);
        assert_eq!(discount_percent(50.0, f64::INFINITY), 0);
        assert_eq!(discount_percent(f64::NAN, 100.0), 0);
    }

    #[test]
    fn test_markup_clamps_to_zero() {
        assert_eq!(discount_percent(120.0, 100.0), 0);
    }

    #[test]
    fn test_rounding_half_up() {
        // 12.5% off
        assert_eq!(discount_percent(87.5, 100.0), 13);
        // 33.33% off
        assert_eq!(discount_percent(2000.0, 3000.0), 33);
        // 66.67% off
        assert_eq!(discount_percent(1000.0, 3000.0), 67);
    }

    #[test]
    fn test_discount_percent_stays_in_range() {
        let original = 997.0;
        let mut discount = 0.0;
        while discount <= original {
            let percent = discount_percent(discount, original);
            assert!(percent <= 100, "{} of {} gave {}", discount, original, percent);
            discount += 13.7;
        }
    }

    #[test]
    fn test_badge_follows_sale_flag() {
        let on_sale = ProductView::derive(&product(1.0, 2.0).with_sale(true), Currency::INR);
        let off_sale = ProductView::derive(&product(1.0, 2.0).with_sale(false), Currency::INR);
        let missing = ProductView::derive(&product(1.0, 2.0), Currency::INR);
        assert_eq!(on_sale.badge, Badge::Sale);
        assert_eq!(off_sale.badge, Badge::OutOfStock);
        assert_eq!(missing.badge, Badge::OutOfStock);
        assert_eq!(Badge::OutOfStock.label(), "Out of Stock");
    }

    #[test]
    fn test_missing_rating() {
        let view = ProductView::derive(&product(1.0, 2.0), Currency::INR);
        assert_eq!(view.stars_filled, 0);
        assert_eq!(view.rating_label, "(0)");
        assert_eq!(view.stars().filter(|filled| *filled).count(), 0);
    }

    #[test]
    fn test_star_fill() {
        assert_eq!(stars_filled(Some(4.0)), 4);
        assert_eq!(stars_filled(Some(3.5)), 4);
        assert_eq!(stars_filled(Some(3.49)), 3);
        assert_eq!(stars_filled(Some(9.0)), 5);
        assert_eq!(stars_filled(Some(-2.0)), 0);
        assert_eq!(stars_filled(Some(f64::NAN)), 0);
        assert_eq!(rating_label(Some(4.0)), "(4)");
        assert_eq!(rating_label(Some(4.5)), "(4.5)");
    }

    #[test]
    fn test_stars_iterator() {
        let view = ProductView::derive(&product(1.0, 2.0).with_rating(3.0), Currency::INR);
        let stars: Vec<bool> = view.stars().collect();
        assert_eq!(stars, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_description_passes_through() {
        let with = ProductView::derive(
            &product(1.0, 2.0).with_description("Soft cotton"),
            Currency::INR,
        );
        let without = ProductView::derive(&product(1.0, 2.0), Currency::INR);
        assert_eq!(with.description.as_deref(), Some("Soft cotton"));
        assert_eq!(without.description, None);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let p = product(800.0, 1000.0).with_rating(4.0).with_sale(true);
        assert_eq!(
            ProductView::derive(&p, Currency::INR),
            ProductView::derive(&p, Currency::INR)
        );
    }
}
