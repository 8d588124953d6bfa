//! Accessibility labels for card regions.

use serde::Serialize;

/// Label of the title element.
pub const TITLE_LABEL: &str = "Product Title";
/// Label of the description element.
pub const DESCRIPTION_LABEL: &str = "Product Description";
/// Label of the discounted price element.
pub const DISCOUNTED_PRICE_LABEL: &str = "Discounted Price";
/// Label of the original price element.
pub const ORIGINAL_PRICE_LABEL: &str = "Original Price";

/// Stable, human-readable labels for every addressable part of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLabels {
    pub container: String,
    pub image_alt: String,
    pub title: &'static str,
    pub description: &'static str,
    pub discounted_price: &'static str,
    pub original_price: &'static str,
    pub action: String,
}

impl CardLabels {
    pub fn for_title(title: &str) -> Self {
        Self {
            container: format!("Product card for {}", title),
            image_alt: title.to_string(),
            title: TITLE_LABEL,
            description: DESCRIPTION_LABEL,
            discounted_price: DISCOUNTED_PRICE_LABEL,
            original_price: ORIGINAL_PRICE_LABEL,
            action: format!("View more about {}", title),
        }
    }
}
