//! Product records.

use crate::ids::ProductId;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// A product as delivered by the data source.
///
/// Field names follow the source's camelCase JSON. Optional fields may be
/// missing entirely; each has a display fallback in
/// [`ProductView`](super::ProductView).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within a listing.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long description, omitted from display when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price the customer pays.
    pub discount_price: f64,
    /// Price before discount.
    pub original_price: f64,
    /// Image URI.
    pub image: String,
    /// Average rating, expected in 0..=5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<u32>,
    /// Whether the product is on sale; absent means out of stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<bool>,
}

impl Product {
    /// Create a product with only the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        discount_price: f64,
        original_price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            discount_price,
            original_price,
            image: image.into(),
            rating: None,
            reviews_count: None,
            sale: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the review count.
    pub fn with_reviews(mut self, count: u32) -> Self {
        self.reviews_count = Some(count);
        self
    }

    /// Set the sale flag.
    pub fn with_sale(mut self, sale: bool) -> Self {
        self.sale = Some(sale);
        self
    }

    /// Whether the product is on sale. A missing flag counts as `false`.
    pub fn is_on_sale(&self) -> bool {
        self.sale.unwrap_or(false)
    }

    /// Check the input contract of a product record.
    ///
    /// Rejects an empty title and negative or non-finite prices. A zero
    /// original price, a discount price above the original, and a rating
    /// outside 0..=5 are accepted; the view-model handles all three.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.title.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {}: title must not be empty",
                self.id
            )));
        }

        for (name, price) in [
            ("discountPrice", self.discount_price),
            ("originalPrice", self.original_price),
        ] {
            if !price.is_finite() || price < 0.0 {
                return Err(CommerceError::ValidationError(format!(
                    "product {}: {} must be a non-negative number, got {}",
                    self.id, name, price
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new("1", "Test Product", 800.0, 1000.0, "/test-image.jpg")
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "1",
            "title": "Test Product",
            "description": "This is a test product description",
            "discountPrice": 800,
            "originalPrice": 1000,
            "image": "/test-image.jpg",
            "rating": 4,
            "reviewsCount": 100,
            "sale": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.discount_price, 800.0);
        assert_eq!(product.reviews_count, Some(100));
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": 3, "title": "Mug", "discountPrice": 5, "originalPrice": 5, "image": "/mug.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Number(3));
        assert_eq!(product.description, None);
        assert_eq!(product.rating, None);
        assert!(!product.is_on_sale());
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("sale").is_none());
        assert_eq!(json["discountPrice"], 800.0);
    }

    #[test]
    fn test_validate_accepts_contract_edges() {
        assert!(sample().validate().is_ok());
        assert!(Product::new("z", "Free", 0.0, 0.0, "/z.png").validate().is_ok());
        assert!(Product::new("m", "Markup", 120.0, 100.0, "/m.png").validate().is_ok());
        assert!(sample().with_rating(5.0).validate().is_ok());
        assert!(sample().with_rating(5.2).validate().is_ok());
        assert!(sample().with_rating(-0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        assert!(Product::new("1", "  ", 1.0, 2.0, "/x").validate().is_err());
        assert!(Product::new("1", "A", -1.0, 2.0, "/x").validate().is_err());
        assert!(Product::new("1", "A", 1.0, f64::NAN, "/x").validate().is_err());
    }
}
