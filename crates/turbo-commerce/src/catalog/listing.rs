//! Ordered product listings.

use std::collections::HashSet;

use crate::catalog::{Product, ProductView};
use crate::ids::ProductId;
use crate::money::Currency;
use crate::CommerceError;

/// An ordered listing of products, as received from the data source.
///
/// Order is preserved exactly; nothing is sorted or filtered. Ids are unique
/// within a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a listing, validating every product and id uniqueness.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.listing_key()) {
                return Err(CommerceError::DuplicateProductId(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in listing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by id.
    pub fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        let key = id.listing_key();
        self.products
            .iter()
            .find(|p| p.id.listing_key() == key)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Derive a view for every product, in listing order.
    pub fn views(&self, currency: Currency) -> Vec<ProductView> {
        self.products
            .iter()
            .map(|p| ProductView::derive(p, currency))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {"id": "b", "title": "Bag", "discountPrice": 800, "originalPrice": 1000, "image": "/bag.jpg", "sale": true},
        {"id": 2, "title": "Mug", "discountPrice": 5, "originalPrice": 5, "image": "/mug.jpg"},
        {"id": "a", "title": "Hat", "discountPrice": 0, "originalPrice": 100, "image": "/hat.jpg", "rating": 4}
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let catalog = Catalog::from_json(LISTING).unwrap();
        let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Bag", "Mug", "Hat"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_views_in_order() {
        let catalog = Catalog::from_json(LISTING).unwrap();
        let percents: Vec<u8> = catalog
            .views(Currency::INR)
            .iter()
            .map(|v| v.discount_percent)
            .collect();
        assert_eq!(percents, vec![20, 0, 100]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::new("1", "A", 1.0, 2.0, "/a");
        let b = Product::new(1_i64, "B", 1.0, 2.0, "/b");
        assert!(matches!(
            Catalog::new(vec![a, b]),
            Err(CommerceError::DuplicateProductId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let bad = Product::new("1", "", 1.0, 2.0, "/a");
        assert!(matches!(
            Catalog::new(vec![bad]),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_out_of_range_rating_is_listed() {
        let catalog = Catalog::from_json(
            r#"[{"id": 7, "title": "Lamp", "discountPrice": 50, "originalPrice": 60, "image": "/lamp.jpg", "rating": 5.2}]"#,
        )
        .unwrap();
        let views = catalog.views(Currency::INR);
        assert_eq!(views[0].stars_filled, 5);
        assert_eq!(views[0].rating_label, "(5.2)");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{\"id\": 1}"),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_json(LISTING).unwrap();
        assert_eq!(catalog.get(&ProductId::Number(2)).unwrap().title, "Mug");
        assert!(matches!(
            catalog.get(&ProductId::new("zzz")),
            Err(CommerceError::ProductNotFound(_))
        ));
    }
}
