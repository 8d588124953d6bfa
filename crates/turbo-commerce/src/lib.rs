//! Catalog types and product card view-models for TurboCommerce.
//!
//! This crate provides the data side of the product card listing:
//!
//! - **Catalog**: `Product` records as they arrive from the data source,
//!   plus `Catalog`, an ordered, validated listing of them
//! - **View-models**: `ProductView`, the display-ready fields derived from a
//!   product (price labels, discount percentage, badge, star fill)
//! - **Money**: currencies and price label formatting
//!
//! # Example
//!
//! ```rust
//! use turbo_commerce::prelude::*;
//!
//! let product = Product::new("1", "Test Product", 800.0, 1000.0, "/test-image.jpg")
//!     .with_rating(4.0)
//!     .with_sale(true);
//!
//! let view = ProductView::derive(&product, Currency::INR);
//! assert_eq!(view.price_label, "\u{20b9}800");
//! assert_eq!(view.discount_percent, 20);
//! assert_eq!(view.badge, Badge::Sale);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Currency;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Currency;

    // Catalog
    pub use crate::catalog::{Badge, Catalog, Product, ProductView};
}
