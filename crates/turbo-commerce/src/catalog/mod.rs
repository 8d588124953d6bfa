//! Product catalog module.
//!
//! Contains the product record, the ordered listing, and the card view-model
//! derived from each product.

mod listing;
mod product;
mod view;

pub use listing::Catalog;
pub use product::Product;
pub use view::{discount_percent, rating_label, stars_filled, Badge, ProductView, MAX_STARS};
