//! Product card controllers and HTML renderers for TurboCommerce.
//!
//! A [`CardController`] is one rendered product card. It owns the card's
//! image-load state, reads the shared theme through a
//! [`ThemeContext`](turbo_theme::ThemeContext), derives a fresh
//! [`ProductView`](turbo_commerce::catalog::ProductView) on every render, and
//! forwards the card's primary action to an optional callback.
//!
//! The [`render`] module turns controllers into HTML fragments and pages.

pub mod a11y;
pub mod classes;
pub mod controller;
pub mod image;
pub mod render;

pub use a11y::CardLabels;
pub use classes::{CardClasses, ClassList};
pub use controller::{ActionCallback, CardController, CardProps};
pub use image::ImageLoadState;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::render::{render_card, render_page, CatalogPage};
    pub use crate::{CardController, CardProps, ImageLoadState};
}
