//! Light/dark theme preference for TurboCommerce storefronts.
//!
//! The theme is process-wide state with one writer path
//! ([`ThemeStore::toggle`]) and many readers (every rendered card). Readers
//! reach it through a [`ThemeContext`] handed to them explicitly, so using
//! the theme before it was provided fails immediately instead of silently
//! rendering with a default.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use turbo_cache::Cache;
//! use turbo_theme::{FixedColorScheme, MarkerSet, ThemeContext, ThemePreference, ThemeStore};
//!
//! let root = MarkerSet::new();
//! let store = ThemeStore::builder(Cache::memory())
//!     .color_scheme(FixedColorScheme::dark())
//!     .root(root.clone())
//!     .initialize();
//! assert_eq!(store.theme(), ThemePreference::Dark);
//! assert!(root.contains("dark"));
//!
//! let ctx = ThemeContext::provide(Arc::new(store));
//! ctx.theme().toggle();
//! assert!(!ctx.theme().is_dark());
//! assert_eq!(root.markers(), vec!["light".to_string()]);
//! ```

mod context;
mod error;
mod preference;
mod root;
mod scheme;
mod store;

pub use context::ThemeContext;
pub use error::ThemeError;
pub use preference::ThemePreference;
pub use root::{MarkerSet, VisualRoot};
pub use scheme::{ColorSchemeQuery, EnvColorScheme, FixedColorScheme, COLOR_SCHEME_ENV};
pub use store::{ThemeSnapshot, ThemeStore, ThemeStoreBuilder, DEFAULT_THEME_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ColorSchemeQuery, MarkerSet, ThemeContext, ThemePreference, ThemeSnapshot, ThemeStore,
        VisualRoot,
    };
}
