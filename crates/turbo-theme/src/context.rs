//! Injected access to the theme store.

use std::sync::Arc;

use crate::{ThemePreference, ThemeStore};

/// Handle through which rendered units read the theme.
///
/// A context is either provided (wrapping the application's one
/// [`ThemeStore`]) or empty. Reading the theme from an empty context is a
/// wiring mistake and panics at the call site.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    store: Option<Arc<ThemeStore>>,
}

impl ThemeContext {
    /// A context carrying the application's store.
    pub fn provide(store: Arc<ThemeStore>) -> Self {
        Self { store: Some(store) }
    }

    /// A context with no store. Only `try_theme` is usable on it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The store.
    ///
    /// # Panics
    ///
    /// Panics if the context was never provided with a store.
    #[track_caller]
    pub fn theme(&self) -> &ThemeStore {
        match &self.store {
            Some(store) => store,
            None => panic!("use_theme must be used inside ThemeProvider"),
        }
    }

    /// The store, or `None` when the context is empty.
    pub fn try_theme(&self) -> Option<&ThemeStore> {
        self.store.as_deref()
    }

    /// Shortcut for `theme().theme()`.
    #[track_caller]
    pub fn preference(&self) -> ThemePreference {
        self.theme().theme()
    }

    /// Shortcut for `theme().is_dark()`.
    #[track_caller]
    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn is_provided(&self) -> bool {
        self.store.is_some()
    }
}
