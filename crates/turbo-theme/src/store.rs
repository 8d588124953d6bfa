//! Theme preference store.

use std::sync::{Mutex, PoisonError, RwLock};

use serde::Serialize;
use turbo_cache::Cache;
use turbo_observability::StructuredLogger;

use crate::root::{MarkerSet, VisualRoot};
use crate::scheme::{ColorSchemeQuery, FixedColorScheme};
use crate::ThemePreference;

/// Storage key the preference is persisted under.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// A point-in-time read of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub theme: ThemePreference,
    pub is_dark: bool,
}

impl From<ThemePreference> for ThemeSnapshot {
    fn from(theme: ThemePreference) -> Self {
        Self {
            theme,
            is_dark: theme.is_dark(),
        }
    }
}

/// Builder for [`ThemeStore`].
pub struct ThemeStoreBuilder {
    cache: Cache,
    key: String,
    scheme: Box<dyn ColorSchemeQuery>,
    root: Box<dyn VisualRoot>,
    logger: StructuredLogger,
}

impl ThemeStoreBuilder {
    /// Persist under a custom key instead of [`DEFAULT_THEME_KEY`].
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the system color-scheme query (defaults to light).
    pub fn color_scheme(mut self, scheme: impl ColorSchemeQuery + 'static) -> Self {
        self.scheme = Box::new(scheme);
        self
    }

    /// Set the visual root the theme marker is applied to.
    pub fn root(mut self, root: impl VisualRoot + 'static) -> Self {
        self.root = Box::new(root);
        self
    }

    /// Set the logger; the store logs under the "theme-store" component.
    pub fn logger(mut self, logger: &StructuredLogger) -> Self {
        self.logger = logger.for_component("theme-store");
        self
    }

    /// Resolve the initial preference and apply it to the visual root.
    ///
    /// Resolution order: a valid persisted value, then the system color
    /// scheme, then light. Storage failures are logged and skipped.
    pub fn initialize(self) -> ThemeStore {
        let theme = resolve_initial(&self.cache, &self.key, self.scheme.as_ref(), &self.logger);

        apply_marker(self.root.as_ref(), theme.toggled(), theme);

        self.logger
            .debug_builder("theme initialized")
            .field("theme", theme.as_str())
            .emit();

        ThemeStore {
            current: RwLock::new(theme),
            cache: self.cache,
            key: self.key,
            root: Mutex::new(self.root),
            logger: self.logger,
        }
    }
}

/// Process-wide light/dark preference.
///
/// `toggle` is the only writer. The write lock is held for the whole
/// toggle, so readers see either the old theme with the old marker or the
/// new theme with the new marker.
pub struct ThemeStore {
    current: RwLock<ThemePreference>,
    cache: Cache,
    key: String,
    root: Mutex<Box<dyn VisualRoot>>,
    logger: StructuredLogger,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme())
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Start building a store persisted in `cache`.
    pub fn builder(cache: Cache) -> ThemeStoreBuilder {
        ThemeStoreBuilder {
            cache,
            key: DEFAULT_THEME_KEY.to_string(),
            scheme: Box::new(FixedColorScheme::light()),
            root: Box::new(MarkerSet::new()),
            logger: StructuredLogger::null(),
        }
    }

    /// Current preference.
    pub fn theme(&self) -> ThemePreference {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Current preference together with `is_dark`.
    pub fn read(&self) -> ThemeSnapshot {
        self.theme().into()
    }

    /// Flip the preference, persist it, and swap the root marker.
    ///
    /// A failed write is logged; the in-memory theme still flips.
    pub fn toggle(&self) -> ThemePreference {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let old = *current;
        let new = old.toggled();

        let persisted = match self.cache.set_str(&self.key, new.as_str()) {
            Ok(()) => true,
            Err(e) => {
                self.logger
                    .warn_builder("failed to persist theme preference")
                    .field("key", self.key.as_str())
                    .field("error", e.to_string())
                    .emit();
                false
            }
        };

        {
            let root = self.root.lock().unwrap_or_else(PoisonError::into_inner);
            apply_marker(root.as_ref(), old, new);
        }
        *current = new;

        self.logger
            .info_builder("theme toggled")
            .field("from", old.as_str())
            .field("to", new.as_str())
            .field_bool("persisted", persisted)
            .emit();

        new
    }

    /// Key the preference is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Markers currently on the visual root.
    pub fn root_markers(&self) -> Vec<String> {
        self.root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .markers()
    }
}

fn resolve_initial(
    cache: &Cache,
    key: &str,
    scheme: &dyn ColorSchemeQuery,
    logger: &StructuredLogger,
) -> ThemePreference {
    match cache.get_str(key) {
        Ok(Some(saved)) => match saved.parse::<ThemePreference>() {
            Ok(theme) => return theme,
            Err(e) => logger
                .warn_builder("ignoring persisted theme preference")
                .field("key", key)
                .field("error", e.to_string())
                .emit(),
        },
        Ok(None) => {}
        Err(e) => logger
            .warn_builder("theme storage unavailable")
            .field("key", key)
            .field("error", e.to_string())
            .emit(),
    }

    if scheme.prefers_dark() {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

/// Swap markers: the old one goes before the new one arrives.
fn apply_marker(root: &dyn VisualRoot, old: ThemePreference, new: ThemePreference) {
    root.remove_marker(old.as_str());
    root.add_marker(new.as_str());
}
