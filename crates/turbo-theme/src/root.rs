//! The visual root the theme marks.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

/// A mutable set of class markers on the document root.
///
/// The theme store only adds and removes its own markers; styling rules
/// keyed on them live elsewhere.
pub trait VisualRoot: Send + Sync {
    fn add_marker(&self, marker: &str);
    fn remove_marker(&self, marker: &str);
    fn contains(&self, marker: &str) -> bool;
    /// All markers, sorted.
    fn markers(&self) -> Vec<String>;
}

/// In-memory marker set.
///
/// Clones share the same set, so a caller can keep a handle to inspect the
/// markers the store applied.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Arc<RwLock<BTreeSet<String>>>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set that already carries some markers (e.g. unrelated root classes).
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = markers.into_iter().map(Into::into).collect();
        Self {
            markers: Arc::new(RwLock::new(set)),
        }
    }

    pub fn add_marker(&self, marker: &str) {
        self.markers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(marker.to_string());
    }

    pub fn remove_marker(&self, marker: &str) {
        self.markers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(marker);
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.markers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(marker)
    }

    pub fn markers(&self) -> Vec<String> {
        self.markers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Space-separated class attribute value.
    pub fn class_attr(&self) -> String {
        self.markers().join(" ")
    }
}

impl VisualRoot for MarkerSet {
    fn add_marker(&self, marker: &str) {
        MarkerSet::add_marker(self, marker)
    }

    fn remove_marker(&self, marker: &str) {
        MarkerSet::remove_marker(self, marker)
    }

    fn contains(&self, marker: &str) -> bool {
        MarkerSet::contains(self, marker)
    }

    fn markers(&self) -> Vec<String> {
        MarkerSet::markers(self)
    }
}
