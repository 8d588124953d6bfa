//! Presentation classes for cards.
//!
//! Only class names are computed here; what they look like is up to the
//! stylesheet.

use std::fmt;

use turbo_commerce::catalog::Badge;
use turbo_theme::ThemePreference;

use crate::image::ImageLoadState;

/// An ordered list of class names without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a class attribute value on whitespace.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for class in value.split_whitespace() {
            list.push(class);
        }
        list
    }

    /// Append a class unless it is already present.
    pub fn push(&mut self, class: &str) {
        if !class.is_empty() && !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Append every class of `other`, keeping everything already here.
    pub fn merge(mut self, other: &ClassList) -> Self {
        for class in &other.classes {
            self.push(class);
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

const PLACEHOLDER: &str = "absolute inset-0 bg-gray-300 dark:bg-gray-600 animate-pulse z-10";
const IMAGE_BASE: &str = "w-full h-full object-cover transition-opacity duration-500";
const BADGE_BASE: &str = "absolute top-3 left-3 text-white text-xs px-2 py-1 rounded-md";
const STAR_FILLED: &str = "text-yellow-400 fill-yellow-400";
const DISCOUNT: &str = "text-sm font-medium text-green-600 dark:text-green-400";
const ACTION: &str =
    "cursor-pointer w-full bg-orange-800 text-white font-medium py-2 px-4 rounded-md hover:bg-orange-900";

/// Theme-dependent base classes of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardClasses {
    theme: ThemePreference,
}

impl CardClasses {
    pub fn for_theme(theme: ThemePreference) -> Self {
        Self { theme }
    }

    fn pick(&self, dark: &'static str, light: &'static str) -> &'static str {
        if self.theme.is_dark() {
            dark
        } else {
            light
        }
    }

    /// Card container, before caller classes are merged in.
    pub fn container(&self) -> ClassList {
        ClassList::parse(&format!(
            "w-full {} rounded-2xl overflow-hidden shadow-md hover:shadow-lg \
             transition-shadow duration-300 mx-auto",
            self.pick("bg-gray-800", "bg-white")
        ))
    }

    pub fn placeholder(&self) -> &'static str {
        PLACEHOLDER
    }

    pub fn image(&self, state: ImageLoadState) -> String {
        format!("{} {}", IMAGE_BASE, state.opacity_class())
    }

    pub fn badge(&self, badge: Badge) -> String {
        let color = match badge {
            Badge::Sale => "bg-green-700",
            Badge::OutOfStock => "bg-red-700",
        };
        format!("{} {}", BADGE_BASE, color)
    }

    pub fn title(&self) -> String {
        format!(
            "text-lg font-bold text-center {}",
            self.pick("text-gray-100", "text-gray-900")
        )
    }

    pub fn description(&self) -> String {
        format!("mt-2 text-sm {}", self.pick("text-gray-300", "text-gray-600"))
    }

    pub fn star(&self, filled: bool) -> &'static str {
        if filled {
            STAR_FILLED
        } else {
            self.pick("text-gray-600", "text-gray-300")
        }
    }

    pub fn rating_text(&self) -> String {
        format!("ml-2 text-sm {}", self.pick("text-gray-400", "text-gray-600"))
    }

    pub fn price(&self) -> String {
        format!("text-xl font-bold {}", self.pick("text-gray-200", "text-gray-900"))
    }

    pub fn original_price(&self) -> String {
        format!(
            "text-md line-through {}",
            self.pick("text-gray-400", "text-gray-500")
        )
    }

    pub fn discount(&self) -> &'static str {
        DISCOUNT
    }

    pub fn action(&self) -> &'static str {
        ACTION
    }
}

/// Theme toggle button.
pub const TOGGLE: &str = "px-1 py-1 my-4 rounded-md bg-orange-800 text-white cursor-pointer";
/// Outer block of a loading placeholder card.
pub const SKELETON: &str = "rounded-xl shadow-md overflow-hidden animate-pulse";

/// Page background.
pub fn page_main(theme: ThemePreference) -> String {
    let bg = if theme.is_dark() {
        "bg-gray-900"
    } else {
        "bg-gray-100"
    };
    format!("min-h-screen {} p-6", bg)
}

/// Card grid with `columns` columns on large screens (clamped to 1..=6).
pub fn grid(columns: u8) -> String {
    let columns = columns.clamp(1, 6);
    let small = columns.min(2);
    format!(
        "grid grid-cols-1 sm:grid-cols-{} lg:grid-cols-{} gap-6 max-w-6xl mx-auto",
        small, columns
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        assert_eq!(
            grid(3),
            "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto"
        );
        assert!(grid(0).contains("lg:grid-cols-1"));
        assert!(grid(12).contains("lg:grid-cols-6"));
    }

    #[test]
    fn test_page_main() {
        assert_eq!(page_main(ThemePreference::Dark), "min-h-screen bg-gray-900 p-6");
        assert_eq!(page_main(ThemePreference::Light), "min-h-screen bg-gray-100 p-6");
    }

    #[test]
    fn test_parse_dedups_and_keeps_order() {
        let list = ClassList::parse("  a b  a c ");
        assert_eq!(list.to_string(), "a b c");
    }

    #[test]
    fn test_merge_is_additive() {
        let base = ClassList::parse("w-full bg-white");
        let merged = base.merge(&ClassList::parse("custom-class bg-white"));
        assert_eq!(merged.to_string(), "w-full bg-white custom-class");
    }

    #[test]
    fn test_container_follows_theme() {
        let light = CardClasses::for_theme(ThemePreference::Light).container();
        let dark = CardClasses::for_theme(ThemePreference::Dark).container();
        assert!(light.contains("bg-white"));
        assert!(!light.contains("bg-gray-800"));
        assert!(dark.contains("bg-gray-800"));
    }

    #[test]
    fn test_image_opacity_follows_load_state() {
        let classes = CardClasses::for_theme(ThemePreference::Light);
        assert!(classes.image(ImageLoadState::Loading).ends_with("opacity-0"));
        assert!(classes.image(ImageLoadState::Loaded).ends_with("opacity-100"));
    }

    #[test]
    fn test_badge_colors() {
        let classes = CardClasses::for_theme(ThemePreference::Dark);
        assert!(classes.badge(Badge::Sale).contains("bg-green-700"));
        assert!(classes.badge(Badge::OutOfStock).contains("bg-red-700"));
    }

    #[test]
    fn test_star_classes() {
        let light = CardClasses::for_theme(ThemePreference::Light);
        let dark = CardClasses::for_theme(ThemePreference::Dark);
        assert_eq!(light.star(true), dark.star(true));
        assert_eq!(light.star(false), "text-gray-300");
        assert_eq!(dark.star(false), "text-gray-600");
    }
}
