//! The light/dark preference value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ThemeError;

/// Visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Both values, in a fixed order.
    pub const ALL: [ThemePreference; 2] = [ThemePreference::Light, ThemePreference::Dark];

    /// Persisted form and visual-root marker ("light" / "dark").
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The opposite preference.
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemePreference::Dark
    }

    /// Label for the theme toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "\u{2600}\u{fe0f} Light Mode",
            ThemePreference::Dark => "\u{1f319} Dark Mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    /// Strict parse: only the exact persisted forms are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}
