//! Theme error types.

use thiserror::Error;

/// Errors from parsing theme values.
///
/// The store itself never returns these to callers; it logs them and falls
/// back to the system preference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A persisted or configured value is neither "light" nor "dark".
    #[error("Invalid theme value: {0:?}")]
    InvalidPreference(String),
}
