//! Product identifiers.
//!
//! Product ids arrive from the data source either as JSON strings or as
//! JSON integers. Both forms are kept as given so the id handed back to an
//! action callback is exactly the one the source sent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product identifier, textual or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Integer id (e.g. `42`).
    Number(i64),
    /// Text id (e.g. `"sku-42"`).
    Text(String),
}

impl ProductId {
    /// Create a textual id.
    pub fn new(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }

    /// The key used to compare ids within one listing.
    ///
    /// `1` and `"1"` render identically, so they share a key.
    pub fn listing_key(&self) -> String {
        self.to_string()
    }

    /// Whether this is a numeric id.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_json_string_and_number() {
        let text: ProductId = serde_json::from_str("\"prod-1\"").unwrap();
        let number: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(text, ProductId::new("prod-1"));
        assert_eq!(number, ProductId::Number(7));
        assert!(number.is_numeric());
    }

    #[test]
    fn test_id_serializes_in_original_form() {
        assert_eq!(serde_json::to_string(&ProductId::Number(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ProductId::from("7")).unwrap(), "\"7\"");
    }

    #[test]
    fn test_id_display_and_listing_key() {
        assert_eq!(ProductId::from(12_i64).to_string(), "12");
        assert_eq!(ProductId::from(12_i64).listing_key(), ProductId::from("12").listing_key());
        assert_ne!(ProductId::from(12_i64), ProductId::from("12"));
    }
}
