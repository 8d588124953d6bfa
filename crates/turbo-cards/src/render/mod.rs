//! HTML renderers for cards and the catalog page.

mod card;
mod page;
mod skeleton;

pub use card::*;
pub use page::*;
pub use skeleton::*;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
