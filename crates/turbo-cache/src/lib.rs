//! Type-safe Key-Value persistence layer for TurboCommerce.
//!
//! A [`Cache`] wraps any [`KvStore`] backend and adds JSON serialization on
//! top of the raw byte interface. Backends:
//!
//! - [`MemoryStore`] - process-local map, used by tests and previews
//! - [`FileStore`] - a JSON document on disk, used by the CLI
//! - `SpinStore` - Spin's Key-Value Store (only on `wasm32`)
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::Cache;
//!
//! let cache = Cache::memory();
//! cache.set_str("theme", "dark").unwrap();
//! assert_eq!(cache.get_str("theme").unwrap().as_deref(), Some("dark"));
//!
//! cache.set("prefs:columns", &vec![1, 2, 3]).unwrap();
//! let items: Option<Vec<i32>> = cache.get("prefs:columns").unwrap();
//! assert_eq!(items, Some(vec![1, 2, 3]));
//! ```

mod error;
mod kv;
#[cfg(target_arch = "wasm32")]
mod spin;
mod store;

pub use error::CacheError;
pub use kv::Cache;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinStore;
pub use store::{FileStore, KvStore, MemoryStore, StoreBounds};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
