//! Observability for the TurboCommerce presentation-state crates.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging scoped to a component
//! - `LogBuilder` - Fluent construction of log entries with fields
//! - `LogTarget` - Where entries go (stderr, or an in-memory buffer)

mod logging;

pub use logging::*;
