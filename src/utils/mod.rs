//! Utility modules for web, DOM, and encoding operations.
//!
//! Provides:
//! - [`cookie`] - `document.cookie` access with encoded values
//! - [`dom`] - Window/storage/navigation helpers
//! - [`format_price`] - Price display formatting
//! - [`url`] - Query-string encoding and parsing

pub mod cookie;
pub mod dom;
mod format;
pub mod url;

pub use format::format_price;
