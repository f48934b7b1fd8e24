#![deny(unsafe_code)]
//! Whole-column cleanup and standardization.
//!
//! Cleanup actions run over all rows of one column and are logged in
//! application order. They are intentionally simpler than transformations:
//! no scopes, no undo cursor. See [`CleanupSession`] for the removal
//! semantics.

mod format;
mod session;
mod standardize;

pub use format::{capitalize_words, format_currency, format_date, format_grouped, parse_numeric};
pub use session::CleanupSession;
pub use standardize::standardize;
