//! Atomic text scanning over borrowed strings.
//!
//! This crate provides:
//! - [`TextCursor`]: a position-tracking cursor with atomic try-consume
//!   operations (scan, skip, and peek families)
//! - [`CharSet`]: an immutable character membership predicate for the
//!   one-of/any-of/up-to-one-of operations
//!
//! # The Atomicity Contract
//!
//! Every scanning operation either succeeds and advances the cursor past
//! the consumed text, or fails and leaves the position exactly as it was,
//! even when an intermediate step of a composite operation had already
//! consumed something. Backtracking parsers built on the cursor branch on
//! `Option` results and never need to repair the position themselves.
//!
//! # Usage
//!
//! ```
//! use scribe_scan::{CharSet, TextCursor};
//!
//! let mut cursor = TextCursor::new("width: 320px");
//! assert!(cursor.skip_through(": "));
//! let digits = cursor.scan_any_of(&CharSet::digits());
//! assert_eq!(digits, Some("320"));
//! assert_eq!(cursor.remainder(), "px");
//! ```

mod char_set;
mod cursor;

pub use char_set::CharSet;
pub use cursor::TextCursor;
