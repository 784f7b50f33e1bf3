//! Small string transforms, one extension trait per concern.
//!
//! Every transform is exposed as a trait implemented for `str`, so the
//! methods read like inherent ones once the trait is in scope:
//!
//! ```
//! use scribe_text::{Capitalize, Whitespace};
//!
//! assert_eq!("hello   there".collapse_whitespace().capitalize_first(), "Hello there");
//! ```
//!
//! Provided transforms:
//! - [`Capitalize`]: uppercase the first character only
//! - [`Chomp`]: cut a string at a marker occurrence
//! - [`Whitespace`]: remove or collapse whitespace runs
//! - [`KeepOnly`]: filter down to a [`CharSet`](scribe_scan::CharSet)
//! - [`WordCount`]: count words by Unicode segmentation
//! - [`Orphan`]: bind the last word with a no-break space
//! - [`Normalize`]: caseless comparison keys
//! - [`DeterministicHash`]: stable djb2 hashing

mod casing;
mod chomp;
mod hash;
mod keeping;
mod normalize;
mod stats;
mod typography;
mod whitespace;

pub use casing::Capitalize;
pub use chomp::Chomp;
pub use hash::DeterministicHash;
pub use keeping::KeepOnly;
pub use normalize::Normalize;
pub use stats::WordCount;
pub use typography::Orphan;
pub use whitespace::Whitespace;
