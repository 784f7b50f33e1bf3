//! String validators.
//!
//! Every validator answers one yes/no question about one string through
//! the [`Validator`] trait. Validators covering alternative forms of the
//! same value combine with [`ValidatorGroup`], which accepts an input
//! when any member does.
//!
//! Provided validators:
//!
//! - [`RegexValidator`]: an arbitrary pattern.
//! - [`IntValidator`]: digit strings, optionally range checked.
//! - [`UuidValidator`]: the 8-4-4-4-12 hexadecimal shape.
//! - [`PersonalNumberValidator`]: Swedish personal identity numbers.
//! - [`SisWaybillValidator`], [`GsinWaybillValidator`] and their any-of
//!   group [`WaybillValidator`]: parcel waybill numbers with their check
//!   digits.
//!
//! # Usage
//!
//! ```
//! use scribe_validate::{IntValidator, Validator};
//!
//! let port = IntValidator::u16_range();
//! assert!(port.is_valid("8080"));
//! assert!(!port.is_valid("65536"));
//! assert!(!port.is_valid("-1"));
//! ```

mod checksum;
mod int;
mod pattern;
mod personal_number;
mod uuid;
mod validator;
mod waybill;

pub use int::IntValidator;
pub use pattern::RegexValidator;
pub use personal_number::PersonalNumberValidator;
pub use uuid::UuidValidator;
pub use validator::{Validator, ValidatorGroup};
pub use waybill::{GsinWaybillValidator, SisWaybillValidator, WaybillValidator};
