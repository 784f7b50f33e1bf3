//! Ordered rule-based tokenization.
//!
//! This crate provides:
//! - [`Rule`]: a regex pattern paired with a token factory, with a
//!   text-only and a capture/range-aware constructor
//! - [`Lexer`]: the scan-and-dispatch loop applying rules in priority
//!   order over a whole input
//! - [`LexError`]: the all-or-nothing failure carrying the unmatched
//!   byte range
//!
//! # First Match Wins
//!
//! Rule order encodes priority. At each position the first rule whose
//! pattern matches the prefix of the remaining input is chosen, never
//! the longest match. Specific rules go before catch-all rules.
//!
//! # Usage
//!
//! ```
//! use scribe_lexer::{Lexer, Rule};
//!
//! #[derive(Debug, PartialEq)]
//! enum Token {
//!     Number(i64),
//!     Word(String),
//! }
//!
//! let lexer = Lexer::new(vec![
//!     Rule::new(r"\s+", |_| None).unwrap(),
//!     Rule::new(r"\d+", |text| text.parse().ok().map(Token::Number)).unwrap(),
//!     Rule::new(r"[a-zA-Z]+", |text| Some(Token::Word(text.to_owned()))).unwrap(),
//! ]);
//!
//! let tokens = lexer.tokenize("add 2").unwrap();
//! assert_eq!(tokens, vec![Token::Word("add".to_owned()), Token::Number(2)]);
//! ```

mod error;
mod lexer;
mod rule;

pub use error::LexError;
pub use lexer::Lexer;
pub use rule::{Rule, RuleMatch};
