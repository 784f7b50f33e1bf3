//! Tokenization failure reporting.

use std::ops::Range;

use thiserror::Error;

/// Error raised when tokenization cannot continue.
///
/// Tokenization is all-or-nothing: the first position where no rule
/// matches aborts the whole call. The error carries the absolute byte
/// range of the input that was left unconsumed, from the failing
/// position to the end, so callers can point at the offending text:
///
/// ```
/// use scribe_lexer::{Lexer, LexError, Rule};
///
/// let lexer = Lexer::new(vec![
///     Rule::new(r"[a-z]+", |text| Some(text.to_owned())).unwrap(),
/// ]);
/// let err = lexer.tokenize("abc#def").unwrap_err();
/// let LexError::TokenNotRecognized { range } = err;
/// assert_eq!(range, 3..7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No rule matched at the start of the given byte range.
    #[error("no rule matched the remaining input at bytes {range:?}")]
    TokenNotRecognized {
        /// Absolute byte range of the unconsumed remainder.
        range: Range<usize>,
    },
}

impl LexError {
    /// The absolute byte range of input the lexer could not consume.
    #[must_use]
    pub fn unmatched_range(&self) -> Range<usize> {
        match self {
            Self::TokenNotRecognized { range } => range.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LexError;

    #[test]
    fn display_names_the_byte_range() {
        let err = LexError::TokenNotRecognized { range: 4..17 };
        assert_eq!(
            err.to_string(),
            "no rule matched the remaining input at bytes 4..17"
        );
    }

    #[test]
    fn unmatched_range_exposes_the_span() {
        let err = LexError::TokenNotRecognized { range: 0..3 };
        assert_eq!(err.unmatched_range(), 0..3);
    }
}
