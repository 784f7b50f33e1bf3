//! Lexing rules: a pattern paired with a token factory.

use std::fmt;
use std::ops::Range;

use regex::{Captures, Regex};

/// Everything a rule's pattern matched at one position.
///
/// Handed to range-aware factories built with
/// [`Rule::with_captures`]. Borrows from the tokenized input; the range
/// is absolute within that input.
#[derive(Debug)]
pub struct RuleMatch<'t> {
    text: &'t str,
    range: Range<usize>,
    captures: Captures<'t>,
}

impl<'t> RuleMatch<'t> {
    /// The full matched text.
    #[must_use]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Absolute byte range of the match within the tokenized input.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Text captured by group `index`, with group 0 being the whole
    /// match. `None` for out-of-bounds indices and groups that did not
    /// participate in the match.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|group| group.as_str())
    }
}

type Factory<T> = Box<dyn Fn(&RuleMatch<'_>) -> Option<T> + Send + Sync>;

/// A single lexing rule: a pattern plus the factory that turns each
/// match into a token.
///
/// The pattern is implicitly anchored; it must match at the start of
/// the remaining input, and an occurrence further along does not count.
/// A factory returning `None` consumes the match without producing a
/// token, which is how whitespace and comments are discarded.
///
/// Rules carry no mutable state, so a [`Lexer`](crate::Lexer) built
/// from them can be shared freely once constructed.
pub struct Rule<T> {
    /// Pattern as supplied by the caller, kept for diagnostics.
    pattern: String,
    /// Compiled form, anchored to the start of the search range.
    regex: Regex,
    factory: Factory<T>,
}

impl<T> Rule<T> {
    /// Build a rule whose factory sees only the matched text.
    ///
    /// # Errors
    ///
    /// Returns the underlying regex error when `pattern` is not a valid
    /// regular expression.
    pub fn new(
        pattern: &str,
        factory: impl Fn(&str) -> Option<T> + Send + Sync + 'static,
    ) -> Result<Self, regex::Error> {
        Self::with_captures(pattern, move |found: &RuleMatch<'_>| factory(found.text()))
    }

    /// Build a rule whose factory also receives capture groups and the
    /// absolute match range via [`RuleMatch`].
    ///
    /// # Errors
    ///
    /// Returns the underlying regex error when `pattern` is not a valid
    /// regular expression.
    pub fn with_captures(
        pattern: &str,
        factory: impl Fn(&RuleMatch<'_>) -> Option<T> + Send + Sync + 'static,
    ) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})"))?;
        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
            factory: Box::new(factory),
        })
    }

    /// The pattern text this rule was built from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match this rule against the input starting at byte offset `at`.
    ///
    /// Empty matches never count; a pattern that can match the empty
    /// string behaves as if it did not match, so it cannot stall the
    /// tokenize loop.
    pub(crate) fn match_prefix<'t>(&self, input: &'t str, at: usize) -> Option<RuleMatch<'t>> {
        let captures = self.regex.captures(&input[at..])?;
        let whole = captures.get(0)?;
        if whole.is_empty() {
            return None;
        }
        Some(RuleMatch {
            text: whole.as_str(),
            range: at + whole.start()..at + whole.end(),
            captures,
        })
    }

    /// Run the factory for a match produced by this rule.
    pub(crate) fn produce(&self, found: &RuleMatch<'_>) -> Option<T> {
        (self.factory)(found)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}
