//! The tokenize loop: ordered rules applied over a whole input.

use std::fmt;

use tracing::trace;

use crate::{LexError, Rule, RuleMatch};

/// A tokenizer built from an ordered list of rules.
///
/// Rules are tried in declaration order at every position, and the
/// first rule that matches wins regardless of whether a later rule
/// would match a longer span. Callers therefore place specific rules
/// ahead of catch-all ones.
///
/// A lexer is immutable after construction and holds no per-input
/// state, so one instance can tokenize any number of inputs, from any
/// number of threads.
pub struct Lexer<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Lexer<T> {
    /// Build a lexer from rules in priority order.
    #[must_use]
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    /// Tokenize `input` from start to end.
    ///
    /// Runs the scan-and-dispatch loop: at each position the first rule
    /// whose pattern matches the prefix of the remaining input is
    /// applied, its factory output (when any) is appended, and the
    /// position advances past the match. Tokens come back in input
    /// order. An empty input tokenizes to an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::TokenNotRecognized`] with the unconsumed
    /// byte range as soon as no rule matches at the current position.
    /// Tokenization is all-or-nothing; no partial token sequence is
    /// recovered.
    pub fn tokenize(&self, input: &str) -> Result<Vec<T>, LexError> {
        trace!(len = input.len(), rules = self.rules.len(), "tokenize");
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let Some((rule, found)) = self.first_match(input, pos) else {
                trace!(pos, "no rule matched");
                return Err(LexError::TokenNotRecognized {
                    range: pos..input.len(),
                });
            };
            let end = found.range().end;
            trace!(pos, end, pattern = rule.pattern(), "rule matched");
            if let Some(token) = rule.produce(&found) {
                tokens.push(token);
            }
            pos = end;
        }
        Ok(tokens)
    }

    /// First rule in declaration order matching at byte offset `at`,
    /// together with its match.
    fn first_match<'t>(&self, input: &'t str, at: usize) -> Option<(&Rule<T>, RuleMatch<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_prefix(input, at).map(|found| (rule, found)))
    }
}

// Manual impl so lexers over non-Debug token types stay debuggable.
impl<T> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer").field("rules", &self.rules).finish()
    }
}
