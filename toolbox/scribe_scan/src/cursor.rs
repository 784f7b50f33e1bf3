//! Atomic scanning cursor over a borrowed string.
//!
//! The cursor owns a read position into an immutable input and exposes
//! "try-consume" operations. Every operation either succeeds and advances
//! the position past the consumed span, or fails and leaves the position
//! exactly where it was before the call. Multi-step operations roll back
//! fully when an intermediate step fails, so a failed scan is never
//! observable through the position.
//!
//! # Granularity
//!
//! The cursor counts in Unicode scalar values (`char`). Positions are byte
//! offsets into the input that always fall on character boundaries, and
//! every `count` parameter and [`remainder_count`](TextCursor::remainder_count)
//! are character counts, never byte counts.
//!
//! # Case Sensitivity
//!
//! A cursor built with [`TextCursor::case_insensitive`] folds case when
//! matching literals (scan, skip, peek, and the up-to/through searches).
//! Character-set operations and position arithmetic never fold case.

use memchr::memchr;
use memchr::memmem;
use unicase::UniCase;

use crate::CharSet;

/// Returns `true` for characters that terminate a line: LF, CR, VT, FF,
/// NEL, LINE SEPARATOR, and PARAGRAPH SEPARATOR.
#[inline]
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Returns `true` for whitespace that stays within a line.
#[inline]
fn is_horizontal_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

/// A cursor over a borrowed string with atomic try-consume operations.
///
/// The cursor is [`Copy`], so a saved copy acts as a cheap snapshot for
/// backtracking across multiple operations:
///
/// ```
/// use scribe_scan::TextCursor;
///
/// let mut cursor = TextCursor::new("key value");
/// let saved = cursor;
/// if !(cursor.skip_literal("key") && cursor.skip_literal(":")) {
///     cursor = saved;
/// }
/// assert_eq!(cursor.remainder(), "key value");
/// ```
///
/// Single operations need no snapshot: a failed scan restores the
/// position on its own.
///
/// # Invariant
///
/// `pos` is a byte offset into `input`, always on a character boundary
/// and never past `input.len()`.
#[derive(Clone, Copy, Debug)]
pub struct TextCursor<'a> {
    /// The full input; never mutated after construction.
    input: &'a str,
    /// Current read position (byte offset into `input`).
    pos: usize,
    /// Whether literal matching compares characters exactly.
    case_sensitive: bool,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor at the start of `input` with case-sensitive
    /// literal matching.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            case_sensitive: true,
        }
    }

    /// Create a cursor whose literal operations match case-insensitively.
    ///
    /// Folding uses Unicode simple case folding over the same number of
    /// characters as the literal, so the matched input text can differ
    /// from the literal in case but never in character count.
    #[must_use]
    pub const fn case_insensitive(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            case_sensitive: false,
        }
    }

    /// The full input string, regardless of the current position.
    #[inline]
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// The unconsumed remainder, from the current position to the end.
    #[inline]
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Number of characters left to scan.
    ///
    /// Counted in Unicode scalar values, so this walks the remainder
    /// rather than reading a stored length.
    #[must_use]
    pub fn remainder_count(&self) -> usize {
        self.remainder().chars().count()
    }

    /// Current position as a byte offset into the input.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute byte offset.
    ///
    /// # Contract
    ///
    /// `pos` must be at most `input.len()` and fall on a character
    /// boundary, e.g. a value previously returned by
    /// [`position()`](Self::position) or the offset arithmetic methods.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.input.len(),
            "position {pos} exceeds input length {}",
            self.input.len()
        );
        debug_assert!(
            self.input.is_char_boundary(pos),
            "position {pos} is not a character boundary"
        );
        self.pos = pos;
    }

    /// Returns `true` once the whole input has been consumed.
    #[inline]
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns `true` while at least one character remains.
    #[inline]
    #[must_use]
    pub const fn has_more(&self) -> bool {
        !self.is_at_end()
    }

    /// Whether literal matching compares characters exactly on this
    /// cursor.
    #[inline]
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Move the cursor back to the start of the input.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Byte offset of the position `count` characters away from the
    /// current one. Negative counts move backwards.
    ///
    /// Returns `None` if the offset would run past either end of the
    /// input.
    #[must_use]
    pub fn position_offset_by(&self, count: isize) -> Option<usize> {
        if count >= 0 {
            self.offset_forward(count.unsigned_abs())
        } else {
            self.offset_backward(count.unsigned_abs())
        }
    }

    /// Like [`position_offset_by()`](Self::position_offset_by), but
    /// saturates at the start or end of the input instead of failing.
    #[must_use]
    pub fn position_offset_by_clamped(&self, count: isize) -> usize {
        match self.position_offset_by(count) {
            Some(pos) => pos,
            None if count < 0 => 0,
            None => self.input.len(),
        }
    }

    // Scanning

    /// Consume exactly one character.
    #[inline]
    pub fn scan_char(&mut self) -> Option<&'a str> {
        let c = self.remainder().chars().next()?;
        let start = self.pos;
        self.pos += c.len_utf8();
        Some(&self.input[start..self.pos])
    }

    /// Consume exactly `count` characters.
    ///
    /// Fails without consuming anything if fewer than `count` remain.
    pub fn scan_chars(&mut self, count: usize) -> Option<&'a str> {
        let end = self.offset_forward(count)?;
        let start = self.pos;
        self.pos = end;
        Some(&self.input[start..end])
    }

    /// Consume `literal` if it occurs at the current position.
    ///
    /// Returns the matched input text, which under case-insensitive
    /// matching can differ from `literal` in case. An empty literal never
    /// matches.
    pub fn scan_literal(&mut self, literal: &str) -> Option<&'a str> {
        let len = self.match_literal_at(self.pos, literal)?;
        let start = self.pos;
        self.pos += len;
        Some(&self.input[start..self.pos])
    }

    /// Consume `literal` exactly `count` times in a row.
    ///
    /// Fails and restores the starting position if fewer than `count`
    /// consecutive occurrences exist, even when some of them were already
    /// consumed. Stops early without failing when the input ends exactly
    /// on a repetition boundary. A `count` of zero never matches.
    pub fn scan_repeated(&mut self, literal: &str, count: usize) -> Option<&'a str> {
        if count == 0 {
            return None;
        }
        let start = self.pos;
        for _ in 0..count {
            if self.scan_literal(literal).is_none() {
                self.pos = start;
                return None;
            }
            if self.is_at_end() {
                break;
            }
        }
        Some(&self.input[start..self.pos])
    }

    /// Consume one or more consecutive occurrences of `literal`.
    ///
    /// Fails if there are none.
    pub fn scan_run(&mut self, literal: &str) -> Option<&'a str> {
        let start = self.pos;
        while self.scan_literal(literal).is_some() {}
        if self.pos == start {
            return None;
        }
        Some(&self.input[start..self.pos])
    }

    /// Consume everything strictly before the next occurrence of
    /// `literal`.
    ///
    /// Fails, leaving the position unchanged, if `literal` does not occur
    /// in the remainder. Succeeds with an empty result when the occurrence
    /// starts at the current position. The literal itself is not consumed.
    pub fn scan_up_to(&mut self, literal: &str) -> Option<&'a str> {
        let found = self.find_literal(literal)?;
        let start = self.pos;
        self.pos = found;
        Some(&self.input[start..found])
    }

    /// Consume everything up to and including the next occurrence of
    /// `literal`.
    ///
    /// Fails without consuming anything if `literal` does not occur.
    pub fn scan_through(&mut self, literal: &str) -> Option<&'a str> {
        let found = self.find_literal(literal)?;
        let len = self.match_literal_at(found, literal)?;
        let start = self.pos;
        self.pos = found + len;
        Some(&self.input[start..self.pos])
    }

    /// Consume everything up to and past the next occurrence of
    /// `literal`, returning only the text before it.
    ///
    /// Fails without consuming anything if `literal` does not occur.
    pub fn scan_up_to_and_skip(&mut self, literal: &str) -> Option<&'a str> {
        let found = self.find_literal(literal)?;
        let len = self.match_literal_at(found, literal)?;
        let start = self.pos;
        self.pos = found + len;
        Some(&self.input[start..found])
    }

    /// Consume up to `count` characters, fewer when the remainder is
    /// shorter. Fails only when no characters are available.
    ///
    /// On success the cursor always ends up at the end of the input, even
    /// when the returned text covers less than the full remainder.
    pub fn scan_at_most(&mut self, count: usize) -> Option<&'a str> {
        if count == 0 || self.is_at_end() {
            return None;
        }
        let start = self.pos;
        let end = self.offset_forward(count).unwrap_or(self.input.len());
        self.pos = self.input.len();
        Some(&self.input[start..end])
    }

    /// Consume exactly one character if it is a member of `set`.
    ///
    /// A non-member first character fails the scan before anything is
    /// consumed.
    pub fn scan_one_of(&mut self, set: &CharSet) -> Option<&'a str> {
        let c = self.remainder().chars().next()?;
        if !set.contains(c) {
            return None;
        }
        let start = self.pos;
        self.pos += c.len_utf8();
        Some(&self.input[start..self.pos])
    }

    /// Consume the maximal run of characters that are members of `set`.
    ///
    /// Fails if the current character is not a member.
    pub fn scan_any_of(&mut self, set: &CharSet) -> Option<&'a str> {
        self.scan_while(|c| set.contains(c))
    }

    /// Consume everything strictly before the next character that is a
    /// member of `set`.
    ///
    /// Fails, leaving the position unchanged, if no member occurs in the
    /// remainder.
    pub fn scan_up_to_one_of(&mut self, set: &CharSet) -> Option<&'a str> {
        let offset = self
            .remainder()
            .char_indices()
            .find(|&(_, c)| set.contains(c))
            .map(|(i, _)| i)?;
        let start = self.pos;
        self.pos = start + offset;
        Some(&self.input[start..self.pos])
    }

    /// Consume a maximal run of whitespace, line breaks included.
    pub fn scan_whitespace(&mut self) -> Option<&'a str> {
        self.scan_while(char::is_whitespace)
    }

    /// Consume a maximal run of whitespace without crossing a line break.
    pub fn scan_horizontal_whitespace(&mut self) -> Option<&'a str> {
        self.scan_while(is_horizontal_whitespace)
    }

    /// Consume exactly one line feed.
    pub fn scan_newline(&mut self) -> Option<&'a str> {
        if !self.remainder().starts_with('\n') {
            return None;
        }
        let start = self.pos;
        self.pos += 1;
        Some(&self.input[start..self.pos])
    }

    /// Consume everything strictly before the next line feed.
    ///
    /// Fails if the remainder holds no line feed; succeeds with an empty
    /// result when the line feed is the next character.
    pub fn scan_up_to_newline(&mut self) -> Option<&'a str> {
        let offset = memchr(b'\n', self.remainder().as_bytes())?;
        let start = self.pos;
        self.pos = start + offset;
        Some(&self.input[start..self.pos])
    }

    /// Consume everything up to and including the next line feed.
    ///
    /// Fails without consuming anything if the remainder holds no line
    /// feed.
    pub fn scan_through_newline(&mut self) -> Option<&'a str> {
        let offset = memchr(b'\n', self.remainder().as_bytes())?;
        let start = self.pos;
        self.pos = start + offset + 1;
        Some(&self.input[start..self.pos])
    }

    // Skipping

    /// Skip one character. Returns whether anything was consumed.
    pub fn skip_char(&mut self) -> bool {
        self.scan_char().is_some()
    }

    /// Skip exactly `count` characters, all or nothing.
    pub fn skip_chars(&mut self, count: usize) -> bool {
        self.scan_chars(count).is_some()
    }

    /// Skip `literal` if it occurs at the current position.
    pub fn skip_literal(&mut self, literal: &str) -> bool {
        self.scan_literal(literal).is_some()
    }

    /// Skip everything strictly before the next occurrence of `literal`.
    pub fn skip_up_to(&mut self, literal: &str) -> bool {
        self.scan_up_to(literal).is_some()
    }

    /// Skip everything up to and including the next occurrence of
    /// `literal`.
    pub fn skip_through(&mut self, literal: &str) -> bool {
        self.scan_through(literal).is_some()
    }

    /// Skip one character if it is a member of `set`.
    pub fn skip_one_of(&mut self, set: &CharSet) -> bool {
        self.scan_one_of(set).is_some()
    }

    /// Skip the maximal run of members of `set`.
    pub fn skip_any_of(&mut self, set: &CharSet) -> bool {
        self.scan_any_of(set).is_some()
    }

    /// Skip everything strictly before the next member of `set`.
    pub fn skip_up_to_one_of(&mut self, set: &CharSet) -> bool {
        self.scan_up_to_one_of(set).is_some()
    }

    /// Skip a maximal whitespace run, line breaks included.
    pub fn skip_whitespace(&mut self) -> bool {
        self.scan_whitespace().is_some()
    }

    /// Skip a maximal whitespace run without crossing a line break.
    pub fn skip_horizontal_whitespace(&mut self) -> bool {
        self.scan_horizontal_whitespace().is_some()
    }

    /// Skip exactly one line feed.
    pub fn skip_newline(&mut self) -> bool {
        self.scan_newline().is_some()
    }

    /// Skip everything up to and including the next line feed.
    pub fn skip_through_newline(&mut self) -> bool {
        self.scan_through_newline().is_some()
    }

    /// Consume a run of horizontal whitespace followed by a line feed,
    /// but only when nothing else precedes the line feed.
    ///
    /// Rolls back and returns `false` when other content intervenes or no
    /// line feed follows, so a plain end of input does not count as a
    /// blank line.
    pub fn skip_blank_line(&mut self) -> bool {
        let start = self.pos;
        let _ = self.scan_horizontal_whitespace();
        if self.scan_newline().is_some() {
            return true;
        }
        self.pos = start;
        false
    }

    // Peeking

    /// Run `op` against the cursor and restore the position afterwards,
    /// handing back its result.
    ///
    /// This is the lookahead counterpart of every scanning operation:
    /// `cursor.peeking(|c| c.scan_literal("let"))` returns what the scan
    /// would return but leaves the cursor where it was, whether or not
    /// the scan succeeded.
    pub fn peeking<R>(&mut self, op: impl FnOnce(&mut Self) -> R) -> R {
        let start = self.pos;
        let result = op(self);
        self.pos = start;
        result
    }

    /// The next character, without consuming it.
    #[inline]
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The next `count` characters, without consuming them.
    ///
    /// Returns `None` if fewer than `count` remain.
    #[must_use]
    pub fn peek_chars(&self, count: usize) -> Option<&'a str> {
        let end = self.offset_forward(count)?;
        Some(&self.input[self.pos..end])
    }

    /// Up to `count` upcoming characters, without consuming them.
    ///
    /// Shorter than `count` characters, possibly empty, when the
    /// remainder is.
    #[must_use]
    pub fn peek_at_most(&self, count: usize) -> &'a str {
        let end = self.offset_forward(count).unwrap_or(self.input.len());
        &self.input[self.pos..end]
    }

    /// Whether `literal` occurs at the current position.
    #[must_use]
    pub fn peek_literal(&self, literal: &str) -> bool {
        self.match_literal_at(self.pos, literal).is_some()
    }

    /// Whether the next character is a member of `set`.
    #[must_use]
    pub fn peek_one_of(&self, set: &CharSet) -> bool {
        self.peek_char().is_some_and(|c| set.contains(c))
    }

    /// Returns `true` when the rest of the current line is blank, i.e.
    /// only horizontal whitespace precedes the next line feed.
    ///
    /// An exhausted cursor has no line left to inspect and returns
    /// `false`, as does a final line with no terminating line feed.
    #[must_use]
    pub fn is_blank_line(&self) -> bool {
        let first = self
            .remainder()
            .chars()
            .find(|&c| !is_horizontal_whitespace(c));
        first == Some('\n')
    }

    // Internals

    /// Byte offset `count` characters ahead of the current position, or
    /// `None` if fewer remain.
    fn offset_forward(&self, count: usize) -> Option<usize> {
        let mut rest = self.remainder().chars();
        for _ in 0..count {
            rest.next()?;
        }
        Some(self.input.len() - rest.as_str().len())
    }

    /// Byte offset `count` characters behind the current position, or
    /// `None` if fewer precede it.
    fn offset_backward(&self, count: usize) -> Option<usize> {
        let mut preceding = self.input[..self.pos].chars();
        for _ in 0..count {
            preceding.next_back()?;
        }
        Some(preceding.as_str().len())
    }

    /// Consume the maximal run of characters satisfying `pred`. Fails if
    /// the run is empty.
    fn scan_while(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let rem = self.remainder();
        let run_len = rem
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rem.len(), |(i, _)| i);
        if run_len == 0 {
            return None;
        }
        let start = self.pos;
        self.pos = start + run_len;
        Some(&self.input[start..self.pos])
    }

    /// Matches `literal` against the input at byte offset `at`, returning
    /// the byte length of the matched span.
    ///
    /// Case-insensitive cursors take the literal's character count from
    /// the input and compare the two slices under Unicode case folding,
    /// so the span's byte length can differ from the literal's. An empty
    /// literal never matches.
    fn match_literal_at(&self, at: usize, literal: &str) -> Option<usize> {
        if literal.is_empty() {
            return None;
        }
        if self.case_sensitive {
            return self.input[at..].starts_with(literal).then_some(literal.len());
        }
        let mut rest = self.input[at..].chars();
        for _ in literal.chars() {
            rest.next()?;
        }
        let len = self.input.len() - at - rest.as_str().len();
        let candidate = &self.input[at..at + len];
        (UniCase::new(candidate) == UniCase::new(literal)).then_some(len)
    }

    /// Absolute byte offset of the next occurrence of `literal` at or
    /// after the current position. An empty literal is never found.
    fn find_literal(&self, literal: &str) -> Option<usize> {
        if literal.is_empty() {
            return None;
        }
        if self.case_sensitive {
            // A byte-level hit for valid UTF-8 always lands on a character
            // boundary, so the search can stay on bytes.
            return memmem::find(self.remainder().as_bytes(), literal.as_bytes())
                .map(|found| self.pos + found);
        }
        self.remainder()
            .char_indices()
            .map(|(i, _)| self.pos + i)
            .find(|&at| self.match_literal_at(at, literal).is_some())
    }
}
