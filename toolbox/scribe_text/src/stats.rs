//! Word-level statistics.

use unicode_segmentation::UnicodeSegmentation;

/// Counting words by Unicode word boundaries.
pub trait WordCount {
    /// Number of words in the string, using the Unicode text
    /// segmentation rules (UAX #29). Punctuation and whitespace do not
    /// count; digit runs do.
    fn word_count(&self) -> usize;
}

impl WordCount for str {
    fn word_count(&self) -> usize {
        self.unicode_words().count()
    }
}
