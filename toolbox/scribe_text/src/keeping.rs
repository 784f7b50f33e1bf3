//! Filtering a string down to a character set.

use scribe_scan::CharSet;

/// Keeping only the characters that belong to a set.
pub trait KeepOnly {
    /// Returns a copy containing only the characters that are members
    /// of `set`, in their original order.
    ///
    /// ```
    /// use scribe_scan::CharSet;
    /// use scribe_text::KeepOnly;
    ///
    /// let kept = "This is a test (1 2 3)+.".keep_only(&CharSet::alphanumeric());
    /// assert_eq!(kept, "Thisisatest123");
    /// ```
    fn keep_only(&self, set: &CharSet) -> String;
}

impl KeepOnly for str {
    fn keep_only(&self, set: &CharSet) -> String {
        self.chars().filter(|&c| set.contains(c)).collect()
    }
}
