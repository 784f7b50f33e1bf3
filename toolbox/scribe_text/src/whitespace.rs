//! Whitespace removal and collapsing.

/// Whitespace cleanup over a whole string.
pub trait Whitespace {
    /// Returns a copy with every whitespace run deleted.
    ///
    /// ```
    /// use scribe_text::Whitespace;
    ///
    /// assert_eq!("This is a test.".remove_whitespace(), "Thisisatest.");
    /// ```
    fn remove_whitespace(&self) -> String;

    /// Returns a copy with every whitespace run collapsed to a single
    /// space and leading/trailing whitespace dropped.
    ///
    /// ```
    /// use scribe_text::Whitespace;
    ///
    /// assert_eq!("This    is    a    test.".collapse_whitespace(), "This is a test.");
    /// ```
    fn collapse_whitespace(&self) -> String;
}

impl Whitespace for str {
    fn remove_whitespace(&self) -> String {
        self.split_whitespace().collect()
    }

    fn collapse_whitespace(&self) -> String {
        self.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
