//! Chomping: cutting a string at a marker occurrence.

/// Cutting away one side of a string around a marker.
///
/// Both operations search for the marker anywhere in the string, not
/// just at its edge. When the found occurrence runs to the very end of
/// the string the part *before* it is returned; otherwise the part
/// *after* it. A marker that does not occur leaves the string as is.
pub trait Chomp {
    /// Cut at the first occurrence of `marker`.
    ///
    /// ```
    /// use scribe_text::Chomp;
    ///
    /// assert_eq!("abcdefghijkl".chomp_left("abcd"), "efghijkl");
    /// ```
    fn chomp_left(&self, marker: &str) -> &str;

    /// Cut at the last occurrence of `marker`.
    ///
    /// ```
    /// use scribe_text::Chomp;
    ///
    /// assert_eq!("abcdefghijkl".chomp_right("ijkl"), "abcdefgh");
    /// ```
    fn chomp_right(&self, marker: &str) -> &str;
}

impl Chomp for str {
    fn chomp_left(&self, marker: &str) -> &str {
        match self.find(marker) {
            Some(at) if at + marker.len() >= self.len() => &self[..at],
            Some(at) => &self[at + marker.len()..],
            None => self,
        }
    }

    fn chomp_right(&self, marker: &str) -> &str {
        match self.rfind(marker) {
            Some(at) if at + marker.len() >= self.len() => &self[..at],
            Some(at) => &self[at + marker.len()..],
            None => self,
        }
    }
}
