//! Typographic fixups.

/// Orphan prevention for rendered text.
pub trait Orphan {
    /// Returns a copy with the last space replaced by a no-break space
    /// (U+00A0), so the final word cannot wrap onto a line of its own.
    ///
    /// Only the plain space character counts; a string without one is
    /// returned unchanged.
    fn remove_orphan(&self) -> String;
}

impl Orphan for str {
    fn remove_orphan(&self) -> String {
        match self.rfind(' ') {
            Some(at) => {
                let mut bound = String::with_capacity(self.len() + 1);
                bound.push_str(&self[..at]);
                bound.push('\u{00a0}');
                bound.push_str(&self[at + 1..]);
                bound
            }
            None => self.to_owned(),
        }
    }
}
