//! First-letter casing.

/// Capitalization of the first character only.
pub trait Capitalize {
    /// Returns a copy with the first character uppercased and the rest
    /// unchanged.
    ///
    /// Uses the full Unicode uppercase mapping, so the first character
    /// can expand to several (`ß` becomes `SS`). No locale is taken
    /// into account.
    fn capitalize_first(&self) -> String;
}

impl Capitalize for str {
    fn capitalize_first(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
