//! Comparison keys for caseless matching.

/// Deriving a normalized key for comparisons and searches.
pub trait Normalize {
    /// A lowercased copy suitable as a case-insensitive comparison or
    /// search key.
    ///
    /// Uses the full Unicode lowercase mapping without any locale, so
    /// two strings compare equal exactly when their normalized forms
    /// do.
    fn normalized(&self) -> String;
}

impl Normalize for str {
    fn normalized(&self) -> String {
        self.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Normalize;

    #[test]
    fn test_lowercases_ascii() {
        assert_eq!("CaFé".normalized(), "café");
    }

    #[test]
    fn test_lowercases_non_ascii_letters() {
        assert_eq!("ÅNGSTRÖM".normalized(), "ångström");
    }

    #[test]
    fn test_already_normalized_input_is_unchanged() {
        assert_eq!("plain".normalized(), "plain");
    }

    #[test]
    fn test_normalized_forms_compare_equal_across_case() {
        assert_eq!("ESPAÑA".normalized(), "España".normalized());
    }
}
