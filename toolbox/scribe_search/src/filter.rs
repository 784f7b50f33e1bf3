//! Subsequence-forgiving list filtering.

use regex::Regex;
use std::fmt;

/// Filters a list down to items whose key contains the query characters
/// in order, with anything in between.
///
/// The query compiles to a case-insensitive pattern of its escaped
/// characters joined by `.*`, so `"fde"` keeps `"FileDownloadError"`
/// and query text can never break the pattern.
pub struct ForgivingFilter<T> {
    key: Box<dyn Fn(&T) -> &str + Send + Sync>,
    pattern: Option<Regex>,
}

impl<T> ForgivingFilter<T> {
    /// Builds a filter that matches against the key produced by `key`.
    ///
    /// With no query set, every item passes.
    pub fn new(key: impl Fn(&T) -> &str + Send + Sync + 'static) -> Self {
        Self { key: Box::new(key), pattern: None }
    }

    /// Sets the query, trimming surrounding whitespace first. A query
    /// that trims to nothing clears the filter.
    pub fn set_query(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.pattern = None;
            return;
        }
        let mut pattern = String::from("(?i).*");
        for c in trimmed.chars() {
            pattern.push_str(&regex::escape(&c.to_string()));
            pattern.push_str(".*");
        }
        #[expect(clippy::expect_used, reason = "escaping every character yields a valid pattern")]
        let compiled = Regex::new(&pattern).expect("forgiving pattern compiles");
        self.pattern = Some(compiled);
    }

    /// Returns the items whose key matches the current query.
    pub fn filter<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        match &self.pattern {
            None => items.iter().collect(),
            Some(pattern) => {
                items.iter().filter(|item| pattern.is_match((self.key)(item))).collect()
            }
        }
    }
}

impl<T> fmt::Debug for ForgivingFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForgivingFilter")
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn title_filter() -> ForgivingFilter<&'static str> {
        ForgivingFilter::new(|title: &&'static str| *title)
    }

    #[test]
    fn passes_everything_without_a_query() {
        let filter = title_filter();
        let items = vec!["FileDownloadError", "FileUpload", "Folder"];

        assert_eq!(filter.filter(&items), [&"FileDownloadError", &"FileUpload", &"Folder"]);
    }

    #[test]
    fn matches_characters_in_order() {
        let mut filter = title_filter();
        let items = vec!["FileDownloadError", "FileUpload", "Folder"];

        filter.set_query("fde");

        assert_eq!(filter.filter(&items), [&"FileDownloadError", &"Folder"]);
    }

    #[test]
    fn matching_ignores_case() {
        let mut filter = title_filter();
        let items = vec!["FileDownloadError", "FileUpload"];

        filter.set_query("FDE");

        assert_eq!(filter.filter(&items), [&"FileDownloadError"]);
    }

    #[test]
    fn trims_the_query() {
        let mut filter = title_filter();
        let items = vec!["FileDownloadError", "FileUpload"];

        filter.set_query("  fde  ");

        assert_eq!(filter.filter(&items), [&"FileDownloadError"]);
    }

    #[test]
    fn a_blank_query_clears_the_filter() {
        let mut filter = title_filter();
        let items = vec!["FileDownloadError", "FileUpload"];

        filter.set_query("fde");
        filter.set_query("   ");

        assert_eq!(filter.filter(&items), [&"FileDownloadError", &"FileUpload"]);
    }

    #[test]
    fn replacing_the_query_replaces_the_matches() {
        let mut filter = title_filter();
        let items = vec!["C++ Primer", "C Primer"];

        filter.set_query("primer");
        assert_eq!(filter.filter(&items), [&"C++ Primer", &"C Primer"]);

        filter.set_query("c++");
        assert_eq!(filter.filter(&items), [&"C++ Primer"]);
    }

    #[test]
    fn query_metacharacters_match_literally() {
        let mut filter = title_filter();
        let items = vec!["a.b", "axb"];

        filter.set_query(".");

        assert_eq!(filter.filter(&items), [&"a.b"]);
    }

    #[test]
    fn no_match_yields_an_empty_list() {
        let mut filter = title_filter();
        let items = vec!["FileDownloadError", "FileUpload"];

        filter.set_query("xyz");

        assert!(filter.filter(&items).is_empty());
    }

    #[test]
    fn filtering_an_empty_list_yields_an_empty_list() {
        let filter = title_filter();

        assert!(filter.filter(&Vec::<&str>::new()).is_empty());
    }
}
