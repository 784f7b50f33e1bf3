//! Distance-ranked fuzzy matching over a fixed collection.

use crate::distance::edit_distance;
use scribe_text::Normalize;

const DEFAULT_MAX_DISTANCE: usize = 2;

/// Matches items in a collection by the edit distance of a string key.
///
/// Keys are folded with [`Normalize`] once at construction and search
/// terms are folded the same way, so matching is caseless. Accented keys
/// stay accented, which costs one substitution per accent; the distance
/// budget absorbs that for close matches.
///
/// # Usage
///
/// ```
/// use scribe_search::FuzzySearcher;
///
/// struct Country {
///     name: &'static str,
///     code: &'static str,
/// }
///
/// let countries = vec![
///     Country { name: "Germany", code: "DE" },
///     Country { name: "France", code: "FR" },
///     Country { name: "España", code: "ES" },
///     Country { name: "Italy", code: "IT" },
/// ];
///
/// let searcher = FuzzySearcher::new(countries, |country: &Country| country.name);
///
/// let matches = searcher.search("Espana");
/// assert_eq!(matches[0].code, "ES");
/// ```
#[derive(Debug)]
pub struct FuzzySearcher<T> {
    items: Vec<T>,
    candidates: Vec<(usize, String)>,
    max_distance: usize,
}

impl<T> FuzzySearcher<T> {
    /// Builds a searcher with the default distance budget of two.
    ///
    /// `key` projects each item to the string the search compares
    /// against; it runs once per item, here, not per search.
    pub fn new(items: Vec<T>, key: impl Fn(&T) -> &str) -> Self {
        Self::with_max_distance(items, key, DEFAULT_MAX_DISTANCE)
    }

    /// Builds a searcher that accepts keys up to `max_distance` edits
    /// from the search term.
    pub fn with_max_distance(
        items: Vec<T>,
        key: impl Fn(&T) -> &str,
        max_distance: usize,
    ) -> Self {
        let candidates = items
            .iter()
            .enumerate()
            .map(|(index, item)| (index, key(item).normalized()))
            .collect();
        Self { items, candidates, max_distance }
    }

    /// Returns the items whose key is within the distance budget of
    /// `term`, closest first. Ties keep construction order.
    pub fn search(&self, term: &str) -> Vec<&T> {
        let term = term.normalized();
        let mut ranked: Vec<(usize, usize)> = self
            .candidates
            .iter()
            .filter_map(|(index, key)| {
                let distance = edit_distance(key, &term);
                (distance <= self.max_distance).then_some((*index, distance))
            })
            .collect();
        ranked.sort_by_key(|&(_, distance)| distance);
        ranked.into_iter().map(|(index, _)| &self.items[index]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq, Eq)]
    struct Country {
        name: &'static str,
        code: &'static str,
    }

    fn country_list() -> Vec<Country> {
        vec![
            Country { name: "Germany", code: "DE" },
            Country { name: "France", code: "FR" },
            Country { name: "España", code: "ES" },
            Country { name: "Italy", code: "IT" },
            Country { name: "Portugal", code: "PT" },
            Country { name: "Netherlands", code: "NL" },
        ]
    }

    fn country_searcher() -> FuzzySearcher<Country> {
        FuzzySearcher::new(country_list(), |country: &Country| country.name)
    }

    fn codes(matches: &[&Country]) -> Vec<&'static str> {
        matches.iter().map(|country| country.code).collect()
    }

    #[test]
    fn finds_an_exact_match() {
        let searcher = country_searcher();

        assert_eq!(codes(&searcher.search("France")), ["FR"]);
    }

    #[test]
    fn absorbs_a_missing_diacritic() {
        let searcher = country_searcher();

        assert_eq!(codes(&searcher.search("Espana")), ["ES"]);
    }

    #[test]
    fn matches_within_one_edit() {
        let searcher = country_searcher();

        assert_eq!(codes(&searcher.search("Italu")), ["IT"]);
    }

    #[test]
    fn matches_a_dropped_character() {
        let searcher = country_searcher();

        assert_eq!(codes(&searcher.search("Frnce")), ["FR"]);
    }

    #[test]
    fn ranks_the_closest_country_first() {
        let searcher = country_searcher();

        let matches = searcher.search("Germony");
        assert_eq!(matches[0].code, "DE");
    }

    #[test]
    fn returns_nothing_above_the_budget() {
        let searcher = country_searcher();

        assert!(searcher.search("Xyzland").is_empty());
    }

    #[test]
    fn ranks_closer_matches_first() {
        let words = vec!["green", "greed", "breed"];
        let searcher = FuzzySearcher::new(words, |word: &&str| *word);

        assert_eq!(searcher.search("green"), [&"green", &"greed", &"breed"]);
    }

    #[test]
    fn ties_keep_construction_order() {
        let words = vec!["cart", "card", "care"];
        let searcher = FuzzySearcher::new(words, |word: &&str| *word);

        // All three are one edit from the term.
        assert_eq!(searcher.search("carp"), [&"cart", &"card", &"care"]);
    }

    #[test]
    fn zero_budget_means_exact_folded_matches_only() {
        let searcher =
            FuzzySearcher::with_max_distance(country_list(), |country: &Country| country.name, 0);

        assert_eq!(codes(&searcher.search("FRANCE")), ["FR"]);
        assert!(searcher.search("Franc").is_empty());
    }

    #[test]
    fn searching_twice_gives_the_same_answer() {
        let searcher = country_searcher();

        assert_eq!(codes(&searcher.search("Italy")), codes(&searcher.search("Italy")));
    }
}
