//! Fuzzy matching and forgiving filtering.
//!
//! Two complementary ways to match user input against a collection:
//!
//! - [`FuzzySearcher`] ranks items by [`edit_distance`] between a folded
//!   key and the folded search term, for "did you mean" style lookup.
//! - [`ForgivingFilter`] keeps items whose key contains the query
//!   characters in order, for incremental narrowing as the user types.
//!
//! # Usage
//!
//! ```
//! use scribe_search::FuzzySearcher;
//!
//! let cities = vec!["Stockholm", "Gothenburg", "Malmö"];
//! let searcher = FuzzySearcher::new(cities, |city: &&str| *city);
//!
//! let matches = searcher.search("Stokholm");
//! assert_eq!(matches, [&"Stockholm"]);
//! ```

mod distance;
mod filter;
mod fuzzy;

pub use distance::edit_distance;
pub use filter::ForgivingFilter;
pub use fuzzy::FuzzySearcher;
