//! Character membership sets for the one-of scan family.
//!
//! A [`CharSet`] is an immutable predicate over `char`. The cursor never
//! iterates a set; it only asks "is this character a member", so sets backed
//! by a classification function cost nothing to build.

/// Immutable set of characters used as a membership predicate.
///
/// Built once, then shared by reference with the cursor's
/// one-of/any-of/up-to-one-of operations.
#[derive(Clone, Debug)]
pub struct CharSet(Repr);

#[derive(Clone, Debug)]
enum Repr {
    /// Explicit characters, sorted and deduplicated for binary search.
    Listed(Vec<char>),
    /// All characters between two bounds, inclusive.
    Span(char, char),
    /// Classification function. A plain function pointer keeps the set
    /// cheap to clone and comparable in spirit to the listed form.
    Class(fn(char) -> bool),
}

impl CharSet {
    /// Set containing exactly the characters of `chars`.
    pub fn of(chars: &str) -> Self {
        let mut listed: Vec<char> = chars.chars().collect();
        listed.sort_unstable();
        listed.dedup();
        Self(Repr::Listed(listed))
    }

    /// Set covering an inclusive range of characters.
    pub fn range(range: std::ops::RangeInclusive<char>) -> Self {
        let (low, high) = range.into_inner();
        Self(Repr::Span(low, high))
    }

    /// Set defined by a classification function.
    ///
    /// The function must be pure: membership may be queried any number of
    /// times for the same character during a single scan.
    pub fn class(pred: fn(char) -> bool) -> Self {
        Self(Repr::Class(pred))
    }

    /// Unicode alphanumeric characters.
    pub fn alphanumeric() -> Self {
        Self::class(char::is_alphanumeric)
    }

    /// Unicode whitespace characters.
    pub fn whitespace() -> Self {
        Self::class(char::is_whitespace)
    }

    /// ASCII decimal digits `0-9`.
    pub fn digits() -> Self {
        Self::class(|c| c.is_ascii_digit())
    }

    /// Returns `true` if `c` is a member of the set.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        match &self.0 {
            Repr::Listed(chars) => chars.binary_search(&c).is_ok(),
            Repr::Span(low, high) => (*low..=*high).contains(&c),
            Repr::Class(pred) => pred(c),
        }
    }
}
