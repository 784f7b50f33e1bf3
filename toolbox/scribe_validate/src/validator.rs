//! The validation contract and the any-of combinator.

use std::fmt;

/// Checks whether a string belongs to some class of well-formed values.
///
/// Implementations answer a single yes/no question and hold whatever
/// compiled state (patterns, ranges) they need to answer it for many
/// inputs.
pub trait Validator {
    /// Returns `true` when `input` is a well-formed value.
    fn is_valid(&self, input: &str) -> bool;
}

/// Accepts an input when any member validator accepts it.
///
/// An empty group rejects everything.
pub struct ValidatorGroup {
    validators: Vec<Box<dyn Validator + Send + Sync>>,
}

impl ValidatorGroup {
    pub fn new(validators: Vec<Box<dyn Validator + Send + Sync>>) -> Self {
        Self { validators }
    }
}

impl Validator for ValidatorGroup {
    fn is_valid(&self, input: &str) -> bool {
        self.validators.iter().any(|validator| validator.is_valid(input))
    }
}

impl fmt::Debug for ValidatorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorGroup")
            .field("validators", &self.validators.len())
            .finish()
    }
}
