//! Stable string hashing.

/// A hash that never changes across runs, platforms, or versions.
///
/// The standard library's `Hash` is explicitly allowed to vary between
/// executions; this one is for values that get persisted or compared
/// across processes.
pub trait DeterministicHash {
    /// djb2 hash over the string's Unicode scalar values: seed 5381,
    /// then `hash * 33 + scalar` with wrapping arithmetic.
    fn deterministic_hash(&self) -> u64;
}

impl DeterministicHash for str {
    fn deterministic_hash(&self) -> u64 {
        self.chars().fold(5381, |hash, c| {
            (hash << 5)
                .wrapping_add(hash)
                .wrapping_add(u64::from(u32::from(c)))
        })
    }
}
