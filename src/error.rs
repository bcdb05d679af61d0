//! Error types for the lrukit library.
//!
//! Absence of a key is never an error here: lookups return `Option`s and the
//! insert family returns `bool`s. The only error type is [`InvariantError`],
//! produced by the debug-only `check_invariants` method on
//! [`LruCache`](crate::policy::lru::LruCache) when an internal invariant has
//! been violated.

use std::fmt;

/// Error returned when an internal cache invariant is violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_message() {
        let err = InvariantError::new("index and list disagree on length");
        assert_eq!(err.to_string(), "index and list disagree on length");
    }

    #[test]
    fn debug_includes_message() {
        let err = InvariantError::new("orphaned handle");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("orphaned handle"));
    }

    #[test]
    fn message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
