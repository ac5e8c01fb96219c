//! Results that record whether a degraded fallback was substituted.

/// A value produced either live or by a fallback path.
///
/// Listing and searching never fail outward; this keeps the distinction
/// visible internally so callers and tests can tell which path ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Produced from the remote source.
    Live(T),
    /// Substituted after the remote source failed.
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Live(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Live(value) | Outcome::Fallback(value) => value,
        }
    }
}
