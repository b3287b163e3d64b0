//! Domain error model.

use thiserror::Error;

/// Result type used across the engine and presentation layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is raised synchronously where it is detected and handed to
/// the immediate caller. Nothing in the engine retries or recovers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was absent or had the wrong type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input was well-typed but outside the operation's accepted domain.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Catalog data violates its own invariants (e.g. a negative price).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = DomainError::out_of_range("threshold must be positive");
        assert_eq!(err.to_string(), "out of range: threshold must be positive");

        let err = DomainError::invalid_state("price cannot be negative");
        assert_eq!(err.to_string(), "invalid state: price cannot be negative");
    }
}
