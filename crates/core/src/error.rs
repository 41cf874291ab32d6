//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here (validation, bad arguments,
/// arithmetic invariants).
/// None of them are retried; callers treat them as programming errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at construction (e.g. empty product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation was called with an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A domain invariant was violated (e.g. an amount no longer fits the
    /// decimal range).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_variant_prefix() {
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
        assert_eq!(
            DomainError::invalid_argument("quantity must be positive").to_string(),
            "invalid argument: quantity must be positive"
        );
        assert_eq!(
            DomainError::invariant("invoice line amount overflow").to_string(),
            "invariant violated: invoice line amount overflow"
        );
    }
}
