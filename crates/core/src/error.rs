//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging items never fails; this is only produced at the edges where a
/// catalog is rebuilt from or rendered to an external representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input could not be understood (e.g. malformed snapshot).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::validation("bad json").to_string(),
            "validation failed: bad json"
        );
        assert_eq!(
            DomainError::invariant("quality out of range").to_string(),
            "invariant violated: quality out of range"
        );
    }
}
