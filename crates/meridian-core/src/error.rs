//! # Error Types
//!
//! Validation error types for meridian-core.
//!
//! Most operations in the state layer are infallible by design: lookups
//! return `Option`, status updates against a missing id are documented
//! no-ops. The errors that remain are input-validation failures raised
//! while constructing entities, before any store mutation happens.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when caller-supplied data doesn't meet an entity invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be at least 1.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value exceeds the allowed maximum.
    #[error("{field} {value} exceeds maximum allowed ({max})")]
    TooLarge { field: String, value: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::TooLarge {
            field: "quantity".to_string(),
            value: 1000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "quantity 1000 exceeds maximum allowed (999)"
        );
    }
}
