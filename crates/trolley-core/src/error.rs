//! # Error Types
//!
//! Domain-specific error types for trolley-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trolley-core errors (this file)                                        │
//! │  └── ValidationError  - Malformed line-item input                       │
//! │                                                                         │
//! │  trolley-store errors (separate crate)                                  │
//! │  └── ServiceError     - What collaborators and the UI see               │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → Frontend                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: the cart operations themselves have no error type.
//! Increase-at-ceiling, decrease-at-floor, and unknown-id operations are
//! absorbed as no-ops so a stale render can never crash a tap handler.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a caller hands the store a malformed line item.
/// Used for early validation before the cart aggregate runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "title" };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 5");
    }
}
