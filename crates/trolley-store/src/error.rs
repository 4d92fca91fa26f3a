//! # Service Error Type
//!
//! Unified error type for everything outside the pure cart core.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Trolley                                │
//! │                                                                         │
//! │  Frontend                    Rust Session Layer                         │
//! │  ────────                    ──────────────────                         │
//! │                                                                         │
//! │  addItem(badInput) ────────► ValidationError ──► ServiceError ────────► │
//! │                                                                         │
//! │  checkout() ───────────────► OrderService::submit                       │
//! │                                   │                                     │
//! │                                   ├── backend 404 ──► NOT_FOUND         │
//! │                                   ├── backend down ─► REMOTE_UNAVAILABLE│
//! │                                   └── expired auth ─► UNAUTHORIZED      │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.code = "REMOTE_UNAVAILABLE"                                     │
//! │    // e.message = "order service unreachable"                           │
//! │    // UI decides: toast, alert, retry button                            │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart operations themselves never produce these errors; bound and
//! unknown-id violations are silent no-ops inside trolley-core.

use serde::Serialize;
use trolley_core::ValidationError;

/// Error returned from the session layer and its collaborators.
///
/// ## Serialization
/// This is what the frontend receives when a call fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: wireless-headphones"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for the session layer.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await checkout();
/// } catch (e) {
///   switch (e.code) {
///     case 'VALIDATION_FAILED': showForm(e.message); break;
///     case 'REMOTE_UNAVAILABLE': showRetryToast(); break;
///     case 'UNAUTHORIZED': redirectToSignIn(); break;
///     default: showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (product slug, order slug)
    NotFound,

    /// Input or state validation failed
    ValidationFailed,

    /// Remote catalog/order backend unreachable or failing
    RemoteUnavailable,

    /// Session is not authenticated or not allowed
    Unauthorized,

    /// Anything that should not happen
    Internal,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, key: &str) -> Self {
        ServiceError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, key),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::ValidationFailed, message)
    }

    /// Creates a remote-unavailable error.
    pub fn remote_unavailable(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::RemoteUnavailable, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Internal, message)
    }
}

/// Malformed line-item input surfaces with the validation code.
impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::validation(err.to_string())
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_screaming_snake() {
        let err = ServiceError::remote_unavailable("order service unreachable");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "REMOTE_UNAVAILABLE");
        assert_eq!(json["message"], "order service unreachable");
    }

    #[test]
    fn test_validation_error_converts() {
        let core_err = ValidationError::MustBePositive { field: "quantity" };
        let err: ServiceError = core_err.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::not_found("Product", "wireless-headphones");
        assert_eq!(err.message, "Product not found: wireless-headphones");
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
