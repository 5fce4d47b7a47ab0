//! # Error Types
//!
//! Domain-specific error types for atlas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atlas-core errors (this file)                                         │
//! │  ├── CoreError        - Engine configuration errors                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → calling UI → inline warning       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limit, etc.)
//! 3. Errors are enum variants, never String
//! 4. "No result computable" is NOT an error: geometric calculations return
//!    `Option::None` when inputs are insufficient, and errors are reserved
//!    for genuinely malformed configuration and input fields.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Engine-level errors.
///
/// The calculation pipeline itself is total: it answers `None` rather than
/// failing when geometric inputs are missing. `CoreError` only occurs when
/// the engine is configured or fed with genuinely malformed values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The pallet profile the engine was constructed with is unusable.
    ///
    /// ## When This Occurs
    /// - Zero or negative footprint dimensions
    /// - Zero or negative stack height
    /// - Non-finite values sneaking in from a config file
    #[error("Invalid pallet profile: {reason}")]
    InvalidPalletProfile { reason: String },

    /// The handling limits the engine was constructed with are unusable.
    #[error("Invalid handling limits: {reason}")]
    InvalidHandlingLimits { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input from a calling UI does not meet
/// requirements. Used for early validation before any engine math runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be a finite number (rejects NaN and infinities).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPalletProfile {
            reason: "footprint length must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid pallet profile: footprint length must be positive"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "length".to_string(),
        };
        assert_eq!(err.to_string(), "length is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1.0,
            max: 9999.0,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 9999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "height".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
