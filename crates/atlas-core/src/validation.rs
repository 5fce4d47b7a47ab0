//! # Validation Module
//!
//! Field validation for raw form input.
//!
//! ## Where This Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field rule validation before engine inputs are built              │
//! │  └── Typed errors the UI renders as inline warnings                    │
//! │                                                                         │
//! │  The engine itself stays total: anything that slips past validation    │
//! │  normalizes to an "incomplete" input, never to a crash.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atlas_core::validation::{validate_dimension_cm, validate_quantity};
//!
//! validate_dimension_cm("length", 40.0).unwrap();
//! validate_quantity(100).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_DIMENSION_CM, MAX_LINE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates one dimension field from the material-master form.
///
/// ## Rules
/// - Must be a finite number
/// - Must be positive (> 0)
/// - Must not exceed MAX_DIMENSION_CM
///
/// ## Example
/// ```rust
/// use atlas_core::validation::validate_dimension_cm;
///
/// assert!(validate_dimension_cm("length", 40.0).is_ok());
/// assert!(validate_dimension_cm("length", 0.0).is_err());
/// assert!(validate_dimension_cm("length", -4.0).is_err());
/// ```
pub fn validate_dimension_cm(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value > MAX_DIMENSION_CM {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_DIMENSION_CM,
        });
    }

    Ok(())
}

/// Validates a unit weight field.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero means "not specified" and is allowed here;
///   the safety checker treats it as unspecified)
pub fn validate_weight_kg(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "weight".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "weight".to_string(),
        });
    }

    Ok(())
}

/// Validates an order line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1.0,
            max: MAX_LINE_QUANTITY as f64,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a catalog product id.
///
/// ## Rules
/// - Must not be empty
/// - Must be a valid UUID string
///
/// ## Example
/// ```rust
/// use atlas_core::validation::validate_product_id;
///
/// assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_product_id("not-a-uuid").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product_id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "product_id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimension_cm() {
        assert!(validate_dimension_cm("length", 40.0).is_ok());
        assert!(validate_dimension_cm("length", 0.1).is_ok());
        assert!(validate_dimension_cm("length", MAX_DIMENSION_CM).is_ok());

        assert!(validate_dimension_cm("length", 0.0).is_err());
        assert!(validate_dimension_cm("length", -4.0).is_err());
        assert!(validate_dimension_cm("length", f64::NAN).is_err());
        assert!(validate_dimension_cm("length", MAX_DIMENSION_CM + 1.0).is_err());
    }

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(0.0).is_ok());
        assert!(validate_weight_kg(48.5).is_ok());

        assert!(validate_weight_kg(-1.0).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Steel bracket 40x30").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("not-a-uuid").is_err());
    }
}
