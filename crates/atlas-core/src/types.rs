//! # Domain Types
//!
//! Input-side domain types for the packaging engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Dimensions    │   │  PalletProfile  │   │ HandlingLimits  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  length_cm?     │   │  length_cm      │   │  manual_limit   │       │
//! │  │  width_cm?      │   │  width_cm       │   │  caution_ratio  │       │
//! │  │  height_cm?     │   │  max_stack_cm   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    OrderLine    │   Catalog values frozen into the line by the      │
//! │  │  ─────────────  │   calling UI (snapshot pattern): the engine       │
//! │  │  product_id     │   never looks anything up itself.                 │
//! │  │  dimensions     │                                                   │
//! │  │  weight_kg?     │                                                   │
//! │  │  quantity       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tri-State Numerics
//! Dimension and weight fields are `Option<f64>`: "unspecified" is a distinct
//! state, never encoded as zero. `Dimensions::resolve` is the single place
//! where the tri-state collapses into a validated triple, so every calculator
//! shares one definition of "complete".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Dimensions
// =============================================================================

/// Physical dimensions of one product unit, in centimeters.
///
/// Any side may be unspecified. A triple with a missing, non-positive or
/// non-finite side is "incomplete": the engine answers `None` for it rather
/// than computing nonsense.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dimensions {
    /// Length in centimeters, if specified.
    pub length_cm: Option<f64>,

    /// Width in centimeters, if specified.
    pub width_cm: Option<f64>,

    /// Height in centimeters, if specified.
    pub height_cm: Option<f64>,
}

impl Dimensions {
    /// Creates a fully specified dimension triple.
    ///
    /// ## Example
    /// ```rust
    /// use atlas_core::types::Dimensions;
    ///
    /// let dims = Dimensions::new(40.0, 30.0, 20.0);
    /// assert!(dims.is_complete());
    /// ```
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Dimensions {
            length_cm: Some(length_cm),
            width_cm: Some(width_cm),
            height_cm: Some(height_cm),
        }
    }

    /// Collapses the tri-state triple into a validated one.
    ///
    /// Returns `None` unless all three sides are present, finite and
    /// strictly positive. Negative and NaN inputs are normalized to "not
    /// specified" here, so no downstream math ever sees them.
    pub fn resolve(&self) -> Option<UnitDims> {
        let length_cm = self.length_cm.filter(|v| v.is_finite() && *v > 0.0)?;
        let width_cm = self.width_cm.filter(|v| v.is_finite() && *v > 0.0)?;
        let height_cm = self.height_cm.filter(|v| v.is_finite() && *v > 0.0)?;

        Some(UnitDims {
            length_cm,
            width_cm,
            height_cm,
        })
    }

    /// Checks whether the triple resolves to usable values.
    pub fn is_complete(&self) -> bool {
        self.resolve().is_some()
    }
}

/// A validated dimension triple: every side is finite and positive.
///
/// Produced only by [`Dimensions::resolve`]; calculators take this apart
/// instead of re-checking raw fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDims {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl UnitDims {
    /// Unit volume in cubic centimeters.
    #[inline]
    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }
}

// =============================================================================
// Pallet Profile
// =============================================================================

/// The pallet geometry the engine plans against.
///
/// ## Why a Value and Not a Constant?
/// The standard profile (120×100 cm footprint, 150 cm stack limit) covers the
/// common case, but the profile is passed into the engine explicitly so tests
/// and alternate warehouses can substitute their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PalletProfile {
    /// Pallet footprint length in centimeters.
    pub length_cm: f64,

    /// Pallet footprint width in centimeters.
    pub width_cm: f64,

    /// Maximum stacking height in centimeters.
    pub max_stack_height_cm: f64,
}

impl PalletProfile {
    /// The standard industrial pallet: 120×100 cm, stacked to 150 cm.
    pub const fn standard() -> Self {
        PalletProfile {
            length_cm: 120.0,
            width_cm: 100.0,
            max_stack_height_cm: 150.0,
        }
    }

    /// Total stackable volume in cubic centimeters.
    #[inline]
    pub fn stack_volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.max_stack_height_cm
    }

    /// Human-readable footprint label, e.g. `"120x100 cm"`.
    pub fn footprint_label(&self) -> String {
        format!("{}x{} cm", self.length_cm, self.width_cm)
    }

    /// Checks the profile is usable for planning.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("footprint length", self.length_cm),
            ("footprint width", self.width_cm),
            ("stack height", self.max_stack_height_cm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::InvalidPalletProfile {
                    reason: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for PalletProfile {
    fn default() -> Self {
        PalletProfile::standard()
    }
}

// =============================================================================
// Handling Limits
// =============================================================================

/// Manual-handling weight policy.
///
/// A unit above `manual_limit_kg` needs lifting equipment; a unit above
/// `caution_ratio` of the limit gets flagged early so a picker is warned
/// before the hard limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HandlingLimits {
    /// Hard manual-handling limit in kilograms.
    pub manual_limit_kg: f64,

    /// Fraction of the limit at which a caution is raised (0 < ratio ≤ 1).
    pub caution_ratio: f64,
}

impl HandlingLimits {
    /// The standard policy: 50 kg limit, caution above 80% of it.
    pub const fn standard() -> Self {
        HandlingLimits {
            manual_limit_kg: 50.0,
            caution_ratio: 0.8,
        }
    }

    /// Weight above which a caution verdict applies.
    #[inline]
    pub fn caution_threshold_kg(&self) -> f64 {
        self.manual_limit_kg * self.caution_ratio
    }

    /// Checks the limits are usable.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.manual_limit_kg.is_finite() || self.manual_limit_kg <= 0.0 {
            return Err(CoreError::InvalidHandlingLimits {
                reason: format!(
                    "manual limit must be a positive number, got {}",
                    self.manual_limit_kg
                ),
            });
        }
        if !self.caution_ratio.is_finite() || self.caution_ratio <= 0.0 || self.caution_ratio > 1.0
        {
            return Err(CoreError::InvalidHandlingLimits {
                reason: format!(
                    "caution ratio must be within (0, 1], got {}",
                    self.caution_ratio
                ),
            });
        }
        Ok(())
    }
}

impl Default for HandlingLimits {
    fn default() -> Self {
        HandlingLimits::standard()
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One line of an order as handed to the engine.
///
/// ## Snapshot Pattern
/// The calling UI resolves the product catalog and freezes the dimensions,
/// weight and price into the line. The engine never fetches anything; a line
/// is complete input on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    /// Catalog product id (UUID string).
    pub product_id: String,

    /// Product name at the time the line was built (frozen).
    pub name: String,

    /// Unit dimensions at the time the line was built (frozen).
    pub dimensions: Dimensions,

    /// Unit weight in kilograms, if maintained in the catalog.
    pub weight_kg: Option<f64>,

    /// Unit price in cents, if maintained in the catalog.
    pub unit_price_cents: Option<i64>,

    /// Requested quantity of units.
    pub quantity: i64,
}

impl OrderLine {
    /// Creates an order line with the mandatory fields.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        dimensions: Dimensions,
        quantity: i64,
    ) -> Self {
        OrderLine {
            product_id: product_id.into(),
            name: name.into(),
            dimensions,
            weight_kg: None,
            unit_price_cents: None,
            quantity,
        }
    }

    /// Sets the frozen unit weight.
    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Sets the frozen unit price.
    pub fn with_unit_price_cents(mut self, cents: i64) -> Self {
        self.unit_price_cents = Some(cents);
        self
    }

    /// Returns the unit price as Money, when priced.
    #[inline]
    pub fn unit_price(&self) -> Option<Money> {
        self.unit_price_cents.map(Money::from_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_resolve_complete() {
        let dims = Dimensions::new(40.0, 30.0, 20.0);
        let unit = dims.resolve().unwrap();
        assert_eq!(unit.length_cm, 40.0);
        assert_eq!(unit.volume_cm3(), 24_000.0);
    }

    #[test]
    fn test_dimensions_missing_side_is_incomplete() {
        let dims = Dimensions {
            length_cm: Some(40.0),
            width_cm: None,
            height_cm: Some(20.0),
        };
        assert!(dims.resolve().is_none());
        assert!(!dims.is_complete());
    }

    #[test]
    fn test_dimensions_normalize_out_of_domain_values() {
        // Zero, negative and NaN sides all collapse to "incomplete".
        assert!(Dimensions::new(0.0, 30.0, 20.0).resolve().is_none());
        assert!(Dimensions::new(40.0, -30.0, 20.0).resolve().is_none());
        assert!(Dimensions::new(40.0, 30.0, f64::NAN).resolve().is_none());
        assert!(Dimensions::new(f64::INFINITY, 30.0, 20.0).resolve().is_none());
    }

    #[test]
    fn test_default_dimensions_are_incomplete() {
        assert!(!Dimensions::default().is_complete());
    }

    #[test]
    fn test_standard_pallet_profile() {
        let pallet = PalletProfile::standard();
        assert_eq!(pallet.stack_volume_cm3(), 1_800_000.0);
        assert_eq!(pallet.footprint_label(), "120x100 cm");
        assert!(pallet.validate().is_ok());
    }

    #[test]
    fn test_pallet_profile_rejects_bad_geometry() {
        let flat = PalletProfile {
            length_cm: 120.0,
            width_cm: 0.0,
            max_stack_height_cm: 150.0,
        };
        assert!(flat.validate().is_err());

        let nan = PalletProfile {
            length_cm: f64::NAN,
            width_cm: 100.0,
            max_stack_height_cm: 150.0,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_handling_limits_defaults() {
        let limits = HandlingLimits::standard();
        assert_eq!(limits.manual_limit_kg, 50.0);
        assert_eq!(limits.caution_threshold_kg(), 40.0);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_handling_limits_rejects_bad_ratio() {
        let limits = HandlingLimits {
            manual_limit_kg: 50.0,
            caution_ratio: 1.5,
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_order_line_builders() {
        let line = OrderLine::new(
            "550e8400-e29b-41d4-a716-446655440000",
            "Steel bracket",
            Dimensions::new(40.0, 30.0, 20.0),
            100,
        )
        .with_weight_kg(2.5)
        .with_unit_price_cents(1099);

        assert_eq!(line.quantity, 100);
        assert_eq!(line.weight_kg, Some(2.5));
        assert_eq!(line.unit_price().unwrap().cents(), 1099);
    }
}
