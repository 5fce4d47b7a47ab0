//! # Volume Calculator
//!
//! Converts a product's linear dimensions into a unit volume.
//!
//! Dimensions are maintained in centimeters while logistics volumes are
//! reported in cubic meters, so the conversion and its rounding policy live
//! in exactly one place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Dimensions;

/// Rounds to a fixed number of decimal places, half away from zero.
///
/// `f64::round` rounds half away from zero, which matches how the logistics
/// reports round their figures.
pub(crate) fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// =============================================================================
// Volume
// =============================================================================

/// A unit volume in cubic meters, rounded to 4 decimal places.
///
/// Constructed from raw cubic centimeters; the rounding happens once, at
/// construction, so every consumer sees the same figure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Volume(f64);

impl Volume {
    /// Converts a raw cubic-centimeter figure into rounded cubic meters.
    pub fn from_cubic_centimeters(cm3: f64) -> Self {
        Volume(round_to_decimals(cm3 / 1_000_000.0, 4))
    }

    /// The volume in cubic meters.
    #[inline]
    pub const fn cubic_meters(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Computes the unit volume for a dimension triple.
///
/// Returns `None` when the triple is incomplete (any side missing,
/// non-positive or non-finite). "No volume computed" is deliberately distinct
/// from "volume is legitimately tiny": callers must not conflate the two.
///
/// ## Example
/// ```rust
/// use atlas_core::types::Dimensions;
/// use atlas_core::volume::unit_volume;
///
/// let vol = unit_volume(&Dimensions::new(40.0, 30.0, 20.0)).unwrap();
/// assert_eq!(vol.cubic_meters(), 0.024);
///
/// assert!(unit_volume(&Dimensions::default()).is_none());
/// ```
pub fn unit_volume(dims: &Dimensions) -> Option<Volume> {
    let unit = dims.resolve()?;
    Some(Volume::from_cubic_centimeters(unit.volume_cm3()))
}

// =============================================================================
// Unit Tests
// =============================================================================
