//! # Stacking Planner
//!
//! Derives how many units of a product fit on one pallet.
//!
//! ## The Heuristic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two candidate base layouts are tried, because a unit's footprint       │
//! │  need not align with the pallet's orientation:                          │
//! │                                                                         │
//! │   Orientation A                      Orientation B (unit rotated 90°)   │
//! │   ┌────────────────────┐             ┌────────────────────┐             │
//! │   │ ┌──┐ ┌──┐ ┌──┐     │             │ ┌────┐ ┌────┐      │             │
//! │   │ └──┘ └──┘ └──┘     │ pallet      │ └────┘ └────┘      │             │
//! │   │ ┌──┐ ┌──┐ ┌──┐     │ width       │ ┌────┐ ┌────┐      │             │
//! │   │ └──┘ └──┘ └──┘     │             │ └────┘ └────┘      │             │
//! │   └────────────────────┘             └────────────────────┘             │
//! │        pallet length                                                    │
//! │                                                                         │
//! │  The better of the two becomes the layer; layers stack up to the        │
//! │  height limit.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a heuristic, not an optimum. It never rotates the height axis,
//! never mixes orientations within one pallet, and never considers
//! interlocking or overhang. That approximation is intentional and must be
//! preserved: planning results feed printed logistics documents, and a
//! "better" packer would silently change every figure on them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Dimensions, PalletProfile, UnitDims};
use crate::volume::round_to_decimals;

// =============================================================================
// Stacking Result
// =============================================================================

/// How one product stacks onto one pallet.
///
/// A value object: recomputed on every call, never cached, no identity
/// beyond its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StackingResult {
    /// Units forming one horizontal layer on the pallet base.
    pub units_per_layer: i64,

    /// Layers that fit under the stack height limit.
    pub layer_count: i64,

    /// Total capacity of one pallet (units_per_layer × layer_count).
    pub units_per_pallet: i64,

    /// How much of the pallet's stackable volume the units occupy, as an
    /// integer percentage.
    pub space_utilization_percent: u32,

    /// Label of the pallet footprint planned against, e.g. `"120x100 cm"`.
    pub footprint_label: String,
}

impl StackingResult {
    /// Whether at least one unit fits on the pallet.
    ///
    /// A zero-capacity result is valid (the unit is simply too large to be
    /// palletized standing up) but downstream allocation must treat it
    /// specially instead of dividing by it.
    #[inline]
    pub fn is_palletizable(&self) -> bool {
        self.units_per_pallet > 0
    }
}

// =============================================================================
// Planning
// =============================================================================

/// Units per layer for one of the two axis-aligned orientations.
fn layer_candidate(pallet: &PalletProfile, along_length: f64, along_width: f64) -> i64 {
    let per_length = (pallet.length_cm / along_length).floor() as i64;
    let per_width = (pallet.width_cm / along_width).floor() as i64;
    per_length * per_width
}

/// Plans how a product stacks on the given pallet.
///
/// Returns `None` when the dimension triple is incomplete, mirroring
/// [`crate::volume::unit_volume`]. A unit taller than the stack limit yields
/// a legitimate zero-capacity result, not `None`.
///
/// ## Example
/// ```rust
/// use atlas_core::stacking::plan;
/// use atlas_core::types::{Dimensions, PalletProfile};
///
/// let result = plan(&Dimensions::new(40.0, 30.0, 20.0), &PalletProfile::standard()).unwrap();
/// assert_eq!(result.units_per_layer, 9);
/// assert_eq!(result.layer_count, 7);
/// assert_eq!(result.units_per_pallet, 63);
/// assert_eq!(result.space_utilization_percent, 84);
/// ```
pub fn plan(dims: &Dimensions, pallet: &PalletProfile) -> Option<StackingResult> {
    let unit = dims.resolve()?;
    Some(plan_unit(&unit, pallet))
}

/// Plans an already-resolved triple. The aggregator resolves dimensions once
/// per line and reuses the triple here.
pub(crate) fn plan_unit(unit: &UnitDims, pallet: &PalletProfile) -> StackingResult {
    let oriented_a = layer_candidate(pallet, unit.length_cm, unit.width_cm);
    let oriented_b = layer_candidate(pallet, unit.width_cm, unit.length_cm);
    let units_per_layer = oriented_a.max(oriented_b);

    let layer_count = (pallet.max_stack_height_cm / unit.height_cm).floor() as i64;
    let units_per_pallet = units_per_layer * layer_count;

    StackingResult {
        units_per_layer,
        layer_count,
        units_per_pallet,
        space_utilization_percent: utilization_percent(unit, units_per_pallet, pallet),
        footprint_label: pallet.footprint_label(),
    }
}

/// Occupied share of the pallet's stackable volume, rounded to an integer
/// percentage. Zero capacity legitimately yields 0.
fn utilization_percent(unit: &UnitDims, units_per_pallet: i64, pallet: &PalletProfile) -> u32 {
    let occupied = unit.volume_cm3() * units_per_pallet as f64;
    round_to_decimals(100.0 * occupied / pallet.stack_volume_cm3(), 0) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> PalletProfile {
        PalletProfile::standard()
    }

    #[test]
    fn test_plan_picks_better_orientation() {
        // A: floor(120/40) * floor(100/30) = 3 * 3 = 9
        // B: floor(120/30) * floor(100/40) = 4 * 2 = 8
        let result = plan(&Dimensions::new(40.0, 30.0, 20.0), &standard()).unwrap();
        assert_eq!(result.units_per_layer, 9);
        assert_eq!(result.layer_count, 7);
        assert_eq!(result.units_per_pallet, 63);
        assert_eq!(result.space_utilization_percent, 84);
        assert_eq!(result.footprint_label, "120x100 cm");
        assert!(result.is_palletizable());
    }

    #[test]
    fn test_plan_orientation_symmetry() {
        // Swapping length and width swaps the two candidates, so the layer
        // count is unchanged.
        let a = plan(&Dimensions::new(40.0, 30.0, 20.0), &standard()).unwrap();
        let b = plan(&Dimensions::new(30.0, 40.0, 20.0), &standard()).unwrap();
        assert_eq!(a.units_per_layer, b.units_per_layer);
        assert_eq!(a.units_per_pallet, b.units_per_pallet);
    }

    #[test]
    fn test_plan_perfect_fit_reaches_full_utilization() {
        // 60x50x50: 4 per layer, 3 layers, 12 units fill the pallet exactly.
        let result = plan(&Dimensions::new(60.0, 50.0, 50.0), &standard()).unwrap();
        assert_eq!(result.units_per_layer, 4);
        assert_eq!(result.layer_count, 3);
        assert_eq!(result.units_per_pallet, 12);
        assert_eq!(result.space_utilization_percent, 100);
    }

    #[test]
    fn test_plan_unit_taller_than_stack_limit() {
        // Height over 150 cm: zero layers, zero capacity, still a valid result.
        let result = plan(&Dimensions::new(40.0, 30.0, 200.0), &standard()).unwrap();
        assert_eq!(result.layer_count, 0);
        assert_eq!(result.units_per_pallet, 0);
        assert_eq!(result.space_utilization_percent, 0);
        assert!(!result.is_palletizable());
    }

    #[test]
    fn test_plan_footprint_too_large_for_pallet() {
        // Neither orientation fits even once on the 120x100 base.
        let result = plan(&Dimensions::new(130.0, 110.0, 20.0), &standard()).unwrap();
        assert_eq!(result.units_per_layer, 0);
        assert_eq!(result.units_per_pallet, 0);
        assert!(!result.is_palletizable());
    }

    #[test]
    fn test_plan_ignores_orientation_that_does_not_fit() {
        // 110x90 only fits the 120x100 base one way; the other candidate is 0.
        // A: floor(120/110) * floor(100/90) = 1 * 1 = 1
        // B: floor(120/90)  * floor(100/110) = 1 * 0 = 0
        let result = plan(&Dimensions::new(110.0, 90.0, 50.0), &standard()).unwrap();
        assert_eq!(result.units_per_layer, 1);
        assert_eq!(result.layer_count, 3);
        assert_eq!(result.units_per_pallet, 3);
    }

    #[test]
    fn test_plan_absent_for_incomplete_dimensions() {
        assert!(plan(&Dimensions::default(), &standard()).is_none());
        assert!(plan(&Dimensions::new(40.0, -30.0, 20.0), &standard()).is_none());
        assert!(plan(
            &Dimensions {
                length_cm: Some(40.0),
                width_cm: Some(30.0),
                height_cm: None,
            },
            &standard()
        )
        .is_none());
    }

    #[test]
    fn test_plan_respects_substituted_profile() {
        // A smaller pallet plans against its own geometry, not the standard.
        let half = PalletProfile {
            length_cm: 60.0,
            width_cm: 50.0,
            max_stack_height_cm: 150.0,
        };
        let result = plan(&Dimensions::new(40.0, 30.0, 20.0), &half).unwrap();
        // A: floor(60/40) * floor(50/30) = 1 * 1 = 1
        // B: floor(60/30) * floor(50/40) = 2 * 1 = 2
        assert_eq!(result.units_per_layer, 2);
        assert_eq!(result.footprint_label, "60x50 cm");
    }
}
