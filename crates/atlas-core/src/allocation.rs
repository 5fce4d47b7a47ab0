//! # Pallet Allocator
//!
//! Turns an order quantity and a per-pallet capacity into pallet counts.
//!
//! Pallets are single-SKU: a line's leftover units still claim a whole
//! pallet of their own, which is why `total_pallets_needed` is a ceiling
//! division and packing efficiency can drop well below 100%.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::volume::round_to_decimals;

// =============================================================================
// Pallet Allocation
// =============================================================================

/// Pallet requirement for one order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PalletAllocation {
    /// Completely filled pallets.
    pub whole_pallets: i64,

    /// Units left over after the whole pallets (0 on an exact fit).
    pub leftover_units: i64,

    /// Pallets that must actually ship (ceiling of quantity / capacity).
    pub total_pallets_needed: i64,

    /// Shipped units as a share of the shipped pallets' capacity, as an
    /// integer percentage. Never exceeds 100.
    pub packing_efficiency_percent: u32,
}

impl PalletAllocation {
    /// Whether the quantity fills its pallets exactly.
    #[inline]
    pub fn is_exact_fit(&self) -> bool {
        self.leftover_units == 0
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Computes the pallet allocation for a quantity.
///
/// Returns `None` when the quantity is non-positive or the capacity is not
/// usable. A zero capacity is the stacking planner's legitimate "cannot be
/// palletized" answer, and this guard is what keeps it from turning into a
/// division by zero here.
///
/// ## Example
/// ```rust
/// use atlas_core::allocation::allocate;
///
/// let alloc = allocate(100, 63).unwrap();
/// assert_eq!(alloc.whole_pallets, 1);
/// assert_eq!(alloc.leftover_units, 37);
/// assert_eq!(alloc.total_pallets_needed, 2);
/// assert_eq!(alloc.packing_efficiency_percent, 79);
///
/// assert!(allocate(100, 0).is_none());
/// ```
pub fn allocate(quantity: i64, units_per_pallet: i64) -> Option<PalletAllocation> {
    if quantity <= 0 || units_per_pallet <= 0 {
        return None;
    }

    let whole_pallets = quantity / units_per_pallet;
    let leftover_units = quantity % units_per_pallet;
    let total_pallets_needed = whole_pallets + i64::from(leftover_units > 0);

    let shipped_capacity = (total_pallets_needed * units_per_pallet) as f64;
    let packing_efficiency_percent =
        round_to_decimals(100.0 * quantity as f64 / shipped_capacity, 0) as u32;

    Some(PalletAllocation {
        whole_pallets,
        leftover_units,
        total_pallets_needed,
        packing_efficiency_percent,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
