//! # Packaging Engine Facade
//!
//! Binds a pallet profile and handling limits to the calculation pipeline,
//! so calling code configures once and then passes plain product data.
//!
//! The UIs hold one engine for the whole session; tests construct throwaway
//! engines with substituted profiles.

use crate::allocation::{allocate, PalletAllocation};
use crate::error::CoreResult;
use crate::order::{aggregate, OrderLogistics};
use crate::safety::{check, SafetyVerdict};
use crate::stacking::{plan, StackingResult};
use crate::types::{Dimensions, HandlingLimits, OrderLine, PalletProfile};
use crate::volume::{unit_volume, Volume};

// =============================================================================
// Packaging Engine
// =============================================================================

/// The packaging and logistics engine.
///
/// Stateless apart from its configuration: every method reads only its
/// arguments and the bound profile, allocates only its result, and is safe
/// to call from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct PackagingEngine {
    pallet: PalletProfile,
    handling: HandlingLimits,
}

impl PackagingEngine {
    /// Creates an engine for the given configuration.
    ///
    /// Rejects unusable profiles up front, so the calculation methods never
    /// have to re-validate the configuration on every call.
    pub fn new(pallet: PalletProfile, handling: HandlingLimits) -> CoreResult<Self> {
        pallet.validate()?;
        handling.validate()?;
        tracing::debug!(
            footprint = %pallet.footprint_label(),
            stack_height_cm = pallet.max_stack_height_cm,
            manual_limit_kg = handling.manual_limit_kg,
            "packaging engine configured"
        );
        Ok(PackagingEngine { pallet, handling })
    }

    /// Creates an engine with the standard pallet and handling policy.
    pub fn standard() -> Self {
        // The standard profile is known-good, so this cannot fail.
        PackagingEngine {
            pallet: PalletProfile::standard(),
            handling: HandlingLimits::standard(),
        }
    }

    /// The pallet profile this engine plans against.
    #[inline]
    pub fn pallet(&self) -> &PalletProfile {
        &self.pallet
    }

    /// The handling limits this engine checks against.
    #[inline]
    pub fn handling(&self) -> &HandlingLimits {
        &self.handling
    }

    /// Unit volume for a dimension triple. See [`crate::volume::unit_volume`].
    pub fn unit_volume(&self, dims: &Dimensions) -> Option<Volume> {
        unit_volume(dims)
    }

    /// Stacking plan for a dimension triple. See [`crate::stacking::plan`].
    pub fn stacking_plan(&self, dims: &Dimensions) -> Option<StackingResult> {
        plan(dims, &self.pallet)
    }

    /// Pallet allocation for a quantity. See [`crate::allocation::allocate`].
    pub fn allocate(&self, quantity: i64, units_per_pallet: i64) -> Option<PalletAllocation> {
        allocate(quantity, units_per_pallet)
    }

    /// Order-level aggregation. See [`crate::order::aggregate`].
    pub fn aggregate(&self, lines: &[OrderLine]) -> OrderLogistics {
        aggregate(lines, &self.pallet)
    }

    /// Manual-handling verdict for a unit weight. See [`crate::safety::check`].
    pub fn check_weight(&self, weight_kg: Option<f64>) -> SafetyVerdict {
        check(weight_kg, &self.handling)
    }
}

impl Default for PackagingEngine {
    fn default() -> Self {
        PackagingEngine::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
