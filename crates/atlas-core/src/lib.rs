//! # atlas-core: Pure Packaging & Logistics Engine for Atlas
//!
//! This crate is the **heart** of Atlas. It contains all packaging and
//! logistics math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Atlas Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend Applications                       │   │
//! │  │   Material Master ──► Sales Order Editor ──► PO List Views     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ resolved catalog values                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ atlas-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  volume   │  │ stacking  │  │allocation │  │   order   │  │   │
//! │  │   │  Volume   │  │  Stacking │  │  Pallet   │  │   Order   │  │   │
//! │  │   │           │  │  Result   │  │Allocation │  │ Logistics │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │  safety   │  │   money   │  │validation │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Dimensions, PalletProfile, OrderLine, etc.)
//! - [`volume`] - Unit volume calculation
//! - [`stacking`] - Units-per-pallet planning (axis-aligned heuristic)
//! - [`allocation`] - Pallet counts for an order quantity
//! - [`order`] - Order-level aggregation with per-line diagnostics
//! - [`safety`] - Manual-handling weight verdicts
//! - [`engine`] - Facade binding a configuration profile to the pipeline
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Form field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output, no hidden state, no suspension points
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Absent Is Not an Error**: insufficient geometric input yields
//!    `Option::None`, never a panic and never a fake zero
//! 4. **Partial Failure Isolation**: one malformed order line is reported
//!    per-line and excluded from totals; the rest of the order aggregates
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::engine::PackagingEngine;
//! use atlas_core::types::Dimensions;
//!
//! let engine = PackagingEngine::standard();
//! let dims = Dimensions::new(40.0, 30.0, 20.0);
//!
//! // 40x30x20 cm cartons: 9 per layer, 7 layers, 63 per pallet.
//! let stacking = engine.stacking_plan(&dims).unwrap();
//! assert_eq!(stacking.units_per_pallet, 63);
//!
//! // An order of 100 cartons ships on 2 pallets.
//! let allocation = engine.allocate(100, stacking.units_per_pallet).unwrap();
//! assert_eq!(allocation.total_pallets_needed, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod engine;
pub mod error;
pub mod money;
pub mod order;
pub mod safety;
pub mod stacking;
pub mod types;
pub mod validation;
pub mod volume;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::PackagingEngine` instead of
// `use atlas_core::engine::PackagingEngine`

pub use allocation::PalletAllocation;
pub use engine::PackagingEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{LineDetail, OrderLogistics};
pub use safety::SafetyVerdict;
pub use stacking::StackingResult;
pub use types::*;
pub use volume::Volume;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest dimension value the material-master form accepts, in centimeters.
///
/// ## Business Reason
/// Ten meters is beyond anything that moves on a pallet; larger values are
/// almost certainly a unit mix-up (millimeters typed as centimeters).
pub const MAX_DIMENSION_CM: f64 = 1_000.0;

/// Maximum quantity of a single order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 1000).
/// Can be made configurable per warehouse in future versions.
pub const MAX_LINE_QUANTITY: i64 = 9_999;
