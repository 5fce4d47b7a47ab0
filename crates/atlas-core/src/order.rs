//! # Order Logistics Aggregator
//!
//! Folds an order's lines into order-level logistics totals.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-Line Pipeline                                    │
//! │                                                                         │
//! │  OrderLine ──► dimensions complete? ──► quantity valid? ──► capacity?   │
//! │                      │ no                   │ no               │ no     │
//! │                      ▼                      ▼                  ▼        │
//! │              missingDimensions      invalidQuantity    notPalletizable  │
//! │                                                                         │
//! │  All gates passed ──► volume + stacking + allocation ──► success detail │
//! │                       and the line's share of the totals                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Partial-Failure Contract
//! One malformed line never aborts the order: it is reported in place (the
//! detail sequence mirrors input order, which the sales-order editor relies
//! on to point at the failing row) and excluded from every total. Totals only
//! ever sum over fully-resolved lines.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::allocation::{allocate, PalletAllocation};
use crate::money::Money;
use crate::stacking::{plan_unit, StackingResult};
use crate::types::{OrderLine, PalletProfile};
use crate::volume::{round_to_decimals, Volume};

// =============================================================================
// Line Detail
// =============================================================================

/// Per-line outcome of the aggregation, tagged for exhaustive matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export)]
pub enum LineDetail {
    /// The line resolved fully and contributed to the order totals.
    #[serde(rename_all = "camelCase")]
    Palletized {
        product_id: String,
        name: String,
        quantity: i64,
        /// Volume of one unit in cubic meters.
        unit_volume_m3: f64,
        /// Volume of the whole line in cubic meters.
        line_volume_m3: f64,
        /// Weight of the whole line in kilograms (0 when unweighed).
        line_weight_kg: f64,
        /// Value of the whole line in cents, when the line is priced.
        line_value_cents: Option<i64>,
        stacking: StackingResult,
        allocation: PalletAllocation,
    },

    /// The product's dimension triple is incomplete; nothing was computed.
    #[serde(rename_all = "camelCase")]
    MissingDimensions {
        product_id: String,
        name: String,
        quantity: i64,
    },

    /// The requested quantity is not a positive number of units.
    #[serde(rename_all = "camelCase")]
    InvalidQuantity {
        product_id: String,
        name: String,
        quantity: i64,
    },

    /// Not a single unit fits the pallet, so no pallet count exists.
    #[serde(rename_all = "camelCase")]
    NotPalletizable {
        product_id: String,
        name: String,
        quantity: i64,
    },
}

impl LineDetail {
    /// Whether this line contributed to the order totals.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, LineDetail::Palletized { .. })
    }
}

// =============================================================================
// Order Logistics
// =============================================================================

/// Order-level logistics summary plus per-line diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLogistics {
    /// Sum of line volumes in cubic meters, rounded to 4 decimals.
    pub total_volume_m3: f64,

    /// Sum of line weights in kilograms, rounded to 2 decimals.
    pub total_weight_kg: f64,

    /// Exact sum of per-line pallet counts. Pallets are never shared across
    /// lines (single-SKU palletizing), so this is plain integer addition.
    pub total_pallets_needed: i64,

    /// Sum of priced line values in cents.
    pub total_value_cents: i64,

    /// One detail per input line, in input order.
    pub lines: Vec<LineDetail>,
}

impl OrderLogistics {
    /// Number of input lines, resolved or not.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines that could not be resolved.
    pub fn failed_line_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_resolved()).count()
    }

    /// Whether every line contributed to the totals.
    pub fn is_fully_resolved(&self) -> bool {
        self.failed_line_count() == 0
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregates an order's lines into logistics totals.
///
/// One pass over the input; the detail sequence mirrors input order. Lines
/// that fail a gate are reported and excluded from all totals, and the rest
/// of the order still aggregates normally.
pub fn aggregate(lines: &[OrderLine], pallet: &PalletProfile) -> OrderLogistics {
    let mut total_volume_m3 = 0.0_f64;
    let mut total_weight_kg = 0.0_f64;
    let mut total_pallets_needed = 0_i64;
    let mut total_value = Money::zero();
    let mut details = Vec::with_capacity(lines.len());

    for line in lines {
        let Some(unit) = line.dimensions.resolve() else {
            details.push(LineDetail::MissingDimensions {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
            });
            continue;
        };

        if line.quantity <= 0 {
            details.push(LineDetail::InvalidQuantity {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
            });
            continue;
        }

        let stacking = plan_unit(&unit, pallet);
        let Some(allocation) = allocate(line.quantity, stacking.units_per_pallet) else {
            // Quantity was gated above, so the only remaining cause is a
            // zero per-pallet capacity.
            details.push(LineDetail::NotPalletizable {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
            });
            continue;
        };

        let volume = Volume::from_cubic_centimeters(unit.volume_cm3());
        let line_volume_m3 = volume.cubic_meters() * line.quantity as f64;
        let unit_weight_kg = line
            .weight_kg
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(0.0);
        let line_weight_kg = unit_weight_kg * line.quantity as f64;
        let line_value = line.unit_price().map(|p| p.line_value(line.quantity));

        total_volume_m3 += line_volume_m3;
        total_weight_kg += line_weight_kg;
        total_pallets_needed += allocation.total_pallets_needed;
        total_value += line_value.unwrap_or_else(Money::zero);

        details.push(LineDetail::Palletized {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            unit_volume_m3: volume.cubic_meters(),
            line_volume_m3: round_to_decimals(line_volume_m3, 4),
            line_weight_kg: round_to_decimals(line_weight_kg, 2),
            line_value_cents: line_value.map(|v| v.cents()),
            stacking,
            allocation,
        });
    }

    let result = OrderLogistics {
        total_volume_m3: round_to_decimals(total_volume_m3, 4),
        total_weight_kg: round_to_decimals(total_weight_kg, 2),
        total_pallets_needed,
        total_value_cents: total_value.cents(),
        lines: details,
    };

    tracing::debug!(
        lines = result.line_count(),
        failed = result.failed_line_count(),
        pallets = result.total_pallets_needed,
        "order logistics aggregated"
    );

    result
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    fn bracket_line(quantity: i64) -> OrderLine {
        OrderLine::new(
            "550e8400-e29b-41d4-a716-446655440000",
            "Steel bracket",
            Dimensions::new(40.0, 30.0, 20.0),
            quantity,
        )
        .with_weight_kg(2.5)
    }

    fn unmeasured_line(quantity: i64) -> OrderLine {
        OrderLine::new(
            "550e8400-e29b-41d4-a716-446655440001",
            "Unmeasured part",
            Dimensions::default(),
            quantity,
        )
    }

    #[test]
    fn test_aggregate_empty_order() {
        let result = aggregate(&[], &PalletProfile::standard());
        assert_eq!(result.total_volume_m3, 0.0);
        assert_eq!(result.total_weight_kg, 0.0);
        assert_eq!(result.total_pallets_needed, 0);
        assert_eq!(result.total_value_cents, 0);
        assert!(result.lines.is_empty());
        assert!(result.is_fully_resolved());
    }

    #[test]
    fn test_aggregate_single_line() {
        let result = aggregate(&[bracket_line(100)], &PalletProfile::standard());

        assert_eq!(result.total_volume_m3, 2.4);
        assert_eq!(result.total_weight_kg, 250.0);
        assert_eq!(result.total_pallets_needed, 2);
        assert_eq!(result.line_count(), 1);
        assert!(result.is_fully_resolved());

        match &result.lines[0] {
            LineDetail::Palletized {
                unit_volume_m3,
                line_volume_m3,
                line_weight_kg,
                allocation,
                stacking,
                ..
            } => {
                assert_eq!(*unit_volume_m3, 0.024);
                assert_eq!(*line_volume_m3, 2.4);
                assert_eq!(*line_weight_kg, 250.0);
                assert_eq!(stacking.units_per_pallet, 63);
                assert_eq!(allocation.total_pallets_needed, 2);
                assert_eq!(allocation.packing_efficiency_percent, 79);
            }
            other => panic!("expected resolved line, got {other:?}"),
        }
    }

    #[test]
    fn test_aggregate_isolates_missing_dimensions() {
        let lines = [bracket_line(100), unmeasured_line(50)];
        let result = aggregate(&lines, &PalletProfile::standard());

        // The broken line is reported in place but contributes nothing.
        assert_eq!(result.total_pallets_needed, 2);
        assert_eq!(result.total_volume_m3, 2.4);
        assert_eq!(result.total_weight_kg, 250.0);
        assert_eq!(result.line_count(), 2);
        assert_eq!(result.failed_line_count(), 1);
        assert!(!result.is_fully_resolved());

        assert!(result.lines[0].is_resolved());
        assert_eq!(
            result.lines[1],
            LineDetail::MissingDimensions {
                product_id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
                name: "Unmeasured part".to_string(),
                quantity: 50,
            }
        );
    }

    #[test]
    fn test_aggregate_flags_invalid_quantity() {
        let result = aggregate(&[bracket_line(0)], &PalletProfile::standard());
        assert_eq!(result.total_pallets_needed, 0);
        assert!(matches!(
            result.lines[0],
            LineDetail::InvalidQuantity { quantity: 0, .. }
        ));
    }

    #[test]
    fn test_aggregate_flags_unpalletizable_line() {
        let oversized = OrderLine::new(
            "550e8400-e29b-41d4-a716-446655440002",
            "Tall crate",
            Dimensions::new(40.0, 30.0, 200.0),
            10,
        );
        let result = aggregate(&[oversized], &PalletProfile::standard());
        assert_eq!(result.total_pallets_needed, 0);
        assert_eq!(result.total_volume_m3, 0.0);
        assert!(matches!(
            result.lines[0],
            LineDetail::NotPalletizable { quantity: 10, .. }
        ));
    }

    #[test]
    fn test_aggregate_sums_priced_lines_only() {
        let priced = bracket_line(100).with_unit_price_cents(1099);
        let unpriced = bracket_line(10);
        let result = aggregate(&[priced, unpriced], &PalletProfile::standard());

        assert_eq!(result.total_value_cents, 109_900);
        match &result.lines[1] {
            LineDetail::Palletized {
                line_value_cents, ..
            } => assert_eq!(*line_value_cents, None),
            other => panic!("expected resolved line, got {other:?}"),
        }
    }

    #[test]
    fn test_aggregate_weight_defaults_to_zero() {
        let weightless = OrderLine::new(
            "550e8400-e29b-41d4-a716-446655440003",
            "Foam spacer",
            Dimensions::new(40.0, 30.0, 20.0),
            10,
        );
        let result = aggregate(&[weightless], &PalletProfile::standard());
        assert_eq!(result.total_weight_kg, 0.0);
        assert_eq!(result.total_pallets_needed, 1);
    }

    #[test]
    fn test_aggregate_preserves_input_order() {
        let lines = [
            unmeasured_line(1),
            bracket_line(5),
            unmeasured_line(2),
            bracket_line(7),
        ];
        let result = aggregate(&lines, &PalletProfile::standard());
        let resolved: Vec<bool> = result.lines.iter().map(|l| l.is_resolved()).collect();
        assert_eq!(resolved, vec![false, true, false, true]);
    }

    #[test]
    fn test_line_detail_wire_shape() {
        let detail = LineDetail::MissingDimensions {
            product_id: "p1".to_string(),
            name: "Part".to_string(),
            quantity: 5,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["status"], "missingDimensions");
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["quantity"], 5);
    }
}
