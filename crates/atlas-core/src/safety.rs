//! # Weight Safety Checker
//!
//! Classifies a unit weight against the manual-handling policy.
//!
//! The material-master form calls this as the user types and renders the
//! verdict as a warning banner; it never blocks saving.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::HandlingLimits;

// =============================================================================
// Safety Verdict
// =============================================================================

/// Outcome of a manual-handling weight check.
///
/// An exhaustive enum rather than a flag struct, so calling code matches
/// every case and the compiler flags any verdict it forgot to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SafetyVerdict {
    /// No usable weight on record; nothing can be certified.
    Unspecified,
    /// Comfortably below the manual-handling limit.
    Ok,
    /// Above the caution share of the limit but still within it.
    Caution,
    /// Above the manual-handling limit; lifting equipment is required.
    Warning,
}

impl SafetyVerdict {
    /// Whether the weight passed the check (a caution still passes).
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, SafetyVerdict::Ok | SafetyVerdict::Caution)
    }

    /// Whether lifting equipment is required.
    #[inline]
    pub const fn requires_equipment(&self) -> bool {
        matches!(self, SafetyVerdict::Warning)
    }
}

// =============================================================================
// Check
// =============================================================================

/// Classifies a weight against the handling limits.
///
/// Both comparisons are strict: a weight exactly at the limit is still a
/// caution, and a weight exactly at the caution threshold is still ok.
/// Absent, zero, negative and non-finite weights classify as `Unspecified`.
///
/// ## Example
/// ```rust
/// use atlas_core::safety::{check, SafetyVerdict};
/// use atlas_core::types::HandlingLimits;
///
/// let limits = HandlingLimits::standard();
/// assert_eq!(check(Some(12.0), &limits), SafetyVerdict::Ok);
/// assert_eq!(check(Some(62.5), &limits), SafetyVerdict::Warning);
/// assert_eq!(check(None, &limits), SafetyVerdict::Unspecified);
/// ```
pub fn check(weight_kg: Option<f64>, limits: &HandlingLimits) -> SafetyVerdict {
    let weight = match weight_kg {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => return SafetyVerdict::Unspecified,
    };

    if weight > limits.manual_limit_kg {
        SafetyVerdict::Warning
    } else if weight > limits.caution_threshold_kg() {
        SafetyVerdict::Caution
    } else {
        SafetyVerdict::Ok
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
