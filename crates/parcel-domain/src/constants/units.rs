//! Unit conversion factors
//!
//! Canonical units inside the engine are inches and pounds. The reverse
//! factors are exact reciprocals so a metric value survives a round trip.

pub const CM_TO_IN: f64 = 0.393701;
pub const IN_TO_CM: f64 = 1.0 / CM_TO_IN;

pub const KG_TO_LB: f64 = 2.20462;
pub const LB_TO_KG: f64 = 1.0 / KG_TO_LB;

/// Decimal places used when a length is echoed back for display
pub const LENGTH_DISPLAY_PLACES: i32 = 2;

/// Decimal places used when a weight is echoed back for display
pub const WEIGHT_DISPLAY_PLACES: i32 = 2;
