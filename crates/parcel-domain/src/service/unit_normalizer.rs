//! Conversion between caller units and canonical inches/pounds
//!
//! No rounding happens on the way in. Rounding is applied only by the
//! `*_for_display` helpers, which echo values back to the caller.

use parcel_types::{Dimensions, UnitSystem};

use crate::constants::units::{
    CM_TO_IN, IN_TO_CM, KG_TO_LB, LB_TO_KG, LENGTH_DISPLAY_PLACES, WEIGHT_DISPLAY_PLACES,
};
use crate::model::CanonicalDimensions;

/// Coerce a raw measurement into something the engine can compare
///
/// NaN, infinities and negative values become 0.0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn length_to_inches(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => value * CM_TO_IN,
        UnitSystem::Imperial => value,
    }
}

pub fn weight_to_pounds(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => value * KG_TO_LB,
        UnitSystem::Imperial => value,
    }
}

pub fn inches_to_length(inches: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => inches * IN_TO_CM,
        UnitSystem::Imperial => inches,
    }
}

pub fn pounds_to_weight(pounds: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => pounds * LB_TO_KG,
        UnitSystem::Imperial => pounds,
    }
}

pub fn length_for_display(inches: f64, unit_system: UnitSystem) -> f64 {
    round_to(inches_to_length(inches, unit_system), LENGTH_DISPLAY_PLACES)
}

pub fn weight_for_display(pounds: f64, unit_system: UnitSystem) -> f64 {
    round_to(pounds_to_weight(pounds, unit_system), WEIGHT_DISPLAY_PLACES)
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Express caller dimensions in inches and pounds
pub fn normalize(dimensions: &Dimensions) -> CanonicalDimensions {
    let unit = dimensions.unit_system;
    CanonicalDimensions {
        length: length_to_inches(sanitize(dimensions.length), unit),
        width: length_to_inches(sanitize(dimensions.width), unit),
        height: length_to_inches(sanitize(dimensions.height), unit),
        weight: weight_to_pounds(sanitize(dimensions.weight), unit),
    }
}
