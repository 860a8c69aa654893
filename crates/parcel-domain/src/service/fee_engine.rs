//! Fee engine entry point
//!
//! Normalizer → classifier → fee calculator → savings advisor.

use parcel_types::{Dimensions, FeeResult, SizeTier, UnitSystem};

use crate::constants::fee_schedule::DIMENSIONAL_WEIGHT_DIVISOR;
use crate::service::fee_calculator::{billable_weight, tier_fee};
use crate::service::savings_advisor::{find_savings, CurrentState};
use crate::service::tier_classifier::{classify, Classification};
use crate::service::unit_normalizer::{length_for_display, normalize, weight_for_display};

/// Price one item and list what would make it cheaper
///
/// # Examples
/// ```
/// use parcel_domain::calculate_fee;
/// use parcel_types::{Dimensions, SizeTier};
///
/// let result = calculate_fee(&Dimensions::metric(10.0, 8.0, 1.0, 0.3), false);
/// assert_eq!(result.tier, SizeTier::SmallStandard);
/// assert!((result.fee - 3.22).abs() < 1e-9);
/// assert!(result.savings.is_empty());
/// ```
pub fn calculate_fee(dimensions: &Dimensions, apparel: bool) -> FeeResult {
    let canonical = normalize(dimensions);
    let classification = classify(&canonical);
    let shipping_weight = billable_weight(
        classification.tier,
        canonical.weight,
        classification.dimensional_weight,
    );
    let fee = tier_fee(classification.tier, shipping_weight, apparel);

    let state = CurrentState {
        classification,
        actual_weight: canonical.weight,
        shipping_weight,
        fee,
    };
    let unit_system = dimensions.unit_system;

    FeeResult {
        tier: classification.tier,
        fee,
        dimensional_weight: classification.dimensional_weight,
        shipping_weight,
        details: detail_notes(&state, unit_system),
        savings: find_savings(&state, apparel, unit_system),
    }
}

fn detail_notes(state: &CurrentState, unit_system: UnitSystem) -> Vec<String> {
    let Classification {
        tier,
        sorted,
        dimensional_weight,
    } = state.classification;
    let length_unit = unit_system.length_unit().symbol();
    let weight_unit = unit_system.weight_unit().symbol();

    let shipping_basis = if tier.is_small_standard() {
        "actual weight; dimensional weight is not charged at this tier"
    } else if dimensional_weight > state.actual_weight {
        "dimensional weight exceeds actual weight"
    } else {
        "actual weight is at least the dimensional weight"
    };

    vec![
        format!(
            "Sorted dimensions: {:.2} x {:.2} x {:.2} {}",
            length_for_display(sorted.longest, unit_system),
            length_for_display(sorted.middle, unit_system),
            length_for_display(sorted.shortest, unit_system),
            length_unit
        ),
        format!(
            "Actual weight: {:.2} {}",
            weight_for_display(state.actual_weight, unit_system),
            weight_unit
        ),
        format!(
            "Dimensional weight: {:.2} {} (volume in cubic inches / {})",
            weight_for_display(dimensional_weight, unit_system),
            weight_unit,
            DIMENSIONAL_WEIGHT_DIVISOR
        ),
        format!(
            "Shipping weight: {:.2} {} ({})",
            weight_for_display(state.shipping_weight, unit_system),
            weight_unit,
            shipping_basis
        ),
        tier_note(tier).to_string(),
    ]
}

fn tier_note(tier: SizeTier) -> &'static str {
    match tier {
        SizeTier::SmallStandard => "Within small standard limits: flat fee applies",
        SizeTier::LargeStandard => {
            "Exceeds small standard limits: large standard weight brackets apply"
        }
        SizeTier::Oversize => "Exceeds large standard limits: oversize per-pound pricing applies",
    }
}
