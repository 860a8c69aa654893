//! Savings analysis for items above the cheapest tier
//!
//! Each opportunity is priced by re-running the fee calculator on a
//! hypothetical state. Opportunities that save no more than
//! [`SAVING_EPSILON`] are dropped.

use parcel_types::{
    OpportunityKind, RequirementCheck, SavingOpportunity, SizeTier, UnitSystem,
};

use crate::constants::fee_schedule::{LARGE_STANDARD_BRACKETS, SAVING_EPSILON};
use crate::constants::tier_spec;
use crate::model::{SortedDimensions, TierSpec};
use crate::service::fee_calculator::tier_fee;
use crate::service::tier_classifier::Classification;
use crate::service::unit_normalizer::{length_for_display, weight_for_display};

/// Priced state of the item as it is today, in canonical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentState {
    pub classification: Classification,
    pub actual_weight: f64,
    pub shipping_weight: f64,
    pub fee: f64,
}

/// List the reconfigurations that would lower the fee
pub fn find_savings(
    state: &CurrentState,
    apparel: bool,
    unit_system: UnitSystem,
) -> Vec<SavingOpportunity> {
    let target = match state.classification.tier {
        SizeTier::SmallStandard => return Vec::new(),
        SizeTier::LargeStandard => SizeTier::SmallStandard,
        SizeTier::Oversize => SizeTier::LargeStandard,
    };

    [
        downgrade(state, target, apparel, unit_system),
        weight_bracket(state, apparel, unit_system),
    ]
    .into_iter()
    .flatten()
    .filter(|opportunity| opportunity.saving_amount > SAVING_EPSILON)
    .collect()
}

/// Largest bracket ceiling strictly below `weight`
pub fn next_lower_bracket(weight: f64) -> Option<f64> {
    LARGE_STANDARD_BRACKETS
        .iter()
        .rev()
        .map(|(ceiling, _)| *ceiling)
        .find(|ceiling| *ceiling < weight)
}

/// Move the item into the `target` tier
///
/// Priced at the heaviest weight the target tier allows.
fn downgrade(
    state: &CurrentState,
    target: SizeTier,
    apparel: bool,
    unit_system: UnitSystem,
) -> Option<SavingOpportunity> {
    let target = tier_spec(target)?;
    let sorted = &state.classification.sorted;
    if target.admits(sorted, state.actual_weight) {
        return None;
    }

    let target_fee = tier_fee(target.tier, target.weight, apparel);
    Some(SavingOpportunity {
        kind: OpportunityKind::Dimension,
        target_tier: target.tier.label().to_string(),
        target_fee,
        current_fee: state.fee,
        saving_amount: state.fee - target_fee,
        current_status: dimension_status(state, unit_system),
        requirements: requirement_checks(target, sorted, state.actual_weight, unit_system),
    })
}

fn weight_bracket(
    state: &CurrentState,
    apparel: bool,
    unit_system: UnitSystem,
) -> Option<SavingOpportunity> {
    // Brackets only exist inside large standard
    if !state.classification.tier.is_large_standard() {
        return None;
    }
    let bracket = next_lower_bracket(state.shipping_weight)?;
    let target_fee = tier_fee(SizeTier::LargeStandard, bracket, apparel);
    let weight_unit = unit_system.weight_unit();
    let bracket_display = weight_for_display(bracket, unit_system);

    let requirements = vec![
        RequirementCheck {
            label: "Actual weight".to_string(),
            target: bracket_display,
            unit: weight_unit,
            met: state.actual_weight <= bracket,
        },
        RequirementCheck {
            label: "Dimensional weight".to_string(),
            target: bracket_display,
            unit: weight_unit,
            met: state.classification.dimensional_weight <= bracket,
        },
    ];

    Some(SavingOpportunity {
        kind: OpportunityKind::Weight,
        target_tier: format!(
            "{} up to {:.2} {}",
            SizeTier::LargeStandard.label(),
            bracket_display,
            weight_unit.symbol()
        ),
        target_fee,
        current_fee: state.fee,
        saving_amount: state.fee - target_fee,
        current_status: format!(
            "Shipping weight {:.2} {}",
            weight_for_display(state.shipping_weight, unit_system),
            weight_unit.symbol()
        ),
        requirements,
    })
}

fn requirement_checks(
    spec: &TierSpec,
    sorted: &SortedDimensions,
    weight: f64,
    unit_system: UnitSystem,
) -> Vec<RequirementCheck> {
    let length_unit = unit_system.length_unit();
    let side = |label: &str, limit: f64, actual: f64| RequirementCheck {
        label: label.to_string(),
        target: length_for_display(limit, unit_system),
        unit: length_unit,
        met: actual <= limit,
    };

    vec![
        side("Longest side", spec.longest, sorted.longest),
        side("Middle side", spec.middle, sorted.middle),
        side("Shortest side", spec.shortest, sorted.shortest),
        RequirementCheck {
            label: "Weight".to_string(),
            target: weight_for_display(spec.weight, unit_system),
            unit: unit_system.weight_unit(),
            met: weight <= spec.weight,
        },
    ]
}

fn dimension_status(state: &CurrentState, unit_system: UnitSystem) -> String {
    let sorted = &state.classification.sorted;
    format!(
        "{}: {:.2} x {:.2} x {:.2} {}, {:.2} {}",
        state.classification.tier.label(),
        length_for_display(sorted.longest, unit_system),
        length_for_display(sorted.middle, unit_system),
        length_for_display(sorted.shortest, unit_system),
        unit_system.length_unit().symbol(),
        weight_for_display(state.actual_weight, unit_system),
        unit_system.weight_unit().symbol()
    )
}
