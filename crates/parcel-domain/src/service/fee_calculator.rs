//! Fee computation per size tier
//!
//! Callable with hypothetical weights and tiers; the savings advisor prices
//! counterfactual states through these same functions.

use parcel_types::SizeTier;

use crate::constants::fee_schedule::{
    last_bracket_ceiling, LARGE_STANDARD_APPAREL_SURCHARGE, LARGE_STANDARD_BRACKETS,
    LARGE_STANDARD_HALF_POUND_FEE, LARGE_STANDARD_HEAVY_BASE, OVERSIZE_BASE_FEE,
    OVERSIZE_PER_POUND_FEE, SMALL_STANDARD_APPAREL_FEE, SMALL_STANDARD_FEE,
};

/// Weight the fee is charged on
///
/// Small standard bills actual weight. Every other tier bills the greater
/// of actual and dimensional weight.
pub fn billable_weight(tier: SizeTier, actual_weight: f64, dimensional_weight: f64) -> f64 {
    if tier.is_small_standard() {
        actual_weight
    } else {
        actual_weight.max(dimensional_weight)
    }
}

/// Fee in dollars for a tier at a billable weight in pounds
pub fn tier_fee(tier: SizeTier, billable_weight: f64, apparel: bool) -> f64 {
    match tier {
        SizeTier::SmallStandard => small_standard_fee(apparel),
        SizeTier::LargeStandard => large_standard_fee(billable_weight, apparel),
        SizeTier::Oversize => oversize_fee(billable_weight),
    }
}

pub fn small_standard_fee(apparel: bool) -> f64 {
    if apparel {
        SMALL_STANDARD_APPAREL_FEE
    } else {
        SMALL_STANDARD_FEE
    }
}

pub fn large_standard_fee(billable_weight: f64, apparel: bool) -> f64 {
    if let Some(&(_, fee)) = LARGE_STANDARD_BRACKETS
        .iter()
        .find(|(ceiling, _)| billable_weight <= *ceiling)
    {
        return fee;
    }

    let steps = half_pound_increments(billable_weight);
    let surcharge = if apparel {
        LARGE_STANDARD_APPAREL_SURCHARGE
    } else {
        0.0
    };
    LARGE_STANDARD_HEAVY_BASE + LARGE_STANDARD_HALF_POUND_FEE * steps as f64 + surcharge
}

pub fn oversize_fee(billable_weight: f64) -> f64 {
    OVERSIZE_BASE_FEE + OVERSIZE_PER_POUND_FEE * billable_weight
}

/// Started half pounds above the last bracket ceiling
pub fn half_pound_increments(billable_weight: f64) -> u32 {
    let over = billable_weight - last_bracket_ceiling();
    if over <= 0.0 {
        0
    } else {
        (over * 2.0).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billable_weight_small_standard_ignores_volume() {
        assert_eq!(billable_weight(SizeTier::SmallStandard, 0.4, 3.0), 0.4);
    }

    #[test]
    fn test_billable_weight_takes_max() {
        assert_eq!(billable_weight(SizeTier::LargeStandard, 1.1, 0.66), 1.1);
        assert_eq!(billable_weight(SizeTier::LargeStandard, 1.0, 4.2), 4.2);
        assert_eq!(billable_weight(SizeTier::Oversize, 30.0, 26.0), 30.0);
    }

    #[test]
    fn test_small_standard_flat_fee() {
        assert_eq!(tier_fee(SizeTier::SmallStandard, 0.9, false), 3.22);
        assert_eq!(tier_fee(SizeTier::SmallStandard, 0.9, true), 3.45);
    }

    #[test]
    fn test_large_standard_brackets() {
        assert_eq!(tier_fee(SizeTier::LargeStandard, 0.5, false), 3.86);
        assert_eq!(tier_fee(SizeTier::LargeStandard, 0.51, false), 4.08);
        assert_eq!(tier_fee(SizeTier::LargeStandard, 1.0, false), 4.08);
        assert_eq!(tier_fee(SizeTier::LargeStandard, 1.1, false), 4.54);
        assert_eq!(tier_fee(SizeTier::LargeStandard, 2.0, false), 5.05);
        assert_eq!(tier_fee(SizeTier::LargeStandard, 3.0, false), 5.60);
    }

    #[test]
    fn test_large_standard_brackets_ignore_apparel() {
        assert_eq!(tier_fee(SizeTier::LargeStandard, 1.2, true), 4.54);
    }

    #[test]
    fn test_large_standard_above_three_pounds() {
        // 3.01 lb starts one half pound
        assert!((tier_fee(SizeTier::LargeStandard, 3.01, false) - 6.58).abs() < 1e-9);
        // 3.5 lb is exactly one half pound
        assert!((tier_fee(SizeTier::LargeStandard, 3.5, false) - 6.58).abs() < 1e-9);
        // 10 lb is fourteen half pounds
        assert!((tier_fee(SizeTier::LargeStandard, 10.0, false) - 7.62).abs() < 1e-9);
        // 20 lb with apparel: 6.50 + 34 x 0.08 + 1.00
        assert!((tier_fee(SizeTier::LargeStandard, 20.0, true) - 10.22).abs() < 1e-9);
    }

    #[test]
    fn test_oversize_fee() {
        assert!((tier_fee(SizeTier::Oversize, 0.0, false) - 15.0).abs() < 1e-9);
        assert!((tier_fee(SizeTier::Oversize, 26.0, true) - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_pound_increments() {
        assert_eq!(half_pound_increments(2.0), 0);
        assert_eq!(half_pound_increments(3.0), 0);
        assert_eq!(half_pound_increments(3.2), 1);
        assert_eq!(half_pound_increments(4.0), 2);
        assert_eq!(half_pound_increments(4.01), 3);
    }

    #[test]
    fn test_fee_is_idempotent() {
        let first = tier_fee(SizeTier::LargeStandard, 7.3, true);
        let second = tier_fee(SizeTier::LargeStandard, 7.3, true);
        assert_eq!(first, second);
    }
}
