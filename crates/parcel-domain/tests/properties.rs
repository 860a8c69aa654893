//! Property tests for the fee engine

use parcel_domain::calculate_fee;
use parcel_domain::constants::fee_schedule::SAVING_EPSILON;
use parcel_domain::service::tier_fee;
use parcel_domain::service::unit_normalizer::{
    inches_to_length, length_to_inches, pounds_to_weight, weight_to_pounds,
};
use parcel_types::{Dimensions, SizeTier, UnitSystem};
use proptest::prelude::*;

fn unit_system() -> impl Strategy<Value = UnitSystem> {
    prop_oneof![Just(UnitSystem::Metric), Just(UnitSystem::Imperial)]
}

fn dimensions() -> impl Strategy<Value = Dimensions> {
    (
        0.0f64..120.0,
        0.0f64..120.0,
        0.0f64..120.0,
        0.0f64..80.0,
        unit_system(),
    )
        .prop_map(|(l, w, h, weight, unit)| Dimensions::new(l, w, h, weight, unit))
}

proptest! {
    #[test]
    fn test_every_item_gets_one_tier(dims in dimensions(), apparel in any::<bool>()) {
        let result = calculate_fee(&dims, apparel);
        prop_assert!(matches!(
            result.tier,
            SizeTier::SmallStandard | SizeTier::LargeStandard | SizeTier::Oversize
        ));
        prop_assert!(result.fee.is_finite());
        prop_assert!(result.fee >= 0.0);
    }

    #[test]
    fn test_any_float_input_is_tolerated(
        l in any::<f64>(),
        w in any::<f64>(),
        h in any::<f64>(),
        weight in any::<f64>(),
        unit in unit_system(),
    ) {
        let result = calculate_fee(&Dimensions::new(l, w, h, weight, unit), false);
        prop_assert!(!result.fee.is_nan());
        prop_assert!(result.fee >= 0.0);
    }

    #[test]
    fn test_metric_round_trip(cm in 0.0f64..500.0, kg in 0.0f64..200.0) {
        let inches = length_to_inches(cm, UnitSystem::Metric);
        let length_back = inches_to_length(inches, UnitSystem::Metric);
        prop_assert!((length_back - cm).abs() < 0.005);

        let pounds = weight_to_pounds(kg, UnitSystem::Metric);
        let weight_back = pounds_to_weight(pounds, UnitSystem::Metric);
        prop_assert!((weight_back - kg).abs() < 0.0005);
    }

    #[test]
    fn test_fee_is_idempotent(weight in 0.0f64..100.0, apparel in any::<bool>()) {
        for tier in [SizeTier::SmallStandard, SizeTier::LargeStandard, SizeTier::Oversize] {
            prop_assert_eq!(tier_fee(tier, weight, apparel), tier_fee(tier, weight, apparel));
        }
    }

    #[test]
    fn test_large_standard_fee_is_monotonic(
        a in 0.0f64..20.0,
        b in 0.0f64..20.0,
        apparel in any::<bool>(),
    ) {
        let (lighter, heavier) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            tier_fee(SizeTier::LargeStandard, lighter, apparel)
                <= tier_fee(SizeTier::LargeStandard, heavier, apparel)
        );
    }

    #[test]
    fn test_savings_exceed_epsilon(dims in dimensions(), apparel in any::<bool>()) {
        let result = calculate_fee(&dims, apparel);
        for opportunity in &result.savings {
            prop_assert!(opportunity.saving_amount > SAVING_EPSILON);
            prop_assert!(opportunity.target_fee < opportunity.current_fee);
        }
        if result.tier == SizeTier::SmallStandard {
            prop_assert!(result.savings.is_empty());
        }
    }
}
