//! Size tier thresholds in canonical units

use crate::model::TierSpec;
use parcel_types::SizeTier;

pub const SMALL_STANDARD: TierSpec = TierSpec {
    tier: SizeTier::SmallStandard,
    longest: 15.0,
    middle: 12.0,
    shortest: 0.75,
    weight: 1.0,
};

pub const LARGE_STANDARD: TierSpec = TierSpec {
    tier: SizeTier::LargeStandard,
    longest: 18.0,
    middle: 14.0,
    shortest: 8.0,
    weight: 20.0,
};

/// Bounded tiers, strictest first. Anything matching none is oversize.
pub static TIER_SPECS: [TierSpec; 2] = [SMALL_STANDARD, LARGE_STANDARD];

/// Get the threshold set for a tier; oversize has none
pub fn tier_spec(tier: SizeTier) -> Option<&'static TierSpec> {
    TIER_SPECS.iter().find(|spec| spec.tier == tier)
}
