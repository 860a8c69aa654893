//! Size tier classification

use parcel_types::SizeTier;

use crate::constants::fee_schedule::DIMENSIONAL_WEIGHT_DIVISOR;
use crate::constants::TIER_SPECS;
use crate::model::{CanonicalDimensions, SortedDimensions};

/// Outcome of classifying one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub tier: SizeTier,
    pub sorted: SortedDimensions,
    /// Volumetric weight in pounds
    pub dimensional_weight: f64,
}

/// Order the three sides longest first
pub fn sort_dimensions(dimensions: &CanonicalDimensions) -> SortedDimensions {
    let mut sides = dimensions.sides();
    sides.sort_by(|a, b| b.total_cmp(a));
    SortedDimensions {
        longest: sides[0],
        middle: sides[1],
        shortest: sides[2],
    }
}

pub fn dimensional_weight(sorted: &SortedDimensions) -> f64 {
    sorted.volume() / DIMENSIONAL_WEIGHT_DIVISOR
}

/// Assign exactly one tier. The strictest admitting tier wins.
pub fn classify(dimensions: &CanonicalDimensions) -> Classification {
    let sorted = sort_dimensions(dimensions);
    let tier = TIER_SPECS
        .iter()
        .find(|spec| spec.admits(&sorted, dimensions.weight))
        .map(|spec| spec.tier)
        .unwrap_or(SizeTier::Oversize);

    Classification {
        tier,
        sorted,
        dimensional_weight: dimensional_weight(&sorted),
    }
}
