//! Size tier threshold definitions

use parcel_types::SizeTier;
use serde::{Deserialize, Serialize};

use super::SortedDimensions;

/// Inclusive upper bounds for one bounded tier, in inches and pounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    pub tier: SizeTier,
    pub longest: f64,
    pub middle: f64,
    pub shortest: f64,
    pub weight: f64,
}

impl TierSpec {
    /// True when every axis and the weight are within this tier's limits
    pub fn admits(&self, sorted: &SortedDimensions, weight: f64) -> bool {
        sorted.longest <= self.longest
            && sorted.middle <= self.middle
            && sorted.shortest <= self.shortest
            && weight <= self.weight
    }
}
