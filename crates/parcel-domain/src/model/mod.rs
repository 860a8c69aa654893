//! Domain model types

pub mod canonical;
pub mod tier;

pub use canonical::{CanonicalDimensions, SortedDimensions};
pub use tier::TierSpec;
