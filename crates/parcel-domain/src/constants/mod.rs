//! Constants for fee estimation

pub mod fee_schedule;
pub mod tier_specs;
pub mod units;

pub use tier_specs::{tier_spec, LARGE_STANDARD, SMALL_STANDARD, TIER_SPECS};
