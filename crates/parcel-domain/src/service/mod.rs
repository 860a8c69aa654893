//! Domain services

pub mod fee_calculator;
pub mod fee_engine;
pub mod savings_advisor;
pub mod tier_classifier;
pub mod unit_normalizer;

pub use fee_calculator::{billable_weight, tier_fee};
pub use fee_engine::calculate_fee;
pub use savings_advisor::{find_savings, next_lower_bracket, CurrentState};
pub use tier_classifier::{classify, dimensional_weight, sort_dimensions, Classification};
pub use unit_normalizer::normalize;
