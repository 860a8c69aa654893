//! Fulfillment fee engine
//!
//! Pure functions only: no I/O, no logging, no shared state. Every call is
//! a function of its arguments.

pub mod constants;
pub mod model;
pub mod service;

pub use service::fee_engine::calculate_fee;
