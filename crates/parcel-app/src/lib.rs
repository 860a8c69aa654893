//! Application service layer - config and quote use case

pub mod app;
pub mod config;
