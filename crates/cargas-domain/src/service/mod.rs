//! Pricing services

pub mod freight_calculator;
pub mod rate_resolver;

pub use freight_calculator::{calculate, calculate_with_rate};
pub use rate_resolver::{resolve_rate, state_code, RateResolution};
