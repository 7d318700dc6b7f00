//! Deterministic order pricing.

pub mod engine;

pub use engine::{LineRequest, PricedOrder, PricingEngine};
