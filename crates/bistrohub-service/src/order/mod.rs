//! Order checkout and back-office order operations.

pub mod service;

pub use service::{CheckoutRequest, OrderService};
