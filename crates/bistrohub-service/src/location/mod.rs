//! Franchise location administration.

pub mod service;

pub use service::LocationService;
