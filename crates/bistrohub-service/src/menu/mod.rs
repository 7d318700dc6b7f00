//! Menu catalog administration.

pub mod service;

pub use service::MenuService;
