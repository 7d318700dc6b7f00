//! Menu item (catalog) entities.

pub mod model;

pub use model::{CreateMenuItem, MenuItem, UpdateMenuItem};
