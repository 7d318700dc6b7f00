//! Order and line-item entities.

pub mod model;
pub mod status;

pub use model::{CreateOrder, Order, OrderLineDraft, OrderLineItem, OrderWithItems, UpdateOrder};
pub use status::OrderStatus;
