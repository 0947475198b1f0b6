//! Order Aggregate
//!
//! The Order aggregate is the root entity for a customer's purchase record.

mod order;
mod order_item;

pub use order::{CreateOrderCommand, Order};
pub use order_item::{OrderItem, OrderItemInput};
