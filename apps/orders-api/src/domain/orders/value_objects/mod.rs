//! Order Value Objects
//!
//! Immutable types for order management.

mod order_status;

pub use order_status::OrderStatus;
