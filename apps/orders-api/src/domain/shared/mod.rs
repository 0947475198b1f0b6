//! Shared Domain Types
//!
//! Value objects shared across the domain.

pub mod value_objects;

pub use value_objects::{CustomerId, Money, OrderId, OrderItemId, ProductId, Timestamp};
