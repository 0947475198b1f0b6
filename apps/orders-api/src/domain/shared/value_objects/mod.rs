//! Shared Value Objects
//!
//! Immutable domain types used across the crate.
//! Value objects are compared by value, not identity.

mod identifiers;
mod money;
mod timestamp;

pub use identifiers::{CustomerId, OrderId, OrderItemId, ProductId};
pub use money::Money;
pub use timestamp::Timestamp;
