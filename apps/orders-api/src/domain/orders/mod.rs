//! Orders Bounded Context
//!
//! Order construction and storage semantics.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: immutable purchase record with computed derived
//!   fields (line subtotals, total, billing address fallback)
//! - **Replace-on-update**: a status change derives a fresh order value that
//!   replaces the stored one; nothing is mutated in place
//! - **Store port**: the storage abstraction implemented by adapters

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{CreateOrderCommand, Order, OrderItem, OrderItemInput};
pub use errors::OrderError;
pub use repository::{ListOrdersQuery, MAX_PAGE_SIZE, OrderStore};
pub use value_objects::OrderStatus;
