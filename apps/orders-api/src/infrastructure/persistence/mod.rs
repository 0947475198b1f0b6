//! Persistence Adapters
//!
//! Storage implementations of the order store trait.

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryOrderStore;
pub use seed::seed_sample_orders;
