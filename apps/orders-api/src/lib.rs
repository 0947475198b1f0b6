// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Orders API - Rust Core Library
//!
//! REST service for managing customer orders backed by an in-memory store.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects)
//!   - `orders`: Order aggregate, line items, status lifecycle, store port
//!   - `shared`: Identifiers, money, timestamps
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory order store and sample data seeding
//!   - `http`: REST API controller
//!
//! Orders are immutable values: derived fields (line subtotals, the order
//! total, the billing address fallback) are computed once at construction,
//! and a status change produces a fresh order that replaces the stored one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loaded from environment variables.
pub mod config;

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// Domain re-exports
pub use domain::orders::{
    CreateOrderCommand, ListOrdersQuery, MAX_PAGE_SIZE, Order, OrderError, OrderItem,
    OrderItemInput, OrderStatus, OrderStore,
};
pub use domain::shared::{CustomerId, Money, OrderId, OrderItemId, ProductId, Timestamp};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{InMemoryOrderStore, seed_sample_orders};

// Configuration re-exports
pub use config::Settings;
