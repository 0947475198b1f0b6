//! Order Store Trait
//!
//! Defines the storage abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::{CreateOrderCommand, Order};
use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::shared::{CustomerId, OrderId};

/// Maximum page size accepted by [`OrderStore::list`].
pub const MAX_PAGE_SIZE: usize = 100;

/// Filter and pagination parameters for [`OrderStore::list`].
#[derive(Debug, Clone, Default)]
pub struct ListOrdersQuery {
    /// Number of orders to skip after filtering and sorting.
    pub skip: usize,
    /// Maximum number of orders to return, expected in `1..=MAX_PAGE_SIZE`.
    pub limit: usize,
    /// Keep only orders for this customer.
    pub customer_id: Option<CustomerId>,
    /// Keep only orders with this status.
    pub status: Option<OrderStatus>,
}

impl ListOrdersQuery {
    /// A query returning the first page at the maximum size, no filters.
    #[must_use]
    pub fn first_page() -> Self {
        Self {
            skip: 0,
            limit: MAX_PAGE_SIZE,
            customer_id: None,
            status: None,
        }
    }
}

/// Storage port for orders: the sole authority over the set of live orders.
///
/// Every read-then-write operation is atomic with respect to other
/// operations on the same id; `list` observes a consistent snapshot for the
/// duration of its filter/sort/paginate pass.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Build an order from the command and insert it under its fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyItems`] if the command has no line items.
    async fn create(&self, cmd: CreateOrderCommand) -> Result<Order, OrderError>;

    /// Fetch an order by id. A miss is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Replace the stored order with a copy carrying the new status and a
    /// fresh `updated_at`. Returns the replacement, or `None` if the id is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns error if the update fails.
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderError>;

    /// Remove an order. Returns `false` if the id was absent.
    ///
    /// # Errors
    ///
    /// Returns error if the deletion fails.
    async fn delete(&self, id: &OrderId) -> Result<bool, OrderError>;

    /// List orders: filter by customer and status, sort newest first, then
    /// slice `[skip, skip + limit)` clipped to the available length.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list(&self, query: ListOrdersQuery) -> Result<Vec<Order>, OrderError>;
}
