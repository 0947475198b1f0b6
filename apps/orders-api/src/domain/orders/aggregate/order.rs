//! Order Aggregate Root
//!
//! An order is an immutable value: a status change never mutates the stored
//! record in place, it derives a complete replacement with the same identity.

use serde::{Deserialize, Serialize};

use super::{OrderItem, OrderItemInput};
use crate::domain::orders::errors::OrderError;
use crate::domain::orders::value_objects::OrderStatus;
use crate::domain::shared::{CustomerId, Money, OrderId, Timestamp};

/// Command to create a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderCommand {
    /// Customer placing the order.
    pub customer_id: CustomerId,
    /// Line items, must be non-empty.
    pub items: Vec<OrderItemInput>,
    /// Address the order ships to.
    pub shipping_address: String,
    /// Billing address; falls back to the shipping address when absent.
    pub billing_address: Option<String>,
}

/// Order Aggregate Root.
///
/// A customer's purchase record: line items, computed total, addresses,
/// status and timestamps. Construction computes every derived field; after
/// that the value never changes. Status updates go through [`Order::with_status`],
/// which yields a replacement value sharing the same `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
    status: OrderStatus,
    total: Money,
    shipping_address: String,
    billing_address: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Order {
    /// Create a new order from a command.
    ///
    /// Assigns a fresh id and timestamps, builds each line item (computing
    /// its subtotal), sums the subtotals into the total, and applies the
    /// billing address fallback once. The order starts as
    /// [`OrderStatus::Pending`].
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyItems`] if the command has no line items.
    pub fn new(cmd: CreateOrderCommand) -> Result<Self, OrderError> {
        if cmd.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let items: Vec<OrderItem> = cmd.items.into_iter().map(OrderItem::build).collect();
        let total: Money = items.iter().map(OrderItem::subtotal).sum();

        let billing_address = cmd
            .billing_address
            .unwrap_or_else(|| cmd.shipping_address.clone());

        let now = Timestamp::now();

        Ok(Self {
            id: OrderId::generate(),
            customer_id: cmd.customer_id,
            items,
            status: OrderStatus::Pending,
            total,
            shipping_address: cmd.shipping_address,
            billing_address,
            created_at: now,
            updated_at: now,
        })
    }

    /// Derive the replacement value for a status update.
    ///
    /// Shares every field with `self` except `status` and `updated_at`.
    /// The caller (the store) swaps the stored entry for the returned value.
    #[must_use]
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            updated_at: Timestamp::now(),
            ..self.clone()
        }
    }

    /// Get the order id.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the customer id.
    #[must_use]
    pub const fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Get the line items.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the order total.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Get the shipping address.
    #[must_use]
    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    /// Get the billing address.
    #[must_use]
    pub fn billing_address(&self) -> &str {
        &self.billing_address
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
