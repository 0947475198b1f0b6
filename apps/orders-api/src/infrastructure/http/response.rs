//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::orders::aggregate::{Order, OrderItem};
use crate::domain::orders::value_objects::OrderStatus;
use crate::domain::shared::Timestamp;

/// A line item as serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemResponse {
    /// Line item ID.
    pub id: String,
    /// Product ID.
    pub product_id: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Computed subtotal.
    pub subtotal: Decimal,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id().as_str().to_string(),
            product_id: item.product_id().as_str().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price().amount(),
            subtotal: item.subtotal().amount(),
        }
    }
}

/// An order as serialized to clients.
///
/// Field names and the lowercase status strings are a stable wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Order ID.
    pub id: String,
    /// Customer ID.
    pub customer_id: String,
    /// Line items.
    pub items: Vec<OrderItemResponse>,
    /// Current status.
    pub status: OrderStatus,
    /// Order total.
    pub total: Decimal,
    /// Shipping address.
    pub shipping_address: String,
    /// Billing address.
    pub billing_address: String,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Last update timestamp.
    pub updated_at: Timestamp,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().as_str().to_string(),
            customer_id: order.customer_id().as_str().to_string(),
            items: order.items().iter().map(OrderItemResponse::from).collect(),
            status: order.status(),
            total: order.total().amount(),
            shipping_address: order.shipping_address().to_string(),
            billing_address: order.billing_address().to_string(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}
