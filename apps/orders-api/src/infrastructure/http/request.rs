//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::orders::aggregate::{CreateOrderCommand, OrderItemInput};
use crate::domain::orders::value_objects::OrderStatus;
use crate::domain::shared::{CustomerId, Money, ProductId};

/// A single line item in a create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    /// Product being purchased.
    pub product_id: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Request to create an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Customer placing the order.
    pub customer_id: String,
    /// Line items.
    pub items: Vec<OrderItemRequest>,
    /// Shipping address.
    pub shipping_address: String,
    /// Billing address; defaults to the shipping address when omitted.
    pub billing_address: Option<String>,
}

impl From<CreateOrderRequest> for CreateOrderCommand {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            customer_id: CustomerId::new(req.customer_id),
            items: req
                .items
                .into_iter()
                .map(|item| OrderItemInput {
                    product_id: ProductId::new(item.product_id),
                    quantity: item.quantity,
                    unit_price: Money::new(item.unit_price),
                })
                .collect(),
            shipping_address: req.shipping_address,
            billing_address: req.billing_address,
        }
    }
}

/// Request to update an order's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    /// The new status.
    pub status: OrderStatus,
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrdersParams {
    /// Number of orders to skip.
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of orders to return, must be in `1..=100`.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Filter by customer ID.
    pub customer_id: Option<String>,
    /// Filter by order status.
    pub status: Option<OrderStatus>,
}

const fn default_limit() -> usize {
    100
}
