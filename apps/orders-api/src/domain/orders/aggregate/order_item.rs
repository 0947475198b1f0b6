//! Line items within an order.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, OrderItemId, ProductId};

/// Caller-supplied description of one line of a new order.
///
/// The subtotal is never accepted from the caller; it is computed when the
/// line is built into an [`OrderItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemInput {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Number of units, expected positive.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Money,
}

/// One line of an order.
///
/// Owned exclusively by its parent order and immutable once constructed.
/// Invariant: `subtotal == quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    product_id: ProductId,
    quantity: u32,
    unit_price: Money,
    subtotal: Money,
}

impl OrderItem {
    /// Build a line item from caller input, assigning a fresh id and
    /// computing the subtotal.
    #[must_use]
    pub fn build(input: OrderItemInput) -> Self {
        let subtotal = input.unit_price * input.quantity;
        Self {
            id: OrderItemId::generate(),
            product_id: input.product_id,
            quantity: input.quantity,
            unit_price: input.unit_price,
            subtotal,
        }
    }

    /// Get the line item id.
    #[must_use]
    pub const fn id(&self) -> &OrderItemId {
        &self.id
    }

    /// Get the product id.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the unit price.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Get the computed subtotal.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_input(quantity: u32, unit_price: Money) -> OrderItemInput {
        OrderItemInput {
            product_id: ProductId::new("prod1"),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn build_computes_subtotal() {
        let item = OrderItem::build(make_input(2, Money::new(dec!(10.99))));
        assert_eq!(item.subtotal().amount(), dec!(21.98));
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.unit_price().amount(), dec!(10.99));
    }

    #[test]
    fn build_assigns_unique_ids() {
        let a = OrderItem::build(make_input(1, Money::new(dec!(5))));
        let b = OrderItem::build(make_input(1, Money::new(dec!(5))));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn build_single_unit() {
        let item = OrderItem::build(make_input(1, Money::new(dec!(24.99))));
        assert_eq!(item.subtotal(), item.unit_price());
    }

    #[test]
    fn build_zero_price() {
        let item = OrderItem::build(make_input(3, Money::ZERO));
        assert!(item.subtotal().is_zero());
    }

    #[test]
    fn item_serde_field_names() {
        let item = OrderItem::build(make_input(2, Money::new(dec!(10.99))));
        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("id").is_some());
        assert_eq!(json["product_id"], "prod1");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["unit_price"], "10.99");
        assert_eq!(json["subtotal"], "21.98");
    }
}
