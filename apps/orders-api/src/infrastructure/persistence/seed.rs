//! Sample data for local development.

use rust_decimal_macros::dec;

use crate::domain::orders::aggregate::{CreateOrderCommand, OrderItemInput};
use crate::domain::orders::repository::OrderStore;
use crate::domain::orders::value_objects::OrderStatus;
use crate::domain::shared::{CustomerId, Money, ProductId};

/// Populate the store with a few demonstration orders.
///
/// # Errors
///
/// Returns error if any of the sample orders fails to insert.
pub async fn seed_sample_orders<S: OrderStore>(
    store: &S,
) -> Result<(), crate::domain::orders::OrderError> {
    store
        .create(CreateOrderCommand {
            customer_id: CustomerId::new("cust123"),
            items: vec![
                OrderItemInput {
                    product_id: ProductId::new("prod1"),
                    quantity: 2,
                    unit_price: Money::new(dec!(10.99)),
                },
                OrderItemInput {
                    product_id: ProductId::new("prod2"),
                    quantity: 1,
                    unit_price: Money::new(dec!(24.99)),
                },
            ],
            shipping_address: "123 Main St, Anytown, USA".to_string(),
            billing_address: None,
        })
        .await?;

    store
        .create(CreateOrderCommand {
            customer_id: CustomerId::new("cust456"),
            items: vec![OrderItemInput {
                product_id: ProductId::new("prod3"),
                quantity: 3,
                unit_price: Money::new(dec!(5.99)),
            }],
            shipping_address: "456 Oak Ave, Somewhere, USA".to_string(),
            billing_address: Some("789 Business Rd, Somewhere, USA".to_string()),
        })
        .await?;

    let completed = store
        .create(CreateOrderCommand {
            customer_id: CustomerId::new("cust123"),
            items: vec![OrderItemInput {
                product_id: ProductId::new("prod4"),
                quantity: 1,
                unit_price: Money::new(dec!(99.99)),
            }],
            shipping_address: "123 Main St, Anytown, USA".to_string(),
            billing_address: None,
        })
        .await?;
    store
        .update_status(completed.id(), OrderStatus::Completed)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::repository::ListOrdersQuery;
    use crate::infrastructure::persistence::InMemoryOrderStore;

    #[tokio::test]
    async fn seed_inserts_three_orders() {
        let store = InMemoryOrderStore::new();
        seed_sample_orders(&store).await.unwrap();

        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn seed_marks_one_order_completed() {
        let store = InMemoryOrderStore::new();
        seed_sample_orders(&store).await.unwrap();

        let completed = store
            .list(ListOrdersQuery {
                status: Some(OrderStatus::Completed),
                ..ListOrdersQuery::first_page()
            })
            .await
            .unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].total().amount(), dec!(99.99));
    }

    #[tokio::test]
    async fn seed_totals_and_addresses() {
        let store = InMemoryOrderStore::new();
        seed_sample_orders(&store).await.unwrap();

        let cust456 = store
            .list(ListOrdersQuery {
                customer_id: Some(CustomerId::new("cust456")),
                ..ListOrdersQuery::first_page()
            })
            .await
            .unwrap();
        assert_eq!(cust456.len(), 1);
        assert_eq!(cust456[0].total().amount(), dec!(17.97));
        assert_eq!(
            cust456[0].billing_address(),
            "789 Business Rd, Somewhere, USA"
        );
    }
}
