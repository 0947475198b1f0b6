//! In-memory order store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::orders::aggregate::{CreateOrderCommand, Order};
use crate::domain::orders::errors::OrderError;
use crate::domain::orders::repository::{ListOrdersQuery, OrderStore};
use crate::domain::orders::value_objects::OrderStatus;
use crate::domain::shared::OrderId;

/// A stored order plus its insertion sequence number.
///
/// The sequence breaks `created_at` ties in `list` so repeated calls return
/// the same order even when several orders share a timestamp.
#[derive(Debug, Clone)]
struct Entry {
    order: Order,
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

/// In-memory implementation of [`OrderStore`].
///
/// One `RwLock` guards the whole collection: every read-modify-write runs
/// inside a single write-lock critical section, and `list` filters, sorts
/// and paginates under one read lock, so it sees a consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Inner>,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Get the number of orders in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().entries.is_empty()
    }

    /// Clear all orders from the store.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.entries.clear();
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, cmd: CreateOrderCommand) -> Result<Order, OrderError> {
        let order = Order::new(cmd)?;

        let mut inner = self.inner.write().unwrap();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            order.id().as_str().to_string(),
            Entry {
                order: order.clone(),
                seq,
            },
        );

        tracing::debug!(order_id = %order.id(), total = %order.total(), "Order created");
        Ok(order)
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.entries.get(id.as_str()).map(|e| e.order.clone()))
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderError> {
        // Read-derive-replace happens under one write lock so concurrent
        // updates on the same id cannot lose each other's writes.
        let mut inner = self.inner.write().unwrap();
        let Some(entry) = inner.entries.get_mut(id.as_str()) else {
            return Ok(None);
        };

        let updated = entry.order.with_status(status);
        entry.order = updated.clone();

        tracing::debug!(order_id = %id, status = %status, "Order status updated");
        Ok(Some(updated))
    }

    async fn delete(&self, id: &OrderId) -> Result<bool, OrderError> {
        let mut inner = self.inner.write().unwrap();
        let removed = inner.entries.remove(id.as_str()).is_some();
        if removed {
            tracing::debug!(order_id = %id, "Order deleted");
        }
        Ok(removed)
    }

    async fn list(&self, query: ListOrdersQuery) -> Result<Vec<Order>, OrderError> {
        let inner = self.inner.read().unwrap();

        let mut matches: Vec<&Entry> = inner
            .entries
            .values()
            .filter(|e| {
                query
                    .customer_id
                    .as_ref()
                    .is_none_or(|c| e.order.customer_id() == c)
            })
            .filter(|e| query.status.is_none_or(|s| e.order.status() == s))
            .collect();

        // Newest first; insertion sequence breaks created_at ties.
        matches.sort_by(|a, b| {
            b.order
                .created_at()
                .cmp(&a.order.created_at())
                .then(b.seq.cmp(&a.seq))
        });

        Ok(matches
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .map(|e| e.order.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::aggregate::OrderItemInput;
    use crate::domain::shared::{CustomerId, Money, ProductId};
    use rust_decimal_macros::dec;

    fn make_command(customer: &str) -> CreateOrderCommand {
        CreateOrderCommand {
            customer_id: CustomerId::new(customer),
            items: vec![OrderItemInput {
                product_id: ProductId::new("prod1"),
                quantity: 2,
                unit_price: Money::new(dec!(10.99)),
            }],
            shipping_address: "123 Main St".to_string(),
            billing_address: None,
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemoryOrderStore::new();
        let order = store.create(make_command("cust123")).await.unwrap();

        let found = store.get(order.id()).await.unwrap();
        assert_eq!(found, Some(order));
    }

    #[tokio::test]
    async fn create_rejects_empty_items() {
        let store = InMemoryOrderStore::new();
        let mut cmd = make_command("cust123");
        cmd.items.clear();

        let result = store.create(cmd).await;
        assert_eq!(result.unwrap_err(), OrderError::EmptyItems);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn get_is_idempotent() {
        let store = InMemoryOrderStore::new();
        let order = store.create(make_command("cust123")).await.unwrap();

        let first = store.get(order.id()).await.unwrap();
        let second = store.get(order.id()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn get_miss_is_none() {
        let store = InMemoryOrderStore::new();
        let found = store.get(&OrderId::new("nonexistent")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_status_replaces_value() {
        let store = InMemoryOrderStore::new();
        let order = store.create(make_command("cust123")).await.unwrap();

        let updated = store
            .update_status(order.id(), OrderStatus::Completed)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id(), order.id());
        assert_eq!(updated.status(), OrderStatus::Completed);
        assert_eq!(updated.created_at(), order.created_at());
        assert!(updated.updated_at() >= order.updated_at());

        // The stored entry was swapped for the replacement.
        let stored = store.get(order.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_status_miss_is_none() {
        let store = InMemoryOrderStore::new();
        let result = store
            .update_status(&OrderId::new("nonexistent"), OrderStatus::Completed)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_removes_visibility() {
        let store = InMemoryOrderStore::new();
        let order = store.create(make_command("cust123")).await.unwrap();

        assert!(store.delete(order.id()).await.unwrap());
        assert!(store.get(order.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_miss_is_false() {
        let store = InMemoryOrderStore::new();
        assert!(!store.delete(&OrderId::new("nonexistent")).await.unwrap());
    }

    #[tokio::test]
    async fn list_filters_by_customer() {
        let store = InMemoryOrderStore::new();
        store.create(make_command("custA")).await.unwrap();
        store.create(make_command("custA")).await.unwrap();
        store.create(make_command("custB")).await.unwrap();

        let query = ListOrdersQuery {
            customer_id: Some(CustomerId::new("custA")),
            ..ListOrdersQuery::first_page()
        };
        let orders = store.list(query).await.unwrap();

        assert_eq!(orders.len(), 2);
        assert!(
            orders
                .iter()
                .all(|o| o.customer_id() == &CustomerId::new("custA"))
        );
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let store = InMemoryOrderStore::new();
        let first = store.create(make_command("custA")).await.unwrap();
        store.create(make_command("custA")).await.unwrap();
        store
            .update_status(first.id(), OrderStatus::Completed)
            .await
            .unwrap();

        let query = ListOrdersQuery {
            status: Some(OrderStatus::Completed),
            ..ListOrdersQuery::first_page()
        };
        let orders = store.list(query).await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id(), first.id());
    }

    #[tokio::test]
    async fn list_combines_filters() {
        let store = InMemoryOrderStore::new();
        let a = store.create(make_command("custA")).await.unwrap();
        store.create(make_command("custA")).await.unwrap();
        let b = store.create(make_command("custB")).await.unwrap();
        store
            .update_status(a.id(), OrderStatus::Cancelled)
            .await
            .unwrap();
        store
            .update_status(b.id(), OrderStatus::Cancelled)
            .await
            .unwrap();

        let query = ListOrdersQuery {
            customer_id: Some(CustomerId::new("custA")),
            status: Some(OrderStatus::Cancelled),
            ..ListOrdersQuery::first_page()
        };
        let orders = store.list(query).await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id(), a.id());
    }

    #[tokio::test]
    async fn list_sorts_newest_first() {
        let store = InMemoryOrderStore::new();
        let first = store.create(make_command("custA")).await.unwrap();
        let second = store.create(make_command("custA")).await.unwrap();
        let third = store.create(make_command("custA")).await.unwrap();

        let orders = store.list(ListOrdersQuery::first_page()).await.unwrap();
        let ids: Vec<_> = orders.iter().map(Order::id).collect();

        // Ties on created_at resolve to insertion order, newest insertion
        // first, so the result is deterministic either way.
        assert_eq!(ids, vec![third.id(), second.id(), first.id()]);
    }

    #[tokio::test]
    async fn list_paginates() {
        let store = InMemoryOrderStore::new();
        for _ in 0..5 {
            store.create(make_command("custA")).await.unwrap();
        }

        let all = store.list(ListOrdersQuery::first_page()).await.unwrap();

        let head = store
            .list(ListOrdersQuery {
                skip: 0,
                limit: 1,
                ..ListOrdersQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(head.len(), 1);
        assert_eq!(head[0], all[0]);

        let middle = store
            .list(ListOrdersQuery {
                skip: 2,
                limit: 2,
                ..ListOrdersQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(middle.len(), 2);
        assert_eq!(middle[0], all[2]);
        assert_eq!(middle[1], all[3]);
    }

    #[tokio::test]
    async fn list_out_of_range_skip_is_empty() {
        let store = InMemoryOrderStore::new();
        store.create(make_command("custA")).await.unwrap();

        let orders = store
            .list(ListOrdersQuery {
                skip: 1000,
                limit: 10,
                ..ListOrdersQuery::default()
            })
            .await
            .unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn concurrent_status_updates_do_not_lose_writes() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryOrderStore::new());
        let order = store.create(make_command("custA")).await.unwrap();

        let mut handles = Vec::new();
        for status in [OrderStatus::Processing, OrderStatus::Completed] {
            for _ in 0..50 {
                let store = Arc::clone(&store);
                let id = order.id().clone();
                handles.push(tokio::spawn(async move {
                    store.update_status(&id, status).await.unwrap().unwrap();
                }));
            }
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Every update succeeded and the final stored value is one of them.
        let stored = store.get(order.id()).await.unwrap().unwrap();
        assert!(matches!(
            stored.status(),
            OrderStatus::Processing | OrderStatus::Completed
        ));
        assert_eq!(stored.id(), order.id());
    }

    #[tokio::test]
    async fn len_is_empty_and_clear() {
        let store = InMemoryOrderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.create(make_command("custA")).await.unwrap();
        store.create(make_command("custB")).await.unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }
}
