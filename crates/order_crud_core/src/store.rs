use std::collections::BTreeMap;
use std::fmt;
use std::sync::Mutex;

use thiserror::Error;

use crate::order::Order;

/// Result of a point lookup. A missing key is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderLookup {
    Found(Order),
    Absent,
}

impl OrderLookup {
    pub fn into_option(self) -> Option<Order> {
        match self {
            Self::Found(order) => Some(order),
            Self::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    CreateOrder,
    GetOrder,
    DeleteOrder,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateOrder => "create_order",
            Self::GetOrder => "get_order",
            Self::DeleteOrder => "delete_order",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{operation} failed for order '{id}': {message}")]
    Backend {
        operation: StoreOperation,
        id: String,
        message: String,
    },
    #[error("{operation} found an unreadable item for order '{id}': {message}")]
    Corrupt {
        operation: StoreOperation,
        id: String,
        message: String,
    },
}

impl StoreError {
    pub fn backend(operation: StoreOperation, id: &str, message: impl fmt::Display) -> Self {
        Self::Backend {
            operation,
            id: id.to_string(),
            message: message.to_string(),
        }
    }

    pub fn corrupt(operation: StoreOperation, id: &str, message: impl fmt::Display) -> Self {
        Self::Corrupt {
            operation,
            id: id.to_string(),
            message: message.to_string(),
        }
    }

    pub fn operation(&self) -> StoreOperation {
        match self {
            Self::Backend { operation, .. } | Self::Corrupt { operation, .. } => *operation,
        }
    }
}

/// Single-key access to the order table.
///
/// Implementations propagate backend failures unmodified: no classification
/// and no retries happen at this layer.
pub trait OrderStore {
    /// Overwrite-put keyed by `order.id`.
    fn create_order(&self, order: &Order) -> Result<(), StoreError>;

    fn get_order(&self, id: &str) -> Result<OrderLookup, StoreError>;

    /// Deleting a key that does not exist succeeds.
    fn delete_order(&self, id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<BTreeMap<String, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().map(|orders| orders.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .lock()
            .map_err(|error| StoreError::backend(StoreOperation::CreateOrder, &order.id, error))?;
        orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    fn get_order(&self, id: &str) -> Result<OrderLookup, StoreError> {
        let orders = self
            .orders
            .lock()
            .map_err(|error| StoreError::backend(StoreOperation::GetOrder, id, error))?;
        Ok(orders
            .get(id)
            .cloned()
            .map_or(OrderLookup::Absent, OrderLookup::Found))
    }

    fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .lock()
            .map_err(|error| StoreError::backend(StoreOperation::DeleteOrder, id, error))?;
        orders.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_replaces_existing_order() {
        let store = InMemoryOrderStore::new();
        let mut order = Order::new("o-1");
        order.order_amount = 10.0;
        store.create_order(&order).expect("first put should succeed");

        order.order_amount = 20.0;
        store.create_order(&order).expect("second put should succeed");

        assert_eq!(store.len(), 1);
        let stored = store
            .get_order("o-1")
            .expect("lookup should succeed")
            .into_option()
            .expect("order should exist");
        assert_eq!(stored.order_amount, 20.0);
    }

    #[test]
    fn missing_key_is_absent_not_error() {
        let store = InMemoryOrderStore::new();
        assert_eq!(
            store.get_order("nope").expect("lookup should succeed"),
            OrderLookup::Absent
        );
    }

    #[test]
    fn delete_is_idempotent() {
        let store = InMemoryOrderStore::new();
        store
            .create_order(&Order::new("o-1"))
            .expect("put should succeed");

        store.delete_order("o-1").expect("delete should succeed");
        store.delete_order("o-1").expect("repeat delete should succeed");
        assert!(store.is_empty());
    }

    #[test]
    fn error_display_names_operation_and_id() {
        let error = StoreError::backend(StoreOperation::GetOrder, "o-9", "throttled");
        assert_eq!(error.operation(), StoreOperation::GetOrder);
        assert_eq!(error.to_string(), "get_order failed for order 'o-9': throttled");
    }
}
