pub mod create;
pub mod delete;
pub mod get;

#[cfg(test)]
pub(crate) mod test_support {
    use order_crud_core::order::Order;
    use order_crud_core::store::{OrderLookup, OrderStore, StoreError, StoreOperation};

    /// Fails every call the way a throttled backend would.
    pub struct FailingStore;

    impl OrderStore for FailingStore {
        fn create_order(&self, order: &Order) -> Result<(), StoreError> {
            Err(StoreError::backend(
                StoreOperation::CreateOrder,
                &order.id,
                "throttled",
            ))
        }

        fn get_order(&self, id: &str) -> Result<OrderLookup, StoreError> {
            Err(StoreError::backend(StoreOperation::GetOrder, id, "throttled"))
        }

        fn delete_order(&self, id: &str) -> Result<(), StoreError> {
            Err(StoreError::backend(
                StoreOperation::DeleteOrder,
                id,
                "throttled",
            ))
        }
    }

    /// Asserts that validation short-circuits before any store access.
    pub struct PanickingStore;

    impl OrderStore for PanickingStore {
        fn create_order(&self, _order: &Order) -> Result<(), StoreError> {
            panic!("store must not be called");
        }

        fn get_order(&self, _id: &str) -> Result<OrderLookup, StoreError> {
            panic!("store must not be called");
        }

        fn delete_order(&self, _id: &str) -> Result<(), StoreError> {
            panic!("store must not be called");
        }
    }
}
