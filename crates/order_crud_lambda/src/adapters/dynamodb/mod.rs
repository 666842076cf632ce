pub mod item;

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use order_crud_core::order::Order;
use order_crud_core::store::{OrderLookup, OrderStore, StoreError, StoreOperation};

use crate::config::StoreConfig;

use self::item::{item_to_order, key_for, order_to_item, Item};

/// `OrderStore` backed by a single DynamoDB table keyed on `Id`.
///
/// The trait is synchronous, so each call blocks on the current Tokio runtime.
/// Callers must run on a multi-thread runtime.
#[derive(Debug, Clone)]
pub struct DynamoDbOrderStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
    consistent_read: bool,
}

impl DynamoDbOrderStore {
    pub fn new(client: aws_sdk_dynamodb::Client, config: &StoreConfig) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
            consistent_read: config.consistent_read,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl OrderStore for DynamoDbOrderStore {
    fn create_order(&self, order: &Order) -> Result<(), StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = order_to_item(order);

        block_on(async move {
            client
                .put_item()
                .table_name(table_name)
                .set_item(Some(item))
                .send()
                .await
        })
        .map(|_| ())
        .map_err(|error| backend_error(StoreOperation::CreateOrder, &order.id, error))
    }

    fn get_order(&self, id: &str) -> Result<OrderLookup, StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let consistent_read = self.consistent_read;
        let key = key_for(id);

        let output = block_on(async move {
            client
                .get_item()
                .table_name(table_name)
                .set_key(Some(key))
                .consistent_read(consistent_read)
                .send()
                .await
        })
        .map_err(|error| backend_error(StoreOperation::GetOrder, id, error))?;

        lookup_from_item(id, output.item)
    }

    fn delete_order(&self, id: &str) -> Result<(), StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let key = key_for(id);

        block_on(async move {
            client
                .delete_item()
                .table_name(table_name)
                .set_key(Some(key))
                .send()
                .await
        })
        .map(|_| ())
        .map_err(|error| backend_error(StoreOperation::DeleteOrder, id, error))
    }
}

/// A missing item is `Absent`; an item that does not map back to an order is corrupt.
fn lookup_from_item(id: &str, item: Option<Item>) -> Result<OrderLookup, StoreError> {
    match item {
        None => Ok(OrderLookup::Absent),
        Some(item) => item_to_order(&item)
            .map(OrderLookup::Found)
            .map_err(|error| StoreError::corrupt(StoreOperation::GetOrder, id, error)),
    }
}

fn backend_error<E, R>(operation: StoreOperation, id: &str, error: SdkError<E, R>) -> StoreError
where
    E: Error + 'static,
    R: Debug,
{
    StoreError::backend(operation, id, DisplayErrorContext(error))
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
