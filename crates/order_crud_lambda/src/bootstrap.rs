use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;

use crate::adapters::dynamodb::DynamoDbOrderStore;
use crate::config::{ConfigError, StoreConfig};

/// Builds the process-wide order store from the environment.
///
/// Called once per Lambda instance; the returned store is reused by every
/// invocation that instance serves.
pub async fn load_order_store() -> Result<DynamoDbOrderStore, ConfigError> {
    let config = StoreConfig::from_env()?;

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;

    tracing::info!(
        component = "bootstrap",
        table_name = %config.table_name,
        consistent_read = config.consistent_read,
        "order_store_ready"
    );
    Ok(DynamoDbOrderStore::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        &config,
    ))
}
