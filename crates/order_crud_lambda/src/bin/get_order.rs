use lambda_runtime::{service_fn, Error, LambdaEvent};
use order_crud_core::response::ApiGatewayResponse;
use order_crud_lambda::adapters::dynamodb::DynamoDbOrderStore;
use order_crud_lambda::bootstrap::load_order_store;
use order_crud_lambda::handlers::get::handle_get_event;
use order_crud_lambda::telemetry::init_tracing;
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &DynamoDbOrderStore,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_get_event(&event.payload, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    let store = load_order_store().await?;

    lambda_runtime::run(service_fn(|event| handle_request(event, &store))).await
}
