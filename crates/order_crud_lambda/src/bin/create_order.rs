use lambda_runtime::{service_fn, Error, LambdaEvent};
use order_crud_core::response::ApiGatewayResponse;
use order_crud_lambda::adapters::dynamodb::DynamoDbOrderStore;
use order_crud_lambda::bootstrap::load_order_store;
use order_crud_lambda::event::gateway_request_id;
use order_crud_lambda::handlers::create::handle_create_event;
use order_crud_lambda::telemetry::init_tracing;
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &DynamoDbOrderStore,
) -> Result<ApiGatewayResponse, Error> {
    // Direct invocations carry no gateway context; fall back to the invocation id.
    let request_id = gateway_request_id(&event.payload)
        .unwrap_or(event.context.request_id.as_str())
        .to_string();

    Ok(handle_create_event(&event.payload, &request_id, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    let store = load_order_store().await?;

    lambda_runtime::run(service_fn(|event| handle_request(event, &store))).await
}
