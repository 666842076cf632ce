use order_crud_core::order::Order;
use order_crud_core::response::{self, ApiGatewayResponse};
use order_crud_core::store::OrderStore;
use serde_json::Value;

use crate::event::request_body;

const COMPONENT: &str = "create_handler";

pub fn handle_create_event(
    event: &Value,
    request_id: &str,
    store: &dyn OrderStore,
) -> ApiGatewayResponse {
    create_order(request_body(event).as_deref(), request_id, store)
}

/// Stores the order in `body`, assigning `request_id` when it carries no id.
pub fn create_order(
    body: Option<&str>,
    request_id: &str,
    store: &dyn OrderStore,
) -> ApiGatewayResponse {
    let mut order = match serde_json::from_str::<Order>(body.unwrap_or_default()) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                component = COMPONENT,
                request_id,
                error = %error,
                "order_malformed"
            );
            return response::bad_request("Order is malformed");
        }
    };
    order.assign_id_if_missing(request_id);

    if let Err(error) = store.create_order(&order) {
        tracing::error!(
            component = COMPONENT,
            order_id = %order.id,
            error = %error,
            "order_create_failed"
        );
        return response::internal_error();
    }

    tracing::info!(component = COMPONENT, order_id = %order.id, "order_created");
    let message = format!("Item '{}' created", order.id);
    response::created(response::message_body(&message))
}
