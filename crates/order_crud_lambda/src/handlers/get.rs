use order_crud_core::response::{self, ApiGatewayResponse};
use order_crud_core::store::{OrderLookup, OrderStore};
use serde_json::Value;

use crate::event::path_parameter;

const COMPONENT: &str = "get_handler";

pub fn handle_get_event(event: &Value, store: &dyn OrderStore) -> ApiGatewayResponse {
    get_order(path_parameter(event, "id"), store)
}

pub fn get_order(id: Option<&str>, store: &dyn OrderStore) -> ApiGatewayResponse {
    let id = match id {
        Some(value) if !value.is_empty() => value,
        _ => return response::bad_request("id is missing"),
    };

    let order = match store.get_order(id) {
        Ok(OrderLookup::Found(order)) => order,
        Ok(OrderLookup::Absent) => {
            return response::not_found(&format!("item {id} not found"));
        }
        Err(error) => {
            tracing::error!(
                component = COMPONENT,
                order_id = id,
                error = %error,
                "order_lookup_failed"
            );
            return response::internal_error();
        }
    };

    match serde_json::to_string(&order) {
        Ok(body) => response::ok(body),
        Err(error) => {
            tracing::error!(
                component = COMPONENT,
                order_id = id,
                error = %error,
                "order_serialization_failed"
            );
            response::internal_error()
        }
    }
}
