use order_crud_core::response::{self, ApiGatewayResponse};
use order_crud_core::store::OrderStore;
use serde_json::Value;

use crate::event::path_parameter;

const COMPONENT: &str = "delete_handler";

pub fn handle_delete_event(event: &Value, store: &dyn OrderStore) -> ApiGatewayResponse {
    delete_order(path_parameter(event, "id"), store)
}

/// Deleting an id that was never stored still answers 200.
pub fn delete_order(id: Option<&str>, store: &dyn OrderStore) -> ApiGatewayResponse {
    let id = match id {
        Some(value) if !value.is_empty() => value,
        _ => return response::bad_request("id is missing"),
    };

    if let Err(error) = store.delete_order(id) {
        tracing::error!(
            component = COMPONENT,
            order_id = id,
            error = %error,
            "order_delete_failed"
        );
        return response::internal_error();
    }

    tracing::info!(component = COMPONENT, order_id = id, "order_deleted");
    response::ok(response::message_body("Item deleted successfully"))
}

#[cfg(test)]
mod tests {
    use order_crud_core::order::Order;
    use order_crud_core::store::{InMemoryOrderStore, OrderLookup};
    use serde_json::json;

    use super::*;
    use crate::handlers::test_support::{FailingStore, PanickingStore};

    #[test]
    fn removes_existing_order() {
        let store = InMemoryOrderStore::new();
        store
            .create_order(&Order::new("o-1"))
            .expect("seed should succeed");

        let response = delete_order(Some("o-1"), &store);

        assert_eq!(response.status_code, 200);
        assert_eq!(
            serde_json::from_str::<Value>(&response.body).expect("body should be JSON"),
            json!({"message": "Item deleted successfully"})
        );
        assert_eq!(
            store.get_order("o-1").expect("lookup should succeed"),
            OrderLookup::Absent
        );
    }

    #[test]
    fn unknown_id_still_succeeds() {
        let response = delete_order(Some("never-created"), &InMemoryOrderStore::new());
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn missing_or_empty_id_never_reaches_the_store() {
        for id in [None, Some("")] {
            let response = delete_order(id, &PanickingStore);
            assert_eq!(response.status_code, 400);
            assert!(response.body.contains("id is missing"));
        }
    }

    #[test]
    fn store_failure_is_internal_error() {
        let response = delete_order(Some("o-1"), &FailingStore);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.content_type(), Some("application/json"));
    }

    #[test]
    fn reads_id_from_path_parameters() {
        let response = handle_delete_event(&json!({}), &PanickingStore);
        assert_eq!(response.status_code, 400);

        let response = handle_delete_event(
            &json!({"pathParameters": {"id": "o-3"}}),
            &InMemoryOrderStore::new(),
        );
        assert_eq!(response.status_code, 200);
    }
}
