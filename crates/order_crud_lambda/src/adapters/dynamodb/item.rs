//! Explicit mapping between `Order` and DynamoDB items.
//!
//! The partition key is stored as `Id`; all other attributes keep their JSON
//! field names. Unset optional strings are not written.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use order_crud_core::order::Order;
use thiserror::Error;

pub type Item = HashMap<String, AttributeValue>;

pub const PARTITION_KEY: &str = "Id";
pub const DEVICE_ID: &str = "deviceId";
pub const DEVICE_TYPE: &str = "deviceType";
pub const ORDER_AMOUNT: &str = "orderAmount";
pub const CUSTOMER_ID: &str = "customerId";
pub const CUSTOMER_ORDER_ID: &str = "customerOrderId";
pub const PROTECTION_PLAN: &str = "protectionPlan";
pub const PROTECTION_PLAN_AMOUNT: &str = "protectionPlanAmount";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("attribute `{0}` has an unexpected type")]
    InvalidType(&'static str),
    #[error("attribute `{name}` is not a number: `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

pub fn key_for(id: &str) -> Item {
    HashMap::from([(PARTITION_KEY.to_string(), AttributeValue::S(id.to_string()))])
}

pub fn order_to_item(order: &Order) -> Item {
    let mut item = key_for(&order.id);
    put_string(&mut item, DEVICE_ID, &order.device_id);
    put_string(&mut item, DEVICE_TYPE, &order.device_type);
    put_number(&mut item, ORDER_AMOUNT, order.order_amount);
    put_string(&mut item, CUSTOMER_ID, &order.customer_id);
    put_string(&mut item, CUSTOMER_ORDER_ID, &order.customer_order_id);
    put_string(&mut item, PROTECTION_PLAN, &order.protection_plan);
    put_number(&mut item, PROTECTION_PLAN_AMOUNT, order.protection_plan_amount);
    item
}

pub fn item_to_order(item: &Item) -> Result<Order, ItemError> {
    let id = get_string(item, PARTITION_KEY)?
        .ok_or(ItemError::MissingAttribute(PARTITION_KEY))?;

    Ok(Order {
        id,
        device_id: get_string(item, DEVICE_ID)?,
        device_type: get_string(item, DEVICE_TYPE)?,
        order_amount: get_number(item, ORDER_AMOUNT)?,
        customer_id: get_string(item, CUSTOMER_ID)?,
        customer_order_id: get_string(item, CUSTOMER_ORDER_ID)?,
        protection_plan: get_string(item, PROTECTION_PLAN)?,
        protection_plan_amount: get_number(item, PROTECTION_PLAN_AMOUNT)?,
    })
}

fn put_string(item: &mut Item, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        item.insert(name.to_string(), AttributeValue::S(value.clone()));
    }
}

fn put_number(item: &mut Item, name: &str, value: f64) {
    item.insert(name.to_string(), AttributeValue::N(number_text(value)));
}

// Plain decimal text stops being compact outside this band, so switch to
// exponent form there (`1e125`, not a 126-digit string).
fn number_text(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-7) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

fn get_string(item: &Item, name: &'static str) -> Result<Option<String>, ItemError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
        // Numbers written by other producers for string fields are kept as text.
        Some(AttributeValue::N(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ItemError::InvalidType(name)),
    }
}

fn get_number(item: &Item, name: &'static str) -> Result<f64, ItemError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(0.0),
        Some(AttributeValue::N(value)) => parse_number(name, value),
        Some(_) => Err(ItemError::InvalidType(name)),
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, ItemError> {
    value.parse::<f64>().map_err(|_| ItemError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
