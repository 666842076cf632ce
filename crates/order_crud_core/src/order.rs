use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// Bounds of the DynamoDB number type.
const MAX_AMOUNT_MAGNITUDE: f64 = 1e126;
const MIN_AMOUNT_MAGNITUDE: f64 = 1e-130;

/// A single order item, keyed by `id` in the order table.
///
/// The JSON contract uses camelCase field names except for the partition key,
/// which travels as `Id` (lowercase `id` is accepted on input). Unknown fields
/// are rejected so a misspelled attribute surfaces as a malformed order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Order {
    #[serde(
        rename = "Id",
        alias = "id",
        default,
        deserialize_with = "nullable_string_or_number"
    )]
    pub id: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub order_amount: f64,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub customer_order_id: Option<String>,
    #[serde(default)]
    pub protection_plan: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub protection_plan_amount: f64,
}

impl Order {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Assigns `fallback_id` when the order arrived without an identifier.
    /// An id that is already set is never replaced.
    pub fn assign_id_if_missing(&mut self, fallback_id: &str) {
        if !self.has_id() {
            self.id = fallback_id.to_string();
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

// Load generators send `customerOrderId` (and sometimes `Id`) as a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(StringOrNumber::into_text))
}

fn nullable_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_number(deserializer).map(Option::unwrap_or_default)
}

/// Null reads as zero. Magnitudes the store cannot hold are rejected.
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    let magnitude = value.abs();
    let too_small = magnitude != 0.0 && magnitude < MIN_AMOUNT_MAGNITUDE;
    if magnitude >= MAX_AMOUNT_MAGNITUDE || too_small {
        return Err(D::Error::custom(format!("amount {value} is out of range")));
    }
    Ok(value)
}
