use thiserror::Error;

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const REGION_ENV: &str = "AWS_REGION";
pub const CONSISTENT_READ_ENV: &str = "CONSISTENT_READ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),
    #[error("{name} must be `true` or `false`, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
}

/// Order table settings, read once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub table_name: String,
    /// Overrides the region resolved by the default provider chain.
    pub region: Option<String>,
    pub consistent_read: bool,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = non_blank(lookup(TABLE_NAME_ENV))
            .ok_or(ConfigError::Missing(TABLE_NAME_ENV))?;
        let region = non_blank(lookup(REGION_ENV));
        let consistent_read = match non_blank(lookup(CONSISTENT_READ_ENV)) {
            None => false,
            Some(value) => parse_flag(CONSISTENT_READ_ENV, &value)?,
        };

        Ok(Self {
            table_name,
            region,
            consistent_read,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
