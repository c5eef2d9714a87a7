use serde::{Deserialize, Serialize};

use super::value::Value;
use super::value_type::ValueType;
use crate::error::TallyDBError;
use crate::result::Result;

/// Column descriptor. Headers are identified by `name` within a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(rename = "key", default)]
    pub is_key: bool,
}

impl Header {
    pub fn new(name: &str, value_type: ValueType, is_key: bool) -> Self {
        Header {
            name: name.to_string(),
            value_type,
            is_key,
        }
    }

    pub fn key(name: &str, value_type: ValueType) -> Self {
        Header::new(name, value_type, true)
    }

    pub fn string(name: &str) -> Self {
        Header::new(name, ValueType::String, false)
    }

    pub fn number(name: &str) -> Self {
        Header::new(name, ValueType::Number, false)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_key_header(&self) -> bool {
        self.is_key
    }

    pub fn is_string(&self) -> bool {
        self.value_type == ValueType::String
    }

    pub fn is_number(&self) -> bool {
        self.value_type == ValueType::Number
    }

    /// Reads `value` as a float. String headers never yield numbers.
    pub fn to_number(&self, value: &Value) -> Result<f64> {
        if self.is_string() {
            return Err(TallyDBError::NotANumber {
                value: value.get_value().to_string(),
                source: None,
            });
        }
        value
            .get_value()
            .parse::<f64>()
            .map_err(|e| TallyDBError::NotANumber {
                value: value.get_value().to_string(),
                source: Some(e),
            })
    }
}
