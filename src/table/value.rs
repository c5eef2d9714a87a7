use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual content of one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    pub fn new(value: impl Into<String>) -> Self {
        Value(value.into())
    }

    pub fn get_value(&self) -> &str {
        &self.0
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::new(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value(value)
    }
}
