use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum TallyDBError {
    /// No key header name was given, or no header carries it as key.
    #[error("key header '{header}' must exist and not be empty")]
    KeyHeaderEmpty { header: String },

    #[error("row key header '{found}' does not match table key header '{expected}'")]
    KeyHeaderIncorrect { expected: String, found: String },

    #[error("key header '{header}' already exists")]
    KeyHeaderAlreadyExists { header: String },

    #[error("key header '{header}' cannot be deleted")]
    CannotDeleteKeyHeader { header: String },

    #[error("header '{header}' is defined more than once")]
    DuplicateHeader { header: String },

    #[error("header '{header}' does not exist")]
    HeaderNotFound { header: String },

    #[error("a row with '{header}' = '{value}' already exists")]
    DuplicateKeyValue { header: String, value: String },

    #[error("key value must not be empty")]
    KeyValueEmpty,

    #[error("'{value}' is not a number")]
    NotANumber {
        value: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("database '{name}' already exists")]
    DatabaseAlreadyExists { name: String },

    #[error("database '{name}' does not exist")]
    DatabaseNotFound { name: String },

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("template error: {0}")]
    Template(String),
}

impl TallyDBError {
    pub(crate) fn header_not_found(header: &str) -> Self {
        TallyDBError::HeaderNotFound {
            header: header.to_string(),
        }
    }
}
