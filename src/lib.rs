//! In-memory tables of typed headers and key-addressed rows.
//!
//! A [`Database`] owns one header set, exactly one of which is the key
//! header, and the rows stored against it. All schema and row changes go
//! through the `Database`, which keeps rows consistent with the headers and
//! key values unique. [`DatabaseManager`] maps table names to tables.

pub mod database;
pub mod error;
pub mod manager;
pub mod query;
pub mod result;
pub mod table;
pub mod template;

#[cfg(test)]
mod tests;

pub use database::Database;
pub use error::TallyDBError;
pub use manager::DatabaseManager;
pub use query::filter::Filter;
pub use query::op::{NumberOp, Op};
pub use result::Result;
pub use table::header::Header;
pub use table::row::Row;
pub use table::rows::Rows;
pub use table::value::Value;
pub use table::value_type::ValueType;
pub use template::TableTemplate;
