pub mod alter_tests;
pub mod create_tests;

use crate::{
    database::Database,
    error::TallyDBError,
    query::op::NumberOp,
    table::{header::Header, row::Row, value_type::ValueType},
};

fn title_hours() -> Vec<Header> {
    vec![
        Header::key("Title", ValueType::String),
        Header::number("Hours"),
    ]
}

fn keys(rows: &[&Row]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.get_key_value())
        .map(str::to_string)
        .collect()
}
