pub mod header;
pub mod row;
pub mod rows;
pub mod value;
pub mod value_type;
