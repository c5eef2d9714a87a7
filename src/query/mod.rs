pub mod filter;
pub mod op;
