//! Persistence
//!
//! Loading externally compiled rule tables.

mod json_table;

pub use json_table::{load_table, parse_table, read_table};
