//! Infrastructure layer
//!
//! Where rule tables come from: the built-in database and external JSON files.

pub mod persistence;
pub mod signatures;
