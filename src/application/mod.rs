//! Application layer
//!
//! Use cases that orchestrate the identification services.

pub mod dto;
mod identify_file;

pub use identify_file::Identifier;
