//! Presentation layer
//!
//! Command line parsing and output formatting.

pub mod cli;
