//! Data Transfer Objects

mod identify_options;

pub use identify_options::{IdentifyOptions, OutputFormat};
