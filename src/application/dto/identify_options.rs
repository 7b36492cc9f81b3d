//! Identify options DTO

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How results are rendered by the command line front end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labelled block per file
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Options for identifying files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyOptions {
    /// Consult the filename before content
    pub use_filename: bool,
    /// External rule table replacing the built-in one
    pub rules: Option<PathBuf>,
    /// Worker threads for multi-file runs
    pub threads: usize,
    pub format: OutputFormat,
}

impl Default for IdentifyOptions {
    fn default() -> Self {
        Self {
            use_filename: true,
            rules: None,
            threads: available_threads(),
            format: OutputFormat::Text,
        }
    }
}

impl IdentifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifies by content only
    pub fn content_only(mut self) -> Self {
        self.use_filename = false;
        self
    }

    /// Loads rules from a JSON table instead of the built-in set
    pub fn with_rules(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules = Some(path.into());
        self
    }

    /// Sets the thread count; zero keeps the default
    pub fn with_threads(mut self, threads: usize) -> Self {
        if threads > 0 {
            self.threads = threads;
        }
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}
