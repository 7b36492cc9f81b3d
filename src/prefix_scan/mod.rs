//! Prefix scanner
//!
//! A lighter alternative to the rule engine: a flat list of magic numbers at fixed
//! offsets, checked concurrently against an in-memory prefix. It shares no code or data
//! with the classifiers and never looks at filenames.

mod pool;
mod signatures;

pub use signatures::{PrefixSignature, SIGNATURES};

/// Concurrent matcher over a fixed signature list
#[derive(Debug, Clone)]
pub struct PrefixScanner {
    signatures: Vec<PrefixSignature>,
    workers: usize,
}

impl PrefixScanner {
    pub fn new(signatures: Vec<PrefixSignature>) -> Self {
        Self {
            signatures,
            workers: default_workers(),
        }
    }

    /// Scanner over the built-in list
    pub fn builtin() -> Self {
        Self::new(SIGNATURES.to_vec())
    }

    /// Caps the number of worker threads; zero keeps the default
    pub fn with_workers(mut self, workers: usize) -> Self {
        if workers > 0 {
            self.workers = workers;
        }
        self
    }

    pub fn signatures(&self) -> &[PrefixSignature] {
        &self.signatures
    }

    /// Leading bytes a caller must supply for every signature to be decidable
    pub fn reach(&self) -> usize {
        self.signatures.iter().map(PrefixSignature::reach).max().unwrap_or(0)
    }

    /// Returns a signature matching `data`, or `None` once every worker came up empty
    ///
    /// When several signatures match, the one listed first wins, whatever the worker count.
    pub fn scan(&self, data: &[u8]) -> Option<&PrefixSignature> {
        let found = pool::scan(&self.signatures, data, self.workers);
        tracing::debug!(
            len = data.len(),
            found = found.map(|s| s.description),
            "prefix scan"
        );
        found
    }
}

impl Default for PrefixScanner {
    fn default() -> Self {
        Self::builtin()
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}
