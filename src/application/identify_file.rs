//! Identify file use case
//!
//! Entry point for callers: wraps a shared rule table and runs the name cascade or the
//! content classifier over streams, single paths, or batches of paths.

use crate::application::dto::IdentifyOptions;
use crate::domain::entities::FileType;
use crate::domain::services::{ContentClassifier, NameClassifier, RuleTable};
use crate::error::{IdentifyError, Result};
use crate::infrastructure::signatures::builtin_table;
use crate::io::BufferedSource;
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Identify file use case
///
/// Cheap to clone; every clone shares the same table.
#[derive(Debug, Clone)]
pub struct Identifier {
    table: Arc<RuleTable>,
    use_filename: bool,
    threads: Option<usize>,
}

impl Identifier {
    /// Creates an identifier over the given table
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self {
            table,
            use_filename: true,
            threads: None,
        }
    }

    /// Creates an identifier over the built-in table
    pub fn builtin() -> Self {
        Self::new(builtin_table())
    }

    /// Creates an identifier configured from `options`
    ///
    /// `options.rules` is not read here; load the table first and pass it in.
    pub fn with_options(table: Arc<RuleTable>, options: &IdentifyOptions) -> Self {
        Self {
            table,
            use_filename: options.use_filename,
            threads: Some(options.threads),
        }
    }

    /// Ignores filenames in [`identify_path`](Self::identify_path) and
    /// [`identify_paths`](Self::identify_paths)
    pub fn content_only(mut self) -> Self {
        self.use_filename = false;
        self
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Identifies a stream by content alone
    ///
    /// Reads at most the largest signature reach; the stream is not closed or rewound.
    pub fn identify<R: Read>(&self, reader: R) -> FileType {
        let mut source = BufferedSource::new(reader);
        ContentClassifier::new(&self.table).classify(&mut source)
    }

    /// Identifies a stream by filename, reading content only when the name is ambiguous
    pub fn identify_with_filename<R: Read>(&self, reader: R, filename: &str) -> FileType {
        let mut source = BufferedSource::new(reader);
        NameClassifier::new(&self.table).classify(filename, &mut source)
    }

    /// Opens and identifies a file
    ///
    /// # Errors
    ///
    /// Returns [`IdentifyError::Io`] if the file cannot be opened.
    pub fn identify_path(&self, path: impl AsRef<Path>) -> Result<FileType> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IdentifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file_type = match path.file_name() {
            Some(name) if self.use_filename => {
                self.identify_with_filename(file, &name.to_string_lossy())
            }
            _ => self.identify(file),
        };

        tracing::debug!(path = %path.display(), mime = %file_type.mime, "identified");
        Ok(file_type)
    }

    /// Identifies many files in parallel
    ///
    /// Results come back in input order, one per path.
    pub fn identify_paths<P>(&self, paths: &[P]) -> Vec<Result<FileType>>
    where
        P: AsRef<Path> + Sync,
    {
        let run = || {
            paths
                .par_iter()
                .map(|path| self.identify_path(path))
                .collect()
        };

        let Some(threads) = self.threads else {
            return run();
        };

        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                tracing::warn!("cannot build a {threads}-thread pool, using the global one: {e}");
                run()
            }
        }
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::builtin()
    }
}
