//! Filename pattern entity
//!
//! A [`NameRule`] maps a glob pattern to a file type. Patterns are always matched against
//! a basename, so `*` never has a directory separator to cross; `**` is accepted for
//! patterns written with path segments in mind.

use super::byte_rule::DEFAULT_PRIORITY;
use super::file_type::FileType;
use crate::error::{IdentifyError, Result};
use globset::{GlobBuilder, GlobMatcher};

/// A compiled filename pattern
#[derive(Debug, Clone)]
pub struct NameRule {
    pattern: String,
    matcher: GlobMatcher,
    priority: u32,
    file_type: FileType,
}

impl NameRule {
    /// Compiles `pattern` and derives the recommended extension from its last segment
    ///
    /// # Errors
    ///
    /// Returns [`IdentifyError::InvalidGlob`] if the pattern is not a valid glob.
    pub fn new(pattern: impl Into<String>, priority: u32, file_type: FileType) -> Result<Self> {
        let pattern = pattern.into();
        let matcher = GlobBuilder::new(&pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| IdentifyError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?
            .compile_matcher();

        let file_type = file_type.with_extension(pattern_extension(&pattern).to_string());

        Ok(Self {
            pattern,
            matcher,
            priority,
            file_type,
        })
    }

    /// Compiles a pattern at the default priority
    pub fn with_default_priority(pattern: impl Into<String>, file_type: FileType) -> Result<Self> {
        Self::new(pattern, DEFAULT_PRIORITY, file_type)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    /// Pattern length in bytes, used to prefer more specific patterns
    pub fn specificity(&self) -> usize {
        self.pattern.len()
    }

    /// Tests a basename against the pattern
    pub fn matches(&self, basename: &str) -> bool {
        self.matcher.is_match(basename)
    }
}

impl PartialEq for NameRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.priority == other.priority
            && self.file_type == other.file_type
    }
}

impl Eq for NameRule {}

/// Returns the trailing extension of a pattern's final segment, including the dot
///
/// `*.tar.gz` gives `.gz`, `go.mod` gives `.mod`, `Makefile` gives an empty string.
pub fn pattern_extension(pattern: &str) -> &str {
    let segment_start = pattern.rfind('/').map_or(0, |i| i + 1);
    let segment = &pattern[segment_start..];
    segment.rfind('.').map_or("", |i| &segment[i..])
}
