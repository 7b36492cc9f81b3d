//! Built-in signature database
//!
//! Byte signatures and filename patterns for common formats, compiled once per process.

mod globs;
mod magic;

pub use globs::name_rules;
pub use magic::{archives, audio_video, byte_rules, documents, executables, fonts, images, scripts};

use crate::domain::services::RuleTable;
use std::sync::{Arc, LazyLock};

static BUILTIN: LazyLock<Arc<RuleTable>> = LazyLock::new(|| {
    let table = RuleTable::new(byte_rules(), name_rules());
    tracing::debug!(
        byte_rules = table.byte_rules().len(),
        name_rules = table.name_rules().len(),
        "built-in rule table compiled"
    );
    Arc::new(table)
});

/// Returns a handle to the process-wide built-in table
pub fn builtin_table() -> Arc<RuleTable> {
    Arc::clone(&BUILTIN)
}
