//! Content classifier service
//!
//! Runs the byte signatures of a [`RuleTable`] against a stream, buffering only as much
//! as the signature under test needs.

use super::rule_table::RuleTable;
use super::unknown_fallback::identify_unknown;
use crate::domain::entities::{ByteRule, FileType};
use crate::io::BufferedSource;
use std::io::Read;

/// Identifies a stream by its leading bytes
#[derive(Debug, Clone, Copy)]
pub struct ContentClassifier<'a> {
    table: &'a RuleTable,
}

impl<'a> ContentClassifier<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Returns the type of the highest-priority signature that matches, or the
    /// text/binary fallback when none does
    pub fn classify<R: Read>(&self, source: &mut BufferedSource<R>) -> FileType {
        match self.find_match(source) {
            Some(rule) => rule.file_type().clone(),
            None => {
                let fallback = identify_unknown(source);
                tracing::debug!(buffered = source.len(), "no signature matched, {fallback}");
                fallback
            }
        }
    }

    /// Returns the first signature, in priority order, that matches the stream
    pub fn find_match<R: Read>(&self, source: &mut BufferedSource<R>) -> Option<&'a ByteRule> {
        let rule = self
            .table
            .byte_rules()
            .iter()
            .find(|rule| rule_matches(rule, source))?;

        tracing::debug!(
            mime = %rule.file_type().mime,
            priority = rule.priority(),
            "signature matched"
        );
        Some(rule)
    }
}

/// Sub-rules are alternatives; each one buffers what it needs before being tried
fn rule_matches<R: Read>(rule: &ByteRule, source: &mut BufferedSource<R>) -> bool {
    rule.sub_rules().iter().any(|sub_rule| {
        source.maybe_buffer(sub_rule.reach());
        sub_rule.matches(source.data())
    })
}
