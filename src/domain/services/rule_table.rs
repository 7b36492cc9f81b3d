//! Compiled rule table
//!
//! Holds the byte signatures and filename patterns identification runs against. A table
//! is built once, sorted by descending priority, and then only read, so one instance can
//! be shared by reference across threads.

use crate::domain::entities::{ByteRule, NameRule};

/// Immutable, priority-sorted rule sets
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    byte_rules: Vec<ByteRule>,
    name_rules: Vec<NameRule>,
}

impl RuleTable {
    /// Builds a table, ordering both rule sets by descending priority
    ///
    /// Rules of equal priority keep the order they were given in.
    pub fn new(mut byte_rules: Vec<ByteRule>, mut name_rules: Vec<NameRule>) -> Self {
        byte_rules.sort_by(|a, b| b.priority().cmp(&a.priority()));
        name_rules.sort_by(|a, b| b.priority().cmp(&a.priority()));

        Self {
            byte_rules,
            name_rules,
        }
    }

    /// Appends another table's rules after this one's and re-sorts
    ///
    /// On equal priority, rules from `self` stay ahead of rules from `other`.
    pub fn merged(self, other: RuleTable) -> Self {
        let mut byte_rules = self.byte_rules;
        let mut name_rules = self.name_rules;
        byte_rules.extend(other.byte_rules);
        name_rules.extend(other.name_rules);
        Self::new(byte_rules, name_rules)
    }

    pub fn byte_rules(&self) -> &[ByteRule] {
        &self.byte_rules
    }

    pub fn name_rules(&self) -> &[NameRule] {
        &self.name_rules
    }

    /// Largest stream prefix any byte signature can inspect
    pub fn max_reach(&self) -> usize {
        self.byte_rules.iter().map(ByteRule::reach).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.byte_rules.is_empty() && self.name_rules.is_empty()
    }
}
