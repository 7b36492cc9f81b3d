//! Byte signature entities
//!
//! A [`ByteRule`] recognizes file content. It holds one or more alternative
//! [`SubRule`]s; each sub-rule looks for an exact byte pattern at one of several
//! candidate offsets, optionally under a bitmask, and may require one of its children to
//! match as well before it counts as a hit.

use super::file_type::FileType;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Default priority used by signature databases when none is declared
pub const DEFAULT_PRIORITY: u32 = 50;

/// A single byte-pattern check
///
/// Children are evaluated against the same absolute buffer as their parent, never against
/// a window starting at the parent's offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRule {
    bytes: Vec<u8>,
    offsets: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mask: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SubRule>,
}

impl SubRule {
    /// Creates a sub-rule that tries `offsets` in the given order
    ///
    /// `offsets` must not be empty.
    pub fn new(bytes: impl Into<Vec<u8>>, offsets: Vec<usize>) -> Self {
        Self {
            bytes: bytes.into(),
            offsets,
            mask: None,
            children: Vec::new(),
        }
    }

    /// Creates a sub-rule anchored at a single offset
    pub fn at(bytes: impl Into<Vec<u8>>, offset: usize) -> Self {
        Self::new(bytes, vec![offset])
    }

    /// Creates a sub-rule trying every offset of an inclusive range, lowest first
    pub fn range(bytes: impl Into<Vec<u8>>, offsets: RangeInclusive<usize>) -> Self {
        Self::new(bytes, offsets.collect())
    }

    /// Applies a bitmask to both the pattern and the candidate window
    pub fn with_mask(mut self, mask: impl Into<Vec<u8>>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Requires one of `children` to match once this pattern has matched
    pub fn with_children(mut self, children: Vec<SubRule>) -> Self {
        self.children = children;
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn mask(&self) -> Option<&[u8]> {
        self.mask.as_deref()
    }

    pub fn children(&self) -> &[SubRule] {
        &self.children
    }

    /// Number of leading bytes needed to evaluate this sub-rule and all of its children
    /// at every candidate offset
    pub fn reach(&self) -> usize {
        let own = self
            .offsets
            .iter()
            .max()
            .map_or(0, |offset| offset.saturating_add(self.bytes.len()));

        self.children
            .iter()
            .map(SubRule::reach)
            .fold(own, usize::max)
    }

    /// Evaluates this sub-rule against the buffered prefix of a stream
    ///
    /// Offsets are tried in declared order. When the pattern matches at an offset but
    /// none of the children do, evaluation moves on to the next offset.
    pub fn matches(&self, data: &[u8]) -> bool {
        for &offset in &self.offsets {
            let Some(end) = offset.checked_add(self.bytes.len()) else {
                continue;
            };
            let Some(window) = data.get(offset..end) else {
                continue;
            };

            if !self.window_matches(window) {
                continue;
            }

            if self.children.is_empty() {
                return true;
            }

            if self.children.iter().any(|child| child.matches(data)) {
                return true;
            }
        }

        false
    }

    fn window_matches(&self, window: &[u8]) -> bool {
        match &self.mask {
            None => window == self.bytes.as_slice(),
            Some(mask) => window.iter().zip(&self.bytes).enumerate().all(|(i, (&w, &p))| {
                match mask.get(i) {
                    Some(&m) => w & m == p & m,
                    None => w == p,
                }
            }),
        }
    }
}

/// A content signature: fires when any of its sub-rules match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteRule {
    sub_rules: Vec<SubRule>,
    priority: u32,
    file_type: FileType,
}

impl ByteRule {
    /// Creates a rule from its alternatives
    ///
    /// `sub_rules` must not be empty.
    pub fn new(file_type: FileType, priority: u32, sub_rules: Vec<SubRule>) -> Self {
        Self {
            sub_rules,
            priority,
            file_type,
        }
    }

    pub fn sub_rules(&self) -> &[SubRule] {
        &self.sub_rules
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    /// Largest prefix any sub-rule of this signature can inspect
    pub fn reach(&self) -> usize {
        self.sub_rules.iter().map(SubRule::reach).max().unwrap_or(0)
    }
}
