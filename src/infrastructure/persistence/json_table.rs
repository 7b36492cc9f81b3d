//! JSON rule table loader
//!
//! Reads a rule table produced by an external database compiler. Typed values are
//! expected to be resolved already: every pattern and mask is a plain byte array.
//!
//! ```json
//! {
//!   "byte_rules": [{
//!     "priority": 60,
//!     "file_type": { "description": "Ogg Vorbis audio", "mime": "audio/x-vorbis+ogg" },
//!     "sub_rules": [{ "bytes": [79, 103, 103, 83], "offsets": [0],
//!                     "children": [{ "bytes": [1, 118, 111, 114, 98, 105, 115], "offsets": [28] }] }]
//!   }],
//!   "name_rules": [{ "pattern": "*.oga", "file_type": { "description": "Ogg audio", "mime": "audio/ogg" } }]
//! }
//! ```
//!
//! Priorities default to 50. A missing icon falls back to the MIME-derived default.

use crate::domain::entities::{ByteRule, DEFAULT_PRIORITY, FileType, NameRule, SubRule};
use crate::domain::services::RuleTable;
use crate::error::{IdentifyError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableRecord {
    #[serde(default)]
    byte_rules: Vec<ByteRuleRecord>,
    #[serde(default)]
    name_rules: Vec<NameRuleRecord>,
}

#[derive(Debug, Deserialize)]
struct ByteRuleRecord {
    #[serde(default = "default_priority")]
    priority: u32,
    file_type: FileTypeRecord,
    sub_rules: Vec<SubRule>,
}

#[derive(Debug, Deserialize)]
struct NameRuleRecord {
    pattern: String,
    #[serde(default = "default_priority")]
    priority: u32,
    file_type: FileTypeRecord,
}

#[derive(Debug, Deserialize)]
struct FileTypeRecord {
    description: String,
    mime: String,
    #[serde(default)]
    recommended_extension: String,
    #[serde(default)]
    icon: String,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

impl From<FileTypeRecord> for FileType {
    fn from(record: FileTypeRecord) -> Self {
        FileType::new(record.description, record.mime, record.recommended_extension)
            .with_icon(record.icon)
    }
}

/// Loads a rule table from a JSON file
///
/// # Errors
///
/// [`IdentifyError::Io`] if the file cannot be read, otherwise any error of
/// [`read_table`].
pub fn load_table(path: impl AsRef<Path>) -> Result<RuleTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IdentifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        byte_rules = table.byte_rules().len(),
        name_rules = table.name_rules().len(),
        "rule table loaded"
    );
    Ok(table)
}

/// Parses a rule table from a JSON string
pub fn parse_table(json: &str) -> Result<RuleTable> {
    read_table(json.as_bytes())
}

/// Parses and validates a rule table from any reader
///
/// # Errors
///
/// - [`IdentifyError::InvalidTable`] for malformed JSON or a wrong document shape
/// - [`IdentifyError::EmptyRule`] for a signature without sub-rules
/// - [`IdentifyError::EmptyOffsets`] for a sub-rule, at any depth, without offsets
/// - [`IdentifyError::OffsetOverflow`] for an offset whose window end overflows `usize`
/// - [`IdentifyError::InvalidGlob`] for a pattern that does not compile
pub fn read_table<R: Read>(reader: R) -> Result<RuleTable> {
    let record: TableRecord = serde_json::from_reader(reader)?;

    let byte_rules = record
        .byte_rules
        .into_iter()
        .map(byte_rule)
        .collect::<Result<Vec<_>>>()?;

    let name_rules = record
        .name_rules
        .into_iter()
        .map(|rule| NameRule::new(rule.pattern, rule.priority, rule.file_type.into()))
        .collect::<Result<Vec<_>>>()?;

    Ok(RuleTable::new(byte_rules, name_rules))
}

fn byte_rule(record: ByteRuleRecord) -> Result<ByteRule> {
    if record.sub_rules.is_empty() {
        return Err(IdentifyError::EmptyRule {
            mime: record.file_type.mime,
        });
    }

    if record.sub_rules.iter().any(has_empty_offsets) {
        return Err(IdentifyError::EmptyOffsets {
            mime: record.file_type.mime,
        });
    }

    if let Some(offset) = record.sub_rules.iter().find_map(overflowing_offset) {
        return Err(IdentifyError::OffsetOverflow {
            mime: record.file_type.mime,
            offset,
        });
    }

    Ok(ByteRule::new(record.file_type.into(), record.priority, record.sub_rules))
}

fn has_empty_offsets(sub_rule: &SubRule) -> bool {
    sub_rule.offsets().is_empty() || sub_rule.children().iter().any(has_empty_offsets)
}

fn overflowing_offset(sub_rule: &SubRule) -> Option<usize> {
    let len = sub_rule.bytes().len();
    sub_rule
        .offsets()
        .iter()
        .copied()
        .find(|offset| offset.checked_add(len).is_none())
        .or_else(|| sub_rule.children().iter().find_map(overflowing_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OGG_TABLE: &str = r#"{
        "byte_rules": [
            {
                "file_type": { "description": "Ogg multimedia file", "mime": "application/ogg" },
                "priority": 40,
                "sub_rules": [{ "bytes": [79, 103, 103, 83], "offsets": [0] }]
            },
            {
                "file_type": { "description": "Ogg Vorbis audio", "mime": "audio/x-vorbis+ogg",
                               "recommended_extension": ".oga", "icon": "audio-x-generic" },
                "priority": 60,
                "sub_rules": [{
                    "bytes": [79, 103, 103, 83], "offsets": [0],
                    "children": [{ "bytes": [1, 118, 111, 114, 98, 105, 115], "offsets": [28] }]
                }]
            }
        ],
        "name_rules": [
            { "pattern": "*.oga", "file_type": { "description": "Ogg audio", "mime": "audio/ogg" } }
        ]
    }"#;

    #[test]
    fn test_parse_table() {
        let table = parse_table(OGG_TABLE).unwrap();

        let first = &table.byte_rules()[0];
        assert_eq!(first.priority(), 60);
        assert_eq!(first.file_type().icon, "audio-x-generic");
        assert_eq!(first.file_type().recommended_extension, ".oga");
        assert_eq!(first.sub_rules()[0].children()[0].offsets(), &[28]);

        let second = &table.byte_rules()[1];
        assert_eq!(second.file_type().icon, "application-x-generic");
        assert_eq!(second.file_type().recommended_extension, "");

        let name = &table.name_rules()[0];
        assert_eq!(name.priority(), DEFAULT_PRIORITY);
        assert_eq!(name.file_type().recommended_extension, ".oga");
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_table("{}").unwrap().is_empty());
    }

    #[test]
    fn test_rule_without_sub_rules() {
        let json = r#"{ "byte_rules": [
            { "file_type": { "description": "x", "mime": "x/empty" }, "sub_rules": [] }
        ] }"#;
        let err = parse_table(json).unwrap_err();
        assert!(matches!(err, IdentifyError::EmptyRule { ref mime } if mime == "x/empty"));
    }

    #[test]
    fn test_nested_sub_rule_without_offsets() {
        let json = r#"{ "byte_rules": [
            { "file_type": { "description": "x", "mime": "x/nested" },
              "sub_rules": [{ "bytes": [1], "offsets": [0],
                              "children": [{ "bytes": [2], "offsets": [] }] }] }
        ] }"#;
        let err = parse_table(json).unwrap_err();
        assert!(matches!(err, IdentifyError::EmptyOffsets { ref mime } if mime == "x/nested"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_table(r#"{ "byte_rules": [ { "priority": "high" } ] }"#).unwrap_err();
        assert!(matches!(err, IdentifyError::InvalidTable(_)));

        let err = parse_table(r#"{ "signatures": [] }"#).unwrap_err();
        assert!(matches!(err, IdentifyError::InvalidTable(_)));
    }

    #[test]
    fn test_invalid_glob() {
        let json = r#"{ "name_rules": [
            { "pattern": "*.[", "file_type": { "description": "x", "mime": "x/glob" } }
        ] }"#;
        let err = parse_table(json).unwrap_err();
        assert!(matches!(err, IdentifyError::InvalidGlob { ref pattern, .. } if pattern == "*.["));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_offset_overflow_is_rejected() {
        let json = r#"{ "byte_rules": [
            { "file_type": { "description": "x", "mime": "x/far" },
              "sub_rules": [{ "bytes": [1], "offsets": [0],
                              "children": [{ "bytes": [2, 3], "offsets": [18446744073709551615] }] }] }
        ] }"#;
        let err = parse_table(json).unwrap_err();
        assert!(matches!(err, IdentifyError::OffsetOverflow { ref mime, offset }
            if mime == "x/far" && offset == usize::MAX));
    }
}
