//! Name classifier service
//!
//! Resolves a filename against the pattern rules of a [`RuleTable`]. Content is only
//! read when the name leaves more than one distinct type standing.
//!
//! The cascade, applied to the basename:
//!
//! 1. keep the matches of the highest priority tier that has any
//! 2. no match: classify by content alone
//! 3. a single match: that type, content untouched
//! 4. keep the matches with the longest pattern
//! 5. all of them share one MIME type: the first of them
//! 6. otherwise let content arbitrate, falling back to the first longest match

use super::content_classifier::ContentClassifier;
use super::rule_table::RuleTable;
use crate::domain::entities::{FileType, NameRule};
use crate::io::BufferedSource;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Which step of the cascade produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No pattern matched the name
    ContentOnly,
    /// One pattern in the top priority tier
    SinglePattern,
    /// Several longest patterns, all naming the same MIME type
    SameMime,
    /// Content settled an ambiguous name
    ContentArbitrated,
    /// Content was inconclusive; first longest pattern taken
    FirstLongestPattern,
}

/// Identifies a stream by filename, with content as the tie breaker
#[derive(Debug, Clone, Copy)]
pub struct NameClassifier<'a> {
    table: &'a RuleTable,
    content: ContentClassifier<'a>,
}

impl<'a> NameClassifier<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self {
            table,
            content: ContentClassifier::new(table),
        }
    }

    pub fn classify<R: Read>(&self, filename: &str, source: &mut BufferedSource<R>) -> FileType {
        self.resolve(filename, source).0
    }

    /// Runs the cascade and reports which step decided
    pub fn resolve<R: Read>(
        &self,
        filename: &str,
        source: &mut BufferedSource<R>,
    ) -> (FileType, Resolution) {
        let basename = basename(filename);
        let candidates = self.top_tier_matches(basename);

        let Some(first) = candidates.first() else {
            return (self.content.classify(source), Resolution::ContentOnly);
        };

        if candidates.len() == 1 {
            return (first.file_type().clone(), Resolution::SinglePattern);
        }

        let longest = candidates
            .iter()
            .map(|rule| rule.specificity())
            .max()
            .unwrap_or(0);
        let survivors: Vec<&NameRule> = candidates
            .into_iter()
            .filter(|rule| rule.specificity() == longest)
            .collect();

        // the longest candidate always survives
        let first = survivors[0];

        let mimes: HashSet<&str> = survivors
            .iter()
            .map(|rule| rule.file_type().mime.as_ref())
            .collect();
        if mimes.len() == 1 {
            return (first.file_type().clone(), Resolution::SameMime);
        }

        tracing::debug!(
            basename,
            candidates = survivors.len(),
            "ambiguous name, consulting content"
        );

        let by_content = self.content.classify(source);
        if by_content.is_unknown() {
            (first.file_type().clone(), Resolution::FirstLongestPattern)
        } else {
            (by_content, Resolution::ContentArbitrated)
        }
    }

    /// Matches of the highest priority tier that has any, in table order
    pub fn top_tier_matches(&self, basename: &str) -> Vec<&'a NameRule> {
        let mut top: Option<u32> = None;
        let mut matches = Vec::new();

        for rule in self.table.name_rules() {
            if top.is_some_and(|priority| rule.priority() < priority) {
                // rules are sorted, nothing further can join the tier
                break;
            }
            if rule.matches(basename) {
                top = Some(rule.priority());
                matches.push(rule);
            }
        }

        matches
    }
}

/// Final path component of a filename, or the whole string when it has none
fn basename(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ByteRule, SubRule};
    use std::io::{self, Cursor};

    /// A stream that must never be read
    struct Untouchable;

    impl Read for Untouchable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            panic!("content was consulted");
        }
    }

    fn file_type(mime: &'static str) -> FileType {
        FileType::new(mime, mime, "")
    }

    fn name(pattern: &str, mime: &'static str, priority: u32) -> NameRule {
        NameRule::new(pattern, priority, file_type(mime)).unwrap()
    }

    fn ts_table() -> RuleTable {
        RuleTable::new(
            vec![
                ByteRule::new(
                    file_type("video/mp2t"),
                    50,
                    vec![SubRule::at([0x47], 0).with_children(vec![SubRule::at([0x47], 188)])],
                ),
                ByteRule::new(
                    file_type("text/vnd.trolltech.linguist"),
                    50,
                    vec![SubRule::range(*b"<TS", 0..=256)],
                ),
            ],
            vec![
                name("*.ts", "video/mp2t", 50),
                name("*.ts", "text/vnd.trolltech.linguist", 50),
            ],
        )
    }

    #[test]
    fn test_basename_strips_directories() {
        assert_eq!(basename("/usr/share/doc/README"), "README");
        assert_eq!(basename("src/lib.rs"), "lib.rs");
        assert_eq!(basename("Makefile"), "Makefile");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn test_single_match_never_reads_content() {
        let table = RuleTable::new(Vec::new(), vec![name("Makefile", "text/plain", 50)]);
        let mut source = BufferedSource::new(Untouchable);

        let (found, how) = NameClassifier::new(&table).resolve("build/Makefile", &mut source);
        assert_eq!(found.mime, "text/plain");
        assert_eq!(how, Resolution::SinglePattern);
    }

    #[test]
    fn test_highest_tier_only() {
        let table = RuleTable::new(
            Vec::new(),
            vec![name("*.txt", "text/plain", 50), name("CMakeLists.txt", "text/x-cmake", 60)],
        );
        let classifier = NameClassifier::new(&table);

        assert_eq!(classifier.top_tier_matches("CMakeLists.txt").len(), 1);
        let mut source = BufferedSource::new(Untouchable);
        assert_eq!(classifier.classify("CMakeLists.txt", &mut source).mime, "text/x-cmake");
    }

    #[test]
    fn test_longest_pattern_wins() {
        let table = RuleTable::new(
            Vec::new(),
            vec![
                name("*.gz", "application/gzip", 50),
                name("*.tar.gz", "application/x-compressed-tar", 50),
            ],
        );
        let mut source = BufferedSource::new(Untouchable);
        let (found, how) = NameClassifier::new(&table).resolve("x.tar.gz", &mut source);
        assert_eq!(found.mime, "application/x-compressed-tar");
        assert_eq!(how, Resolution::SameMime);
    }

    #[test]
    fn test_same_mime_returns_first_survivor() {
        let html = |description: &'static str, pattern: &str| {
            NameRule::new(pattern, 50, FileType::new(description, "text/html", ".htm")).unwrap()
        };
        let table = RuleTable::new(
            Vec::new(),
            vec![html("HTML page", "*.htm"), html("HTML fragment", "*.ht?"), html("Any", "*")],
        );
        let classifier = NameClassifier::new(&table);
        assert_eq!(classifier.top_tier_matches("a.htm").len(), 3);

        // two survivors of equal length, one MIME type, content never read
        let mut source = BufferedSource::new(Untouchable);
        let (found, how) = classifier.resolve("a.htm", &mut source);
        assert_eq!(found.description, "HTML page");
        assert_eq!(how, Resolution::SameMime);
    }

    #[test]
    fn test_content_arbitrates_ambiguous_names() {
        let table = ts_table();
        let classifier = NameClassifier::new(&table);

        let mut source = BufferedSource::new(Cursor::new(b"<?xml?>\n<TS version=\"2.1\">".to_vec()));
        let (found, how) = classifier.resolve("app_de.ts", &mut source);
        assert_eq!(found.mime, "text/vnd.trolltech.linguist");
        assert_eq!(how, Resolution::ContentArbitrated);

        let mut stream = vec![0u8; 376];
        stream[0] = 0x47;
        stream[188] = 0x47;
        let mut source = BufferedSource::new(Cursor::new(stream));
        assert_eq!(classifier.classify("clip.ts", &mut source).mime, "video/mp2t");
    }

    #[test]
    fn test_inconclusive_content_takes_first_pattern() {
        let table = ts_table();
        let mut source = BufferedSource::new(Cursor::new(b"export const x = 1;".to_vec()));
        let (found, how) = NameClassifier::new(&table).resolve("index.ts", &mut source);
        assert_eq!(found.mime, "video/mp2t");
        assert_eq!(how, Resolution::FirstLongestPattern);
    }

    #[test]
    fn test_no_name_match_uses_content() {
        let table = ts_table();
        let mut source = BufferedSource::new(Cursor::new(b"<TS>".to_vec()));
        let (found, how) = NameClassifier::new(&table).resolve("strings.xml", &mut source);
        assert_eq!(found.mime, "text/vnd.trolltech.linguist");
        assert_eq!(how, Resolution::ContentOnly);
    }
}
