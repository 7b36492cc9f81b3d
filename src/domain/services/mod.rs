//! Domain services
//!
//! The identification engine: the rule table and the classifiers that run it.

mod content_classifier;
mod name_classifier;
mod rule_table;
pub mod unknown_fallback;

pub use content_classifier::ContentClassifier;
pub use name_classifier::{NameClassifier, Resolution};
pub use rule_table::RuleTable;
pub use unknown_fallback::identify_unknown;
