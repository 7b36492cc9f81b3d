//! Domain entities
//!
//! The values identification works with: the returned [`FileType`] and the two kinds of
//! rules a [`RuleTable`](crate::domain::services::RuleTable) is built from.

mod byte_rule;
mod file_type;
mod name_rule;
pub mod value;

pub use byte_rule::{ByteRule, DEFAULT_PRIORITY, SubRule};
pub use file_type::{BINARY_ICON, FileType, TEXT_ICON, default_icon};
pub use name_rule::{NameRule, pattern_extension};
