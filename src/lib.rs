//! mimeprobe - File type identification
//!
//! Identifies the type of a file or byte stream (description, MIME type, recommended
//! extension, icon) from its leading bytes and its name, using priority-ordered byte
//! signatures and filename patterns in the style of the freedesktop.org shared-mime-info
//! database.
//!
//! ```
//! use mimeprobe::Identifier;
//! use std::io::Cursor;
//!
//! let identifier = Identifier::builtin();
//! let png = identifier.identify(Cursor::new(b"\x89PNG\r\n\x1a\n"));
//! assert_eq!(png.mime, "image/png");
//!
//! let makefile = identifier.identify_with_filename(Cursor::new(b"\x99\x99"), "Makefile");
//! assert_eq!(makefile.mime, "text/plain");
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod io;
pub mod prefix_scan;
pub mod presentation;

pub use application::Identifier;
pub use application::dto::{IdentifyOptions, OutputFormat};
pub use domain::entities::{ByteRule, FileType, NameRule, SubRule};
pub use domain::services::RuleTable;
pub use error::{IdentifyError, Result};
pub use infrastructure::signatures::builtin_table;
pub use io::BufferedSource;
