//! File type entity
//!
//! The value returned by every identification call: a description, a MIME type, the
//! extension a file of this type should carry, and a desktop icon name.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Icon used for `text/*` types that do not declare one
pub const TEXT_ICON: &str = "text-x-generic";
/// Icon used for every other type that does not declare one
pub const BINARY_ICON: &str = "application-x-generic";

/// Information about the type of a file inferred from its content or name
///
/// Two values are the same type only when all four fields are equal. The unknown
/// sentinels rely on this: callers compare against [`FileType::UNKNOWN_BINARY`] and
/// [`FileType::UNKNOWN_TEXT`] by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileType {
    /// Human-readable description, e.g. "PNG image"
    pub description: Cow<'static, str>,
    /// Extension including the leading dot, or empty
    pub recommended_extension: Cow<'static, str>,
    /// Freedesktop icon name
    pub icon: Cow<'static, str>,
    /// MIME type, e.g. "image/png"
    pub mime: Cow<'static, str>,
}

impl FileType {
    /// Returned when nothing matched and the content does not look like text
    pub const UNKNOWN_BINARY: FileType = FileType {
        description: Cow::Borrowed("Unknown"),
        recommended_extension: Cow::Borrowed(".bin"),
        icon: Cow::Borrowed(BINARY_ICON),
        mime: Cow::Borrowed("application/octet-stream"),
    };

    /// Returned when nothing matched and the content looks like text
    pub const UNKNOWN_TEXT: FileType = FileType {
        description: Cow::Borrowed("Unknown"),
        recommended_extension: Cow::Borrowed(".txt"),
        icon: Cow::Borrowed(TEXT_ICON),
        mime: Cow::Borrowed("text/plain"),
    };

    /// Creates a file type with the default icon for its MIME type
    pub fn new(
        description: impl Into<Cow<'static, str>>,
        mime: impl Into<Cow<'static, str>>,
        recommended_extension: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mime = mime.into();
        let icon = default_icon(&mime);
        Self {
            description: description.into(),
            recommended_extension: recommended_extension.into(),
            icon: Cow::Borrowed(icon),
            mime,
        }
    }

    /// Overrides the icon; an empty name keeps the MIME-derived default
    pub fn with_icon(mut self, icon: impl Into<Cow<'static, str>>) -> Self {
        let icon = icon.into();
        if !icon.is_empty() {
            self.icon = icon;
        }
        self
    }

    /// Replaces the recommended extension
    pub fn with_extension(mut self, extension: impl Into<Cow<'static, str>>) -> Self {
        self.recommended_extension = extension.into();
        self
    }

    /// Returns true for either of the unknown sentinels
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN_BINARY || *self == Self::UNKNOWN_TEXT
    }

    /// Returns true if the MIME type is in the `text/` tree
    pub fn is_text(&self) -> bool {
        self.mime.starts_with("text/")
    }
}

/// Returns the icon a type gets when none was declared upstream
pub fn default_icon(mime: &str) -> &'static str {
    if mime.starts_with("text/") {
        TEXT_ICON
    } else {
        BINARY_ICON
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.mime)
    }
}
