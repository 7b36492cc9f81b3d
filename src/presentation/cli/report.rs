//! Result rendering

use crate::domain::entities::FileType;
use serde::Serialize;
use std::path::Path;

/// One identified file, as printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub file: String,
    pub description: String,
    pub mime: String,
    pub extension: String,
    pub icon: String,
}

impl Report {
    pub fn new(path: &Path, file_type: &FileType) -> Self {
        let file = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

        Self {
            file,
            description: file_type.description.to_string(),
            mime: file_type.mime.to_string(),
            extension: file_type.recommended_extension.to_string(),
            icon: file_type.icon.to_string(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "File         {}\nDescription  {}\nMIME         {}\nExtension    {}\nIcon         {}\n",
            self.file, self.description, self.mime, self.extension, self.icon
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block() {
        let report = Report::new(Path::new("/tmp/x/logo.png"), &FileType::new("PNG image", "image/png", ".png"));
        let text = report.to_text();
        assert!(text.starts_with("File         logo.png\n"));
        assert!(text.contains("MIME         image/png\n"));
        assert!(text.contains("Icon         application-x-generic\n"));
    }

    #[test]
    fn test_json_line() {
        let report = Report::new(Path::new("notes"), &FileType::UNKNOWN_TEXT);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["file"], "notes");
        assert_eq!(json["mime"], "text/plain");
        assert_eq!(json["extension"], ".txt");
    }
}
