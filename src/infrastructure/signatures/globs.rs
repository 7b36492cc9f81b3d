//! Built-in filename patterns

use crate::domain::entities::{DEFAULT_PRIORITY, FileType, NameRule};

struct Glob {
    pattern: &'static str,
    priority: u32,
    description: &'static str,
    mime: &'static str,
}

const fn glob(pattern: &'static str, description: &'static str, mime: &'static str) -> Glob {
    weighted(pattern, DEFAULT_PRIORITY, description, mime)
}

const fn weighted(
    pattern: &'static str,
    priority: u32,
    description: &'static str,
    mime: &'static str,
) -> Glob {
    Glob {
        pattern,
        priority,
        description,
        mime,
    }
}

// Patterns shared by several types appear once per type. The order among them is the
// answer when content cannot settle the question.
const GLOBS: &[Glob] = &[
    // text
    glob("*.txt", "plain text document", "text/plain"),
    glob("*.csv", "CSV document", "text/csv"),
    glob("*.md", "Markdown document", "text/markdown"),
    glob("*.markdown", "Markdown document", "text/markdown"),
    glob("*.html", "HTML document", "text/html"),
    glob("*.htm", "HTML document", "text/html"),
    glob("*.css", "CSS stylesheet", "text/css"),
    glob("*.js", "JavaScript program", "text/javascript"),
    glob("*.mjs", "JavaScript program", "text/javascript"),
    glob("*.json", "JSON document", "application/json"),
    glob("*.xml", "XML document", "application/xml"),
    glob("*.yaml", "YAML document", "application/yaml"),
    glob("*.yml", "YAML document", "application/yaml"),
    glob("*.toml", "TOML document", "application/toml"),
    weighted("README*", 10, "README document", "text/x-readme"),
    // source code and build files
    glob("*.sh", "shell script", "application/x-shellscript"),
    glob("*.bash", "shell script", "application/x-shellscript"),
    glob("*.py", "Python script", "text/x-python"),
    glob("*.rs", "Rust source code", "text/rust"),
    glob("*.c", "C source code", "text/x-csrc"),
    glob("*.h", "C header", "text/x-chdr"),
    glob("*.go", "Go source code", "text/x-go"),
    glob("go.mod", "Go modules configuration file", "text/x-go"),
    glob("go.sum", "Go modules checksum file", "text/x-go"),
    glob("Makefile", "Makefile", "text/plain"),
    glob("makefile", "Makefile", "text/x-makefile"),
    glob("GNUmakefile", "Makefile", "text/x-makefile"),
    glob("*.mk", "Makefile", "text/x-makefile"),
    weighted("CMakeLists.txt", 60, "CMake source code", "text/x-cmake"),
    glob("*.cmake", "CMake source code", "text/x-cmake"),
    glob("*.ts", "MPEG transport stream", "video/mp2t"),
    glob("*.ts", "Qt translation file", "text/vnd.trolltech.linguist"),
    // images
    glob("*.png", "PNG image", "image/png"),
    glob("*.jpg", "JPEG image", "image/jpeg"),
    glob("*.jpeg", "JPEG image", "image/jpeg"),
    glob("*.jpe", "JPEG image", "image/jpeg"),
    glob("*.gif", "GIF image", "image/gif"),
    glob("*.webp", "WebP image", "image/webp"),
    glob("*.svg", "SVG image", "image/svg+xml"),
    glob("*.ico", "Windows icon", "image/vnd.microsoft.icon"),
    glob("*.bmp", "Windows BMP image", "image/bmp"),
    glob("*.tif", "TIFF image", "image/tiff"),
    glob("*.tiff", "TIFF image", "image/tiff"),
    glob("*.psd", "Photoshop image", "image/vnd.adobe.photoshop"),
    glob("*.jp2", "JPEG-2000 JP2 image", "image/jp2"),
    // audio and video
    glob("*.mp3", "MP3 audio", "audio/mpeg"),
    glob("*.wav", "WAV audio", "audio/vnd.wave"),
    glob("*.flac", "FLAC audio", "audio/flac"),
    glob("*.ogg", "Ogg audio", "audio/ogg"),
    glob("*.ogg", "Ogg Vorbis audio", "audio/x-vorbis+ogg"),
    glob("*.oga", "Ogg audio", "audio/ogg"),
    glob("*.ogx", "Ogg multimedia file", "application/ogg"),
    glob("*.mp4", "MPEG-4 video", "video/mp4"),
    glob("*.m4v", "MPEG-4 video", "video/mp4"),
    glob("*.avi", "AVI video", "video/vnd.avi"),
    glob("*.mkv", "Matroska video", "video/x-matroska"),
    glob("*.webm", "WebM video", "video/webm"),
    // archives and packages
    glob("*.zip", "Zip archive", "application/zip"),
    glob("*.epub", "EPUB document", "application/epub+zip"),
    glob("*.tar", "Tar archive", "application/x-tar"),
    glob("*.gz", "Gzip archive", "application/gzip"),
    glob("*.tar.gz", "Tar archive (gzip-compressed)", "application/x-compressed-tar"),
    glob("*.tgz", "Tar archive (gzip-compressed)", "application/x-compressed-tar"),
    glob("*.bz2", "Bzip2 archive", "application/x-bzip2"),
    glob("*.tar.bz2", "Tar archive (bzip-compressed)", "application/x-bzip-compressed-tar"),
    glob("*.xz", "XZ archive", "application/x-xz"),
    glob("*.tar.xz", "Tar archive (XZ-compressed)", "application/x-xz-compressed-tar"),
    glob("*.zst", "Zstandard archive", "application/zstd"),
    glob("*.Z", "LZW-compressed file", "application/x-compress"),
    glob("*.7z", "7-zip archive", "application/x-7z-compressed"),
    glob("*.rar", "RAR archive", "application/vnd.rar"),
    glob("*.a", "AR archive", "application/x-archive"),
    glob("*.cpio", "CPIO archive", "application/x-cpio"),
    glob("*.deb", "Debian package", "application/vnd.debian.binary-package"),
    glob("*.rpm", "RPM package", "application/x-rpm"),
    glob("*.dmg", "Apple disk image", "application/x-apple-diskimage"),
    glob("*.iso", "raw CD image", "application/vnd.efi.iso"),
    // documents
    glob("*.pdf", "PDF document", "application/pdf"),
    glob("*.ps", "PostScript document", "application/postscript"),
    glob("*.rtf", "RTF document", "application/rtf"),
    glob("*.doc", "Word document", "application/msword"),
    glob(
        "*.docx",
        "Word 2007 document",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    glob("*.xls", "Excel spreadsheet", "application/vnd.ms-excel"),
    glob(
        "*.xlsx",
        "Excel 2007 spreadsheet",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    glob("*.ppt", "PowerPoint presentation", "application/vnd.ms-powerpoint"),
    glob(
        "*.pptx",
        "PowerPoint 2007 presentation",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    glob("*.crt", "X.509 certificate", "application/pkix-cert"),
    glob("*.cer", "X.509 certificate", "application/pkix-cert"),
    glob("*.sqlite", "SQLite3 database", "application/vnd.sqlite3"),
    glob("*.sqlite3", "SQLite3 database", "application/vnd.sqlite3"),
    glob("*.mo", "translated messages (machine-readable)", "application/x-gettext-translation"),
    glob("*.gmo", "translated messages (machine-readable)", "application/x-gettext-translation"),
    // executables
    glob("*.exe", "DOS/Windows executable", "application/x-msdownload"),
    // fonts
    glob("*.ttf", "TrueType font", "font/ttf"),
    glob(
        "*.otf",
        "ODF formula template",
        "application/vnd.oasis.opendocument.formula-template",
    ),
    glob("*.otf", "OpenType font", "font/otf"),
    glob("*.woff", "WOFF font", "font/woff"),
    glob("*.woff2", "WOFF2 font", "font/woff2"),
];

/// Returns every built-in filename pattern
///
/// A pattern that fails to compile is logged and left out.
pub fn name_rules() -> Vec<NameRule> {
    GLOBS
        .iter()
        .filter_map(|glob| {
            let file_type = FileType::new(glob.description, glob.mime, "");
            match NameRule::new(glob.pattern, glob.priority, file_type) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!("skipping built-in pattern: {e}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(name_rules().len(), GLOBS.len());
    }

    #[test]
    fn test_makefile_has_no_extension() {
        let rules = name_rules();
        let makefile = rules.iter().find(|rule| rule.pattern() == "Makefile").unwrap();
        assert_eq!(makefile.file_type().recommended_extension, "");
        assert_eq!(makefile.file_type().mime, "text/plain");
        assert_eq!(makefile.file_type().icon, "text-x-generic");
    }
}
