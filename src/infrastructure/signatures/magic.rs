//! Built-in byte signatures
//!
//! Grouped by family. Priorities follow the shared-mime-info database: 50 unless a more
//! specific signature has to beat a generic one sharing its prefix.

use crate::domain::entities::value::{big16, big32, byte, host16, little16, little32, string};
use crate::domain::entities::{ByteRule, DEFAULT_PRIORITY, FileType, SubRule};

const OLE_HEADER: &[u8] = b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1";
const EBML_HEADER: u32 = 0x1a45_dfa3;

fn signature(
    description: &'static str,
    mime: &'static str,
    extension: &'static str,
    priority: u32,
    sub_rules: Vec<SubRule>,
) -> ByteRule {
    ByteRule::new(FileType::new(description, mime, extension), priority, sub_rules)
}

/// RIFF container whose form type sits at offset 8
fn riff(form: &str) -> SubRule {
    SubRule::at(string("RIFF"), 0).with_children(vec![SubRule::at(string(form), 8)])
}

/// EBML container whose DocType appears somewhere in the header
fn ebml(doc_type: &str) -> SubRule {
    SubRule::at(big32(EBML_HEADER), 0).with_children(vec![SubRule::range(string(doc_type), 5..=65)])
}

/// Returns every built-in byte signature
pub fn byte_rules() -> Vec<ByteRule> {
    let mut rules = images();
    rules.extend(audio_video());
    rules.extend(archives());
    rules.extend(documents());
    rules.extend(executables());
    rules.extend(fonts());
    rules.extend(scripts());
    rules
}

pub fn images() -> Vec<ByteRule> {
    vec![
        signature(
            "PNG image",
            "image/png",
            ".png",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\x89PNG\r\n\x1a\n", 0)],
        ),
        signature(
            "JPEG image",
            "image/jpeg",
            ".jpg",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\xff\xd8\xff", 0)],
        ),
        signature(
            "GIF image",
            "image/gif",
            ".gif",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("GIF8"), 0)],
        ),
        signature("WebP image", "image/webp", ".webp", DEFAULT_PRIORITY, vec![riff("WEBP")]),
        signature(
            "Windows BMP image",
            "image/bmp",
            ".bmp",
            DEFAULT_PRIORITY,
            // DIB header size tells the known BMP variants apart
            vec![SubRule::at(string("BM"), 0).with_children(vec![
                SubRule::at(byte(12), 14),
                SubRule::at(byte(64), 14),
                SubRule::at(byte(40), 14),
            ])],
        ),
        signature(
            "TIFF image",
            "image/tiff",
            ".tif",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(*b"MM\x00\x2a", 0),
                SubRule::at(*b"II\x2a\x00", 0),
            ],
        ),
        signature(
            "Windows icon",
            "image/vnd.microsoft.icon",
            ".ico",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\x00\x00\x01\x00", 0).with_children(vec![SubRule::at(byte(0), 5)])],
        ),
        signature(
            "Photoshop image",
            "image/vnd.adobe.photoshop",
            ".psd",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(*b"8BPS  \x00\x00\x00\x00", 0)
                    .with_mask(*b"\xff\xff\xff\xff\x00\x00\xff\xff\xff\xff"),
            ],
        ),
        signature(
            "JPEG-2000 JP2 image",
            "image/jp2",
            ".jp2",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"jP  \r\n\x87\n", 4).with_children(vec![SubRule::at(string("jp2 "), 20)])],
        ),
        signature(
            "SVG image",
            "image/svg+xml",
            ".svg",
            80,
            vec![
                SubRule::range(string("<!DOCTYPE svg"), 0..=256),
                SubRule::range(string("<svg"), 0..=256),
            ],
        ),
    ]
}

pub fn audio_video() -> Vec<ByteRule> {
    vec![
        signature("WAV audio", "audio/vnd.wave", ".wav", DEFAULT_PRIORITY, vec![riff("WAVE")]),
        signature("AVI video", "video/vnd.avi", ".avi", DEFAULT_PRIORITY, vec![riff("AVI ")]),
        signature(
            "FLAC audio",
            "audio/flac",
            ".flac",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("fLaC"), 0)],
        ),
        signature(
            "Ogg Vorbis audio",
            "audio/x-vorbis+ogg",
            ".oga",
            60,
            vec![SubRule::at(string("OggS"), 0).with_children(vec![SubRule::at(*b"\x01vorbis", 28)])],
        ),
        signature(
            "Ogg multimedia file",
            "application/ogg",
            ".ogx",
            40,
            vec![SubRule::at(string("OggS"), 0)],
        ),
        signature(
            "MP3 audio",
            "audio/mpeg",
            ".mp3",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("ID3"), 0)],
        ),
        signature(
            "MP3 audio",
            "audio/mpeg",
            ".mp3",
            20,
            // bare MPEG frame sync
            vec![SubRule::at(big16(0xffe0), 0).with_mask(big16(0xffe0))],
        ),
        signature(
            "MPEG-4 video",
            "video/mp4",
            ".mp4",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(string("ftypisom"), 4),
                SubRule::at(string("ftypmp42"), 4),
                SubRule::at(string("ftypmp41"), 4),
            ],
        ),
        signature("WebM video", "video/webm", ".webm", DEFAULT_PRIORITY, vec![ebml("webm")]),
        signature(
            "Matroska video",
            "video/x-matroska",
            ".mkv",
            DEFAULT_PRIORITY,
            vec![ebml("matroska")],
        ),
        signature(
            "MPEG transport stream",
            "video/mp2t",
            ".ts",
            10,
            // sync byte repeated one packet later
            vec![SubRule::at(byte(0x47), 0).with_children(vec![SubRule::at(byte(0x47), 188)])],
        ),
    ]
}

pub fn archives() -> Vec<ByteRule> {
    vec![
        signature(
            "EPUB document",
            "application/epub+zip",
            ".epub",
            60,
            vec![SubRule::at(*b"PK\x03\x04", 0)
                .with_children(vec![SubRule::at(string("mimetypeapplication/epub+zip"), 30)])],
        ),
        signature(
            "Zip archive",
            "application/zip",
            ".zip",
            40,
            vec![SubRule::at(*b"PK\x03\x04", 0)],
        ),
        signature(
            "Gzip archive",
            "application/gzip",
            ".gz",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\x1f\x8b", 0)],
        ),
        signature(
            "Bzip2 archive",
            "application/x-bzip2",
            ".bz2",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("BZh"), 0)],
        ),
        signature(
            "RAR archive",
            "application/vnd.rar",
            ".rar",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("Rar!"), 0)],
        ),
        signature(
            "7-zip archive",
            "application/x-7z-compressed",
            ".7z",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"7z\xbc\xaf\x27\x1c", 0)],
        ),
        signature(
            "XZ archive",
            "application/x-xz",
            ".xz",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\xfd7zXZ\x00", 0)],
        ),
        signature(
            "Zstandard archive",
            "application/zstd",
            ".zst",
            DEFAULT_PRIORITY,
            vec![SubRule::at(little32(0xfd2f_b528), 0)],
        ),
        signature(
            "LZW-compressed file",
            "application/x-compress",
            ".Z",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\x1f\x9d", 0)],
        ),
        signature(
            "Tar archive",
            "application/x-tar",
            ".tar",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(*b"ustar\x00", 257),
                SubRule::at(*b"ustar  \x00", 257),
            ],
        ),
        signature(
            "Debian package",
            "application/vnd.debian.binary-package",
            ".deb",
            60,
            vec![SubRule::at(string("!<arch>\ndebian-binary"), 0)],
        ),
        signature(
            "AR archive",
            "application/x-archive",
            ".a",
            45,
            vec![SubRule::at(string("!<arch>"), 0)],
        ),
        signature(
            "RPM package",
            "application/x-rpm",
            ".rpm",
            DEFAULT_PRIORITY,
            vec![SubRule::at(big32(0xedab_eedb), 0)],
        ),
        signature(
            "CPIO archive",
            "application/x-cpio",
            ".cpio",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(host16(0o070707), 0),
                SubRule::at(host16(0o143561), 0),
                SubRule::at(string("070707"), 0),
                SubRule::at(string("070701"), 0),
                SubRule::at(string("070702"), 0),
            ],
        ),
    ]
}

pub fn documents() -> Vec<ByteRule> {
    vec![
        signature(
            "PDF document",
            "application/pdf",
            ".pdf",
            DEFAULT_PRIORITY,
            vec![SubRule::range(string("%PDF-"), 0..=1024)],
        ),
        signature(
            "PostScript document",
            "application/postscript",
            ".ps",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("%!"), 0), SubRule::at(*b"\x04%!", 0)],
        ),
        signature(
            "RTF document",
            "application/rtf",
            ".rtf",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("{\\rtf"), 0)],
        ),
        signature(
            "Word document",
            "application/msword",
            ".doc",
            60,
            vec![SubRule::at(OLE_HEADER, 0).with_children(vec![SubRule::at(little16(0xa5ec), 512)])],
        ),
        signature(
            "OLE2 compound document storage",
            "application/x-ole-storage",
            ".ole",
            DEFAULT_PRIORITY,
            vec![SubRule::at(OLE_HEADER, 0)],
        ),
        signature(
            "HTML document",
            "text/html",
            ".html",
            DEFAULT_PRIORITY,
            vec![
                SubRule::range(string("<!DOCTYPE html"), 0..=64),
                SubRule::range(string("<!DOCTYPE HTML"), 0..=64),
                SubRule::range(string("<html"), 0..=64),
                SubRule::range(string("<HTML"), 0..=64),
            ],
        ),
        signature(
            "Qt translation file",
            "text/vnd.trolltech.linguist",
            ".ts",
            80,
            vec![SubRule::range(string("<TS"), 0..=256)],
        ),
        signature(
            "XML document",
            "application/xml",
            ".xml",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("<?xml"), 0)],
        ),
        signature(
            "X.509 certificate",
            "application/pkix-cert",
            ".crt",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("-----BEGIN CERTIFICATE-----"), 0)],
        ),
        signature(
            "SQLite3 database",
            "application/vnd.sqlite3",
            ".sqlite",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"SQLite format 3\x00", 0)],
        ),
        signature(
            "translated messages (machine-readable)",
            "application/x-gettext-translation",
            ".mo",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(little32(0x9504_12de), 0),
                SubRule::at(big32(0x9504_12de), 0),
            ],
        ),
    ]
}

pub fn executables() -> Vec<ByteRule> {
    vec![
        signature(
            "DOS/Windows executable",
            "application/x-msdownload",
            ".exe",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("MZ"), 0)],
        ),
        signature(
            "ELF executable",
            "application/x-executable",
            "",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\x7fELF", 0)],
        ),
        signature(
            "Mach-O binary: 64-bit little-endian",
            "application/x-mach-binary",
            "",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\xcf\xfa\xed\xfe", 0)],
        ),
        signature(
            "Mach-O binary: 64-bit big-endian",
            "application/x-mach-binary",
            "",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\xfe\xed\xfa\xcf", 0)],
        ),
        signature(
            "Mach-O binary: 32-bit little-endian",
            "application/x-mach-binary",
            "",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\xce\xfa\xed\xfe", 0)],
        ),
        signature(
            "Mach-O binary: 32-bit big-endian",
            "application/x-mach-binary",
            "",
            DEFAULT_PRIORITY,
            vec![SubRule::at(*b"\xfe\xed\xfa\xce", 0)],
        ),
    ]
}

pub fn fonts() -> Vec<ByteRule> {
    vec![
        signature(
            "TrueType font",
            "font/ttf",
            ".ttf",
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(*b"\x00\x01\x00\x00\x00", 0),
                // classic Mac suitcase, bare or behind a 65-byte resource header
                SubRule::new(string("FFIL"), vec![0, 65]),
            ],
        ),
        signature(
            "OpenType font",
            "font/otf",
            ".otf",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("OTTO"), 0)],
        ),
        signature(
            "WOFF font",
            "font/woff",
            ".woff",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("wOFF"), 0)],
        ),
        signature(
            "WOFF2 font",
            "font/woff2",
            ".woff2",
            DEFAULT_PRIORITY,
            vec![SubRule::at(string("wOF2"), 0)],
        ),
    ]
}

pub fn scripts() -> Vec<ByteRule> {
    vec![
        ByteRule::new(
            FileType::new("shell script", "application/x-shellscript", ".sh").with_icon("text-x-script"),
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(string("#!/bin/sh"), 0),
                SubRule::at(string("#! /bin/sh"), 0),
                SubRule::at(string("#!/bin/bash"), 0),
                SubRule::at(string("#! /bin/bash"), 0),
                SubRule::at(string("#!/usr/bin/env sh"), 0),
                SubRule::at(string("#!/usr/bin/env bash"), 0),
            ],
        ),
        ByteRule::new(
            FileType::new("Python script", "text/x-python", ".py").with_icon("text-x-script"),
            DEFAULT_PRIORITY,
            vec![
                SubRule::at(string("#!/usr/bin/env python"), 0),
                SubRule::at(string("#! /usr/bin/env python"), 0),
                SubRule::at(string("#!/usr/bin/python"), 0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_signature_is_well_formed() {
        for rule in byte_rules() {
            assert!(!rule.sub_rules().is_empty(), "{}", rule.file_type());
            for sub_rule in rule.sub_rules() {
                assert!(!sub_rule.offsets().is_empty(), "{}", rule.file_type());
                assert!(!sub_rule.bytes().is_empty(), "{}", rule.file_type());
            }
        }
    }

    #[test]
    fn test_mask_covers_psd_pattern() {
        let psd = images()
            .into_iter()
            .find(|rule| rule.file_type().mime == "image/vnd.adobe.photoshop")
            .unwrap();
        let sub_rule = &psd.sub_rules()[0];
        assert_eq!(sub_rule.mask().map(<[u8]>::len), Some(sub_rule.bytes().len()));
    }

    #[test]
    fn test_cpio_host_order_is_big_endian() {
        let cpio = archives()
            .into_iter()
            .find(|rule| rule.file_type().mime == "application/x-cpio")
            .unwrap();
        assert_eq!(cpio.sub_rules()[0].bytes(), &[0x71, 0xc7]);
        assert_eq!(cpio.sub_rules()[1].bytes(), &[0xc7, 0x71]);
    }
}
