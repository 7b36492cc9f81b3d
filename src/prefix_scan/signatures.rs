//! Fixed-offset signature list for the prefix scanner

/// A magic number at a fixed offset, optionally refined by children
///
/// A child's offset counts from the end of its parent's magic. A signature with
/// children only matches through one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSignature {
    pub magic: &'static [u8],
    pub offset: usize,
    pub description: &'static str,
    /// Extension without the leading dot
    pub extension: &'static str,
    pub mime: &'static str,
    pub children: &'static [PrefixSignature],
}

impl PrefixSignature {
    /// Returns the signature that identifies `data`: this one, one of its descendants,
    /// or none
    pub fn check<'s>(&'s self, data: &[u8]) -> Option<&'s PrefixSignature> {
        self.check_at(data, self.offset)
    }

    fn check_at<'s>(&'s self, data: &[u8], offset: usize) -> Option<&'s PrefixSignature> {
        let window = data.get(offset..)?.get(..self.magic.len())?;
        if window != self.magic {
            return None;
        }

        if self.children.is_empty() {
            return Some(self);
        }

        let rest = &data[offset..];
        self.children
            .iter()
            .find_map(|child| child.check_at(rest, child.offset + self.magic.len()))
    }

    /// Bytes needed to evaluate this signature and every child
    pub fn reach(&self) -> usize {
        let own = self.offset + self.magic.len();
        self.children
            .iter()
            .map(|child| own + child.reach())
            .fold(own, usize::max)
    }
}

const fn sig(
    magic: &'static [u8],
    offset: usize,
    description: &'static str,
    extension: &'static str,
    mime: &'static str,
) -> PrefixSignature {
    PrefixSignature {
        magic,
        offset,
        description,
        extension,
        mime,
        children: &[],
    }
}

const fn container(magic: &'static [u8], children: &'static [PrefixSignature]) -> PrefixSignature {
    PrefixSignature {
        magic,
        offset: 0,
        description: "",
        extension: "",
        mime: "",
        children,
    }
}

static RIFF_FORMS: [PrefixSignature; 3] = [
    sig(b"WAVE", 4, "WAV audio", "wav", "audio/vnd.wave"),
    sig(b"AVI ", 4, "AVI video", "avi", "video/vnd.avi"),
    sig(b"WEBP", 4, "WebP image", "webp", "image/webp"),
];

/// Entries at the same offset never share a prefix. Entries at different offsets can
/// both match one input; the scanner then reports the one listed first.
pub static SIGNATURES: &[PrefixSignature] = &[
    sig(b"\xa1\xb2\xc3\xd4", 0, "Libpcap capture", "pcap", "application/vnd.tcpdump.pcap"),
    sig(b"\xd4\xc3\xb2\xa1", 0, "Libpcap capture", "pcap", "application/vnd.tcpdump.pcap"),
    sig(b"\x0a\x0d\x0d\x0a", 0, "PCAP Next Generation capture", "pcapng", "application/x-pcapng"),
    sig(b"\xed\xab\xee\xdb", 0, "RPM package", "rpm", "application/x-rpm"),
    sig(b"SQLite format 3\x00", 0, "SQLite database", "sqlite", "application/vnd.sqlite3"),
    sig(b"\x00\x00\x01\x00", 0, "Windows icon", "ico", "image/vnd.microsoft.icon"),
    sig(b"BZh", 0, "Bzip2 archive", "bz2", "application/x-bzip2"),
    sig(b"GIF87a", 0, "GIF image", "gif", "image/gif"),
    sig(b"GIF89a", 0, "GIF image", "gif", "image/gif"),
    sig(b"II\x2a\x00", 0, "TIFF image", "tiff", "image/tiff"),
    sig(b"MM\x00\x2a", 0, "TIFF image", "tiff", "image/tiff"),
    sig(b"\xff\xd8\xff\xdb", 0, "JPEG image", "jpg", "image/jpeg"),
    sig(b"\xff\xd8\xff\xe0\x00\x10JFIF\x00\x01", 0, "JPEG image (JFIF)", "jpg", "image/jpeg"),
    sig(b"\xff\xd8\xff\xe1", 0, "JPEG image (Exif)", "jpg", "image/jpeg"),
    sig(b"LZIP", 0, "Lzip archive", "lz", "application/x-lzip"),
    sig(b"MZ", 0, "DOS/Windows executable", "exe", "application/x-msdownload"),
    sig(b"PK\x03\x04", 0, "Zip archive", "zip", "application/zip"),
    sig(b"PK\x05\x06", 0, "Zip archive (empty)", "zip", "application/zip"),
    sig(b"PK\x07\x08", 0, "Zip archive (spanned)", "zip", "application/zip"),
    sig(b"Rar!\x1a\x07\x00", 0, "RAR archive", "rar", "application/vnd.rar"),
    sig(b"Rar!\x1a\x07\x01\x00", 0, "RAR archive (v5)", "rar", "application/vnd.rar"),
    sig(b"\x7fELF", 0, "ELF executable", "", "application/x-executable"),
    sig(b"\x89PNG\r\n\x1a\n", 0, "PNG image", "png", "image/png"),
    sig(b"\xca\xfe\xba\xbe", 0, "Java class or Mach-O fat binary", "class", "application/java-vm"),
    sig(b"\xfe\xed\xfa\xce", 0, "Mach-O binary (32-bit)", "", "application/x-mach-binary"),
    sig(b"\xfe\xed\xfa\xcf", 0, "Mach-O binary (64-bit)", "", "application/x-mach-binary"),
    sig(b"\xce\xfa\xed\xfe", 0, "Mach-O binary (reversed, 32-bit)", "", "application/x-mach-binary"),
    sig(b"\xcf\xfa\xed\xfe", 0, "Mach-O binary (reversed, 64-bit)", "", "application/x-mach-binary"),
    sig(b"%PDF-", 0, "PDF document", "pdf", "application/pdf"),
    sig(b"%!PS", 0, "PostScript document", "ps", "application/postscript"),
    sig(b"OggS", 0, "Ogg media", "ogg", "application/ogg"),
    sig(b"8BPS", 0, "Photoshop image", "psd", "image/vnd.adobe.photoshop"),
    container(b"RIFF", &RIFF_FORMS),
    sig(b"\xff\xfb", 0, "MP3 audio", "mp3", "audio/mpeg"),
    sig(b"ID3", 0, "MP3 audio (ID3v2)", "mp3", "audio/mpeg"),
    sig(b"BM", 0, "BMP image", "bmp", "image/bmp"),
    sig(b"CD001", 0x8001, "ISO9660 CD/DVD image", "iso", "application/vnd.efi.iso"),
    sig(b"fLaC", 0, "FLAC audio", "flac", "audio/flac"),
    sig(b"MThd", 0, "MIDI audio", "mid", "audio/midi"),
    sig(b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1", 0, "OLE2 compound document", "doc", "application/x-ole-storage"),
    sig(b"7z\xbc\xaf\x27\x1c", 0, "7-zip archive", "7z", "application/x-7z-compressed"),
    sig(b"\x1f\x8b", 0, "Gzip archive", "gz", "application/gzip"),
    sig(b"\x1f\x9d", 0, "LZW-compressed file", "Z", "application/x-compress"),
    sig(b"\xfd7zXZ\x00\x00", 0, "XZ archive", "xz", "application/x-xz"),
    sig(b"\x04\x22\x4d\x18", 0, "LZ4 frame", "lz4", "application/x-lz4"),
    sig(b"MSCF", 0, "Microsoft Cabinet archive", "cab", "application/vnd.ms-cab-compressed"),
    sig(b"\x1a\x45\xdf\xa3", 0, "Matroska media", "mkv", "video/x-matroska"),
    sig(b"DICM", 0x80, "DICOM image", "dcm", "application/dicom"),
    sig(b"wOFF", 0, "WOFF font", "woff", "font/woff"),
    sig(b"wOF2", 0, "WOFF2 font", "woff2", "font/woff2"),
    sig(b"<?xml ", 0, "XML document", "xml", "application/xml"),
    sig(b"\x00asm", 0, "WebAssembly binary", "wasm", "application/wasm"),
    sig(b"{\\rtf1", 0, "RTF document", "rtf", "application/rtf"),
    sig(b"CWS", 0, "Flash movie (compressed)", "swf", "application/x-shockwave-flash"),
    sig(b"FWS", 0, "Flash movie", "swf", "application/x-shockwave-flash"),
    sig(b"!<arch>", 0, "AR archive", "a", "application/x-archive"),
    sig(b"ustar\x0000", 0x101, "Tar archive", "tar", "application/x-tar"),
    sig(b"ustar  \x00", 0x101, "Tar archive (GNU)", "tar", "application/x-tar"),
    sig(b"NES\x1a", 0, "NES ROM image", "nes", "application/x-nes-rom"),
    sig(b"\x1bLua", 0, "Lua bytecode", "luac", "application/x-lua-bytecode"),
    sig(b"\x28\xb5\x2f\xfd", 0, "Zstandard archive", "zst", "application/zstd"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_offset_follows_parent_magic() {
        let riff = SIGNATURES.iter().find(|s| s.magic == b"RIFF").unwrap();
        let found = riff.check(b"RIFF\x24\x00\x00\x00WAVEfmt ").unwrap();
        assert_eq!(found.extension, "wav");

        // a container without a matching child is not a match
        assert!(riff.check(b"RIFF\x24\x00\x00\x00RMID").is_none());
        assert_eq!(riff.reach(), 12);
    }

    #[test]
    fn test_offset_beyond_data() {
        let tar = SIGNATURES.iter().find(|s| s.extension == "tar").unwrap();
        assert!(tar.check(b"ustar").is_none());
        assert_eq!(tar.reach(), 0x101 + 8);
    }
}
