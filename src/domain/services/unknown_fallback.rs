//! Text/binary heuristic for content no signature recognized

use crate::domain::entities::FileType;
use crate::io::{BufferedSource, SNIFF_SIZE};
use std::io::Read;

/// Classifies unrecognized content as unknown text or unknown binary
///
/// Up to [`SNIFF_SIZE`] bytes are buffered. A prefix of printable ASCII is text. As soon
/// as one byte falls outside that range, the whole buffer is checked once for UTF-8:
/// valid means text, anything else binary.
pub fn identify_unknown<R: Read>(source: &mut BufferedSource<R>) -> FileType {
    source.maybe_buffer(SNIFF_SIZE);
    let data = source.data();

    if !data.iter().any(|&b| !is_printable_ascii(b)) {
        return FileType::UNKNOWN_TEXT;
    }

    if std::str::from_utf8(data).is_ok() {
        FileType::UNKNOWN_TEXT
    } else {
        FileType::UNKNOWN_BINARY
    }
}

#[inline]
fn is_printable_ascii(b: u8) -> bool {
    (32..=126).contains(&b)
}
