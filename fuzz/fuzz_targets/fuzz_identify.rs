#![no_main]

use libfuzzer_sys::fuzz_target;
use mimeprobe::Identifier;
use mimeprobe::prefix_scan::PrefixScanner;
use std::io::Cursor;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Identifier> = LazyLock::new(Identifier::builtin);

fuzz_target!(|data: &[u8]| {
    let first = IDENTIFIER.identify(Cursor::new(data));
    let second = IDENTIFIER.identify(Cursor::new(data));
    assert_eq!(first, second);

    let name = String::from_utf8_lossy(&data[..data.len().min(32)]);
    let _ = IDENTIFIER.identify_with_filename(Cursor::new(data), &name);

    let _ = PrefixScanner::builtin().with_workers(2).scan(data);
});
