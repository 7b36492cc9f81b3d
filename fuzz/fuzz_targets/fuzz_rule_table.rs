#![no_main]

use libfuzzer_sys::fuzz_target;
use mimeprobe::Identifier;
use mimeprobe::infrastructure::persistence::parse_table;
use std::io::Cursor;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(table) = parse_table(json) else {
        return;
    };

    // any table the loader accepts must identify without panicking
    let identifier = Identifier::new(Arc::new(table));
    let _ = identifier.identify(Cursor::new(data));
    let _ = identifier.identify_with_filename(Cursor::new(data), "rules.json");
});
