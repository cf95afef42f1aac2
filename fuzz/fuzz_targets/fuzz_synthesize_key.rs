#![no_main]
use libfuzzer_sys::fuzz_target;
use symkeys_name::{clean_display_name, synthesize_key};

/// Display names are short; longer inputs only slow the fuzzer down.
const MAX_INPUT_SIZE: usize = 4 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let cleaned = clean_display_name(s);
    assert_eq!(
        clean_display_name(&cleaned),
        cleaned,
        "clean_display_name must be idempotent for {s:?}"
    );

    let key = synthesize_key(s);
    assert!(
        key.chars().all(|c| c.is_ascii_alphanumeric()),
        "key must be ASCII alphanumeric: {key:?}"
    );
    assert_eq!(
        synthesize_key(&cleaned),
        key,
        "the marker prefix must not affect the key"
    );
    if s.trim().is_empty() {
        assert!(key.is_empty(), "blank names yield an empty key");
    }
});
