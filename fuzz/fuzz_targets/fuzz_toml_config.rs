//! Fuzz target for `symkeys.toml` parsing.

#![no_main]
use libfuzzer_sys::fuzz_target;
use symkeys_config::TomlConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Only panics and hangs matter here.
        let _ = TomlConfig::parse(s);
    }
});
