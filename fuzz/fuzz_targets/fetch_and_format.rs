#![no_main]

use libfuzzer_sys::fuzz_target;
use snippets::format::{NumberStyle, User};
use snippets::{fetch_unread_count, format_number, format_person};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any identifier either fails cleanly or reports the simulated count; whitespace always fails
        match fetch_unread_count(s) {
            Ok(count) => assert_eq!(count, snippets::SIMULATED_UNREAD_COUNT),
            Err(_) => assert!(snippets::parse_locator(s).is_err()),
        }
        if s.contains(char::is_whitespace) {
            assert!(fetch_unread_count(s).is_err());
        }
        let _ = format_person(&User::new(s, s.len() as u32));
    }

    // Reinterpret the leading bytes as a number and a style
    if data.len() >= 9 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&data[..8]);
        let value = i64::from_le_bytes(raw);
        let style = NumberStyle::ALL[data[8] as usize % NumberStyle::ALL.len()];
        let _ = format_number(value, style);
    }
});
