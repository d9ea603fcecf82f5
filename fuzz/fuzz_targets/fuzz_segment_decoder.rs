#![no_main]

use deedplanner_bridges::xml::{decode_segments, encode_segments};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(segments) = decode_segments(text) {
        let encoded = encode_segments(&segments);
        let decoded = decode_segments(&encoded).expect("re-decode failed");
        assert_eq!(segments, decoded);
    }
});
