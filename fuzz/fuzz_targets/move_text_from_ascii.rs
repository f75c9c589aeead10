#![no_main]

use libfuzzer_sys::fuzz_target;
use stratagem::notation::MoveText;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = MoveText::from_ascii(data) {
        let roundtripped = MoveText::from_ascii(text.to_string().as_bytes()).expect("roundtrip");
        assert_eq!(text, roundtripped);
    }
});
