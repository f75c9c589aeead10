#![no_main]

use libfuzzer_sys::fuzz_target;
use stratagem::{Board, Geometry};

fuzz_target!(|data: &[u8]| {
    let Some((&radius, diagram)) = data.split_first() else {
        return;
    };
    let Ok(diagram) = std::str::from_utf8(diagram) else {
        return;
    };
    let geometry = Geometry::hex(radius).unwrap_or(Geometry::Square);
    if let Ok(board) = Board::from_diagram(geometry, diagram) {
        let roundtripped =
            Board::from_diagram(geometry, &board.to_string()).expect("roundtrip");
        assert_eq!(board, roundtripped);
    }
});
