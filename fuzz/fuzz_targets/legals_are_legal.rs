#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stratagem::{Game, Move, Variant};

#[derive(Debug, Arbitrary)]
struct Data {
    variant: Variant,
    moves: Vec<Move>,
    candidate: Move,
}

fuzz_target!(|data: Data| {
    let mut game = Game::new(data.variant);
    for m in data.moves {
        let before = game.snapshot();
        if game.play(m).is_err() {
            assert_eq!(game.snapshot(), before);
        }
    }

    let legals = game.legal_moves().expect("consistent game");
    assert_eq!(
        legals.contains(&data.candidate),
        game.validate(data.candidate).is_ok()
    );
    assert!(legals.iter().all(|&m| game.validate(m).is_ok()));
});
