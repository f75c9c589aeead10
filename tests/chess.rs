use stratagem::{
    notation::MoveText, Board, CastlingSide, Color, Coord, Game, Geometry, Move, MoveError, MoveKind,
    Outcome, Rejection, Role, Variant,
};

fn play(game: &mut Game, moves: &str) {
    for text in moves.split_whitespace() {
        text.parse::<MoveText>()
            .expect("valid move text")
            .play(game)
            .unwrap_or_else(|err| panic!("{text}: {err}"));
    }
}

fn text(s: &str) -> Move {
    s.parse::<MoveText>().expect("valid move text").m
}

fn rejected(rejection: Rejection) -> Result<MoveKind, MoveError> {
    Err(MoveError::Rejected(rejection))
}

fn setup(diagram: &str, turn: Color) -> Game {
    let board = Board::from_diagram(Geometry::Square, diagram).expect("valid diagram");
    Game::from_board(Variant::Chess, board, turn)
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new(Variant::Chess);
    play(&mut game, "f2f3 e7e5 g2g4");
    assert_eq!(game.outcome(), Ok(None));
    assert_eq!(game.validate(text("d8h4")), Ok(MoveKind::Quiet));
    play(&mut game, "d8h4");
    assert_eq!(game.is_in_check(), Ok(true));
    assert_eq!(
        game.outcome(),
        Ok(Some(Outcome::Decisive {
            winner: Color::Black
        }))
    );
    assert_eq!(game.legal_moves().map(|moves| moves.len()), Ok(0));
    assert_eq!(game.validate(text("e1f2")), rejected(Rejection::SelfCheck));
}

#[test]
fn test_lone_king_stalemate() {
    let game = setup(
        "
        k . . . . . . .
        . . . . . . . .
        . Q . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . K . . . . .
        ",
        Color::Black,
    );
    assert_eq!(game.is_in_check(), Ok(false));
    assert_eq!(game.outcome(), Ok(Some(Outcome::Draw)));
}

#[test]
fn test_rejections() {
    let game = Game::new(Variant::Chess);
    assert_eq!(game.validate(text("e3e4")), rejected(Rejection::EmptySquare));
    assert_eq!(game.validate(text("e7e5")), rejected(Rejection::WrongSide));
    assert_eq!(game.validate(text("d1d2")), rejected(Rejection::OwnPiece));
    assert_eq!(game.validate(text("e2e5")), rejected(Rejection::IllegalShape));
    assert_eq!(game.validate(text("c1e3")), rejected(Rejection::IllegalShape));
    assert_eq!(
        game.validate(Move::Put {
            to: Coord::square(4, 3)
        }),
        rejected(Rejection::WrongMoveType)
    );
    assert_eq!(
        game.validate(Move::Normal {
            from: Coord::square(4, 1),
            to: Coord::square(4, 8),
        }),
        rejected(Rejection::OutOfBounds)
    );
}

#[test]
fn test_castling() {
    let mut game = Game::new(Variant::Chess);
    play(&mut game, "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6");
    let king_moves = game.legal_moves_from(Coord::square(4, 0)).expect("chess pieces");
    assert!(king_moves.contains(&text("e1g1")));
    assert_eq!(game.validate(text("e1g1")), Ok(MoveKind::Castle));
    play(&mut game, "e1g1");
    assert_eq!(game.board().piece_at(Coord::square(6, 0)), Some(Color::White.king()));
    assert_eq!(game.board().piece_at(Coord::square(5, 0)), Some(Color::White.rook()));
    assert_eq!(game.board().piece_at(Coord::square(7, 0)), None);
    assert!(!game.state().may_castle(Color::White, CastlingSide::QueenSide));
}

#[test]
fn test_castling_through_check() {
    let game = setup(
        "
        . . . k . r . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        R . . . K . . R
        ",
        Color::White,
    );
    assert_eq!(game.validate(text("e1g1")), rejected(Rejection::CastlingUnavailable));
    assert_eq!(game.validate(text("e1c1")), Ok(MoveKind::Castle));
}

#[test]
fn test_castling_rook_square_attacked() {
    // Only the cells the king stands on, crosses and lands on matter.
    let game = setup(
        "
        . r . k . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        R . . . K . . .
        ",
        Color::White,
    );
    assert_eq!(game.validate(text("e1c1")), Ok(MoveKind::Castle));
}

#[test]
fn test_castling_out_of_check() {
    let game = setup(
        "
        . . . k r . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        R . . . K . . R
        ",
        Color::White,
    );
    assert_eq!(game.is_in_check(), Ok(true));
    assert_eq!(game.validate(text("e1g1")), rejected(Rejection::CastlingUnavailable));
    assert_eq!(game.validate(text("e1c1")), rejected(Rejection::CastlingUnavailable));
}

#[test]
fn test_castling_after_king_returns() {
    let mut game = setup(
        "
        . . . k . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        R . . . K . . R
        ",
        Color::White,
    );
    play(&mut game, "e1e2 d8d7 e2e1 d7d8");
    assert_eq!(game.validate(text("e1g1")), rejected(Rejection::CastlingUnavailable));
    assert_eq!(game.validate(text("e1c1")), rejected(Rejection::CastlingUnavailable));
}

#[test]
fn test_castling_after_rook_returns() {
    let mut game = setup(
        "
        . . . k . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        R . . . K . . R
        ",
        Color::White,
    );
    play(&mut game, "a1a2 d8d7 a2a1 d7d8");
    assert_eq!(game.validate(text("e1c1")), rejected(Rejection::CastlingUnavailable));
    assert_eq!(game.validate(text("e1g1")), Ok(MoveKind::Castle));
}

#[test]
fn test_castling_after_rook_captured() {
    let mut game = setup(
        "
        . . . k . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . n .
        . . . . . . . .
        R . . . K . . R
        ",
        Color::Black,
    );
    play(&mut game, "g3h1");
    assert!(!game.state().may_castle(Color::White, CastlingSide::KingSide));
    assert_eq!(game.validate(text("e1g1")), rejected(Rejection::CastlingUnavailable));
    assert_eq!(game.validate(text("e1c1")), Ok(MoveKind::Castle));
}

#[test]
fn test_en_passant() {
    let mut game = setup(
        "
        . . . . k . . r
        . . p . . . . .
        . . . . . . . .
        K P . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Color::Black,
    );
    play(&mut game, "c7c5");
    assert_eq!(game.validate(text("b5c6")), Ok(MoveKind::EnPassant));
    play(&mut game, "b5c6");
    assert_eq!(game.board().piece_at(Coord::square(2, 4)), None);
    assert_eq!(game.board().piece_at(Coord::square(2, 5)), Some(Color::White.pawn()));
    assert_eq!(game.state().en_passant, None);
}

#[test]
fn test_en_passant_pinned() {
    let mut game = setup(
        "
        . . . . k . . .
        . . p . . . . .
        . . . . . . . .
        K P . . . . . r
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Color::Black,
    );
    play(&mut game, "c7c5");
    assert_eq!(game.validate(text("b5c6")), rejected(Rejection::SelfCheck));
    assert!(!game.legal_moves().expect("chess pieces").contains(&text("b5c6")));
}

#[test]
fn test_en_passant_expires() {
    let mut game = setup(
        "
        . . . . k . . .
        . . p . . . . .
        . . . . . . . .
        K P . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        ",
        Color::Black,
    );
    play(&mut game, "c7c5 a5a4 e8e7");
    assert_eq!(game.validate(text("b5c6")), rejected(Rejection::IllegalShape));
}

#[test]
fn test_promotion() {
    let diagram = "
        . . . . . . . k
        . . . . P . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        K . . . . . . .
    ";
    let board = Board::from_diagram(Geometry::Square, diagram).expect("valid diagram");
    let e7e8 = text("e7e8");

    let mut game = Game::from_board(Variant::Fairy, board.clone(), Color::White);
    assert!(game.is_promotion(e7e8));
    assert_eq!(game.play_promoting(e7e8, Role::Chancellor), Ok(MoveKind::Quiet));
    assert_eq!(
        game.board().piece_at(Coord::square(4, 7)),
        Some(Role::Chancellor.of(Color::White))
    );

    let mut game = Game::from_board(Variant::Chess, board, Color::White);
    assert_eq!(
        game.play_promoting(e7e8, Role::Chancellor),
        rejected(Rejection::BadPromotion)
    );
    assert_eq!(game.play_promoting(e7e8, Role::King), rejected(Rejection::BadPromotion));
    assert_eq!(game.play(e7e8), Ok(MoveKind::Quiet));
    assert_eq!(game.board().piece_at(Coord::square(4, 7)), Some(Color::White.queen()));
    assert_eq!(game.is_in_check(), Ok(true));
}

#[test]
fn test_fairy_pieces() {
    let game = Game::new(Variant::Fairy);
    let camel = game.legal_moves_from(Coord::square(2, 0)).expect("chess pieces");
    assert_eq!(camel.len(), 2);
    assert!(camel.contains(&text("c1d4")));
    assert!(camel.contains(&text("c1b4")));
    assert_eq!(game.legal_moves().map(|moves| moves.len()), Ok(22));
}

#[test]
fn test_threatened() {
    let mut game = Game::new(Variant::Chess);
    play(&mut game, "e2e4 d7d5");
    let black = game.threatened(Color::Black).expect("chess pieces");
    assert_eq!(black.as_slice(), &[Coord::square(3, 4)]);
    let white = game.threatened(Color::White).expect("chess pieces");
    assert_eq!(white.as_slice(), &[Coord::square(4, 3)]);
}

#[test]
fn test_snapshot_roundtrip() {
    let mut game = Game::new(Variant::Chess);
    play(&mut game, "e2e4 c7c5 g1f3");
    let snapshot = game.snapshot();
    play(&mut game, "d7d6 d2d4 c5d4");
    assert_eq!(game.history_len(), 6);

    game.restore(snapshot.clone());
    assert_eq!(game.snapshot(), snapshot);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.plies(), 3);

    assert!(game.undo());
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.plies(), 5);
}
