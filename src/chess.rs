// This file is part of the stratagem library.
// Copyright (C) 2025 The stratagem authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Rules of the chess family: orthodox chess, the fairy variant and
//! hexagonal chess.
//!
//! The functions take the board and the rule state explicitly. Most users
//! will prefer the session API of [`Game`](crate::Game).
//!
//! # Examples
//!
//! ```
//! use stratagem::{chess, Color, Coord, Move, MoveKind, RuleState, Variant};
//!
//! let mut board = Variant::Chess.board();
//! let mut state = RuleState::default();
//!
//! let m = Move::Normal {
//!     from: Coord::square(4, 1),
//!     to: Coord::square(4, 3),
//! };
//! let kind = chess::validate(&board, &state, m, Color::White)?;
//! assert_eq!(kind, MoveKind::Quiet);
//!
//! chess::apply(&mut board, &mut state, m, kind, None)?;
//! assert_eq!(state.en_passant.map(|ep| ep.target), Some(Coord::square(4, 2)));
//! # Ok::<_, stratagem::MoveError>(())
//! ```

use crate::{
    attacks,
    board::Board,
    castling_side::CastlingSide,
    color::Color,
    coord::{Coord, CoordList, Geometry},
    errors::{InvariantError, MoveError, Rejection},
    m::{Move, MoveKind, MoveList},
    movegen,
    role::Role,
    state::{EnPassant, Moved, RuleState},
    types::{Outcome, Piece},
};

fn require_chess_piece(piece: Piece, at: Coord) -> Result<(), InvariantError> {
    if piece.role.is_chess() {
        Ok(())
    } else {
        Err(InvariantError::UnsupportedPiece { piece, at })
    }
}

/// Applies the board changes of a move to `board` without touching any
/// rule state.
fn relocate(board: &mut Board, from: Coord, to: Coord, kind: MoveKind, captured: Option<Coord>) {
    let color = board.color_at(from);
    board.relocate(from, to);
    match kind {
        MoveKind::Castle => {
            if let (Some(color), Some(side)) = (color, CastlingSide::from_king_move(from, to)) {
                board.relocate(side.rook_from(color), side.rook_to(color));
            }
        }
        MoveKind::EnPassant => {
            if let Some(captured) = captured {
                board.remove_piece_at(captured);
            }
        }
        _ => (),
    }
}

fn validate_castle(
    board: &Board,
    state: &RuleState,
    from: Coord,
    to: Coord,
    side: CastlingSide,
    color: Color,
) -> Result<MoveKind, MoveError> {
    let backrank = CastlingSide::backrank(color);
    if from != Coord::square(4, backrank) {
        return Err(Rejection::IllegalShape.into());
    }
    if !state.may_castle(color, side) {
        return Err(Rejection::CastlingUnavailable.into());
    }

    let rook_from = side.rook_from(color);
    if board.piece_at(rook_from) != Some(color.rook()) {
        return Err(Rejection::CastlingUnavailable.into());
    }

    let (lo, hi) = if from.x < rook_from.x {
        (from.x, rook_from.x)
    } else {
        (rook_from.x, from.x)
    };
    if ((lo + 1)..hi).any(|x| !board.is_vacant(Coord::square(x, backrank))) {
        return Err(Rejection::CastlingUnavailable.into());
    }

    // The king may not castle out of, through or into check.
    let step = if to.x > from.x { 1 } else { -1 };
    for c in [from, from.offset((step, 0)), to] {
        if attacks::is_attacked(board, c, !color)? {
            return Err(Rejection::CastlingUnavailable.into());
        }
    }

    let in_check = board.simulate(
        |b| relocate(b, from, to, MoveKind::Castle, None),
        |b| attacks::is_in_check(b, color),
    )?;
    if in_check {
        return Err(Rejection::SelfCheck.into());
    }

    Ok(MoveKind::Castle)
}

/// Validates a move of `side` and classifies it.
///
/// Castling is written as the king moving two files towards the rook. En
/// passant is written as the pawn moving onto the skipped cell.
///
/// # Errors
///
/// Returns [`MoveError::Rejected`] for illegal moves and
/// [`MoveError::Corrupt`] if the board holds a piece that does not belong to
/// the chess family of its geometry.
pub fn validate(
    board: &Board,
    state: &RuleState,
    m: Move,
    side: Color,
) -> Result<MoveKind, MoveError> {
    let Move::Normal { from, to } = m else {
        return Err(Rejection::WrongMoveType.into());
    };
    if !board.contains(from) || !board.contains(to) {
        return Err(Rejection::OutOfBounds.into());
    }
    let piece = board.piece_at(from).ok_or(Rejection::EmptySquare)?;
    if piece.color != side {
        return Err(Rejection::WrongSide.into());
    }
    require_chess_piece(piece, from)?;
    if board.color_at(to) == Some(side) {
        return Err(Rejection::OwnPiece.into());
    }

    if piece.role == Role::King && board.geometry() == Geometry::Square {
        if let Some(castling_side) = CastlingSide::from_king_move(from, to) {
            return validate_castle(board, state, from, to, castling_side, side);
        }
    }

    let en_passant = state.en_passant_for(side);
    if !movegen::pseudo_moves(board, from, en_passant)?.contains(&to) {
        return Err(Rejection::IllegalShape.into());
    }

    let (kind, captured) = match en_passant {
        Some(ep) if piece.role == Role::Pawn && ep.target == to && board.is_vacant(to) => {
            (MoveKind::EnPassant, Some(ep.captured))
        }
        _ if board.piece_at(to).is_some() => (MoveKind::Capture, None),
        _ => (MoveKind::Quiet, None),
    };

    let in_check = board.simulate(
        |b| relocate(b, from, to, kind, captured),
        |b| attacks::is_in_check(b, side),
    )?;
    if in_check {
        return Err(Rejection::SelfCheck.into());
    }

    Ok(kind)
}

/// Whether the move is a pawn move onto a promotion cell.
pub fn is_promotion(board: &Board, m: Move) -> bool {
    match m {
        Move::Normal { from, to } => board.piece_at(from).is_some_and(|piece| {
            piece.role == Role::Pawn && board.geometry().is_promotion_cell(piece.color, to)
        }),
        Move::Put { .. } => false,
    }
}

/// Commits a move previously classified by [`validate()`].
///
/// A pawn reaching a promotion cell becomes `promotion`, or a queen if
/// `None`. Moved flags are updated and the en passant record is replaced.
///
/// # Errors
///
/// Rejects placements, moves from an empty cell, and promotion roles that
/// pawns may never become or that are given for moves that do not promote.
/// Nothing is changed on error.
pub fn apply(
    board: &mut Board,
    state: &mut RuleState,
    m: Move,
    kind: MoveKind,
    promotion: Option<Role>,
) -> Result<(), MoveError> {
    let Move::Normal { from, to } = m else {
        return Err(Rejection::WrongMoveType.into());
    };
    let piece = board.piece_at(from).ok_or(Rejection::EmptySquare)?;
    require_chess_piece(piece, from)?;

    let promotes = is_promotion(board, m);
    if let Some(role) = promotion {
        if !promotes || !role.is_promotion_candidate() {
            return Err(MoveError::Rejected(Rejection::BadPromotion));
        }
    }

    let captured = state.en_passant.map(|ep| ep.captured);
    relocate(board, from, to, kind, captured);

    if promotes {
        board.set_piece_at(to, promotion.unwrap_or(Role::Queen).of(piece.color));
    }

    // Hex chess has no castling.
    if !board.geometry().is_hex() {
        if piece.role == Role::King {
            state.moved |= Moved::king(piece.color);
        }
        for c in [from, to] {
            if let Some(flag) = Moved::rook_origin(c) {
                state.moved |= flag;
            }
        }
    }
    if kind == MoveKind::Castle {
        if let Some(side) = CastlingSide::from_king_move(from, to) {
            state.moved |= Moved::rook(piece.color, side);
        }
    }

    let forward = board.geometry().forward(piece.color);
    let single = from.offset(forward);
    state.en_passant = if piece.role == Role::Pawn && to == single.offset(forward) {
        Some(EnPassant {
            target: single,
            captured: to,
            side: !piece.color,
        })
    } else {
        None
    };
    state.forced = None;

    Ok(())
}

/// All legal moves of the piece on `from`, if it belongs to `side`.
///
/// # Errors
///
/// Errors if the board is inconsistent with the rules.
pub fn legal_moves_from(
    board: &Board,
    state: &RuleState,
    from: Coord,
    side: Color,
) -> Result<MoveList, InvariantError> {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from).filter(|piece| piece.color == side) else {
        return Ok(moves);
    };
    require_chess_piece(piece, from)?;

    let mut candidates: CoordList = movegen::pseudo_moves(board, from, state.en_passant_for(side))?;
    if piece.role == Role::King && board.geometry() == Geometry::Square {
        for castling_side in CastlingSide::ALL {
            let to = from.offset((castling_side.king_to_file() - 4, 0));
            if board.contains(to) && !candidates.contains(&to) {
                candidates.push(to);
            }
        }
    }

    for to in candidates {
        let m = Move::Normal { from, to };
        match validate(board, state, m, side) {
            Ok(_) => moves.push(m),
            Err(MoveError::Rejected(_)) => (),
            Err(MoveError::Corrupt(err)) => return Err(err),
        }
    }
    Ok(moves)
}

/// All legal moves of `side`.
///
/// # Errors
///
/// Errors if the board is inconsistent with the rules.
pub fn legal_moves(
    board: &Board,
    state: &RuleState,
    side: Color,
) -> Result<MoveList, InvariantError> {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces_of(side) {
        moves.extend(legal_moves_from(board, state, from, side)?);
    }
    Ok(moves)
}

fn has_legal_moves(board: &Board, state: &RuleState, side: Color) -> Result<bool, InvariantError> {
    for (from, _) in board.pieces_of(side) {
        if !legal_moves_from(board, state, from, side)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The outcome if `side` is to move: checkmate if it has no legal move and
/// is in check, stalemate (a draw) if it has no legal move otherwise.
///
/// # Errors
///
/// Errors if the board is inconsistent with the rules.
pub fn outcome(
    board: &Board,
    state: &RuleState,
    side: Color,
) -> Result<Option<Outcome>, InvariantError> {
    if has_legal_moves(board, state, side)? {
        return Ok(None);
    }
    Ok(Some(if attacks::is_in_check(board, side)? {
        Outcome::Decisive { winner: !side }
    } else {
        Outcome::Draw
    }))
}

/// Cells of pieces of `defender` that the opponent attacks.
///
/// # Errors
///
/// Errors if the board is inconsistent with the rules.
pub fn threatened(board: &Board, defender: Color) -> Result<CoordList, InvariantError> {
    let mut out = CoordList::new();
    for (c, _) in board.pieces_of(defender) {
        if attacks::is_attacked(board, c, !defender)? {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    fn normal(from: (i8, i8), to: (i8, i8)) -> Move {
        Move::Normal {
            from: Coord::new(from.0, from.1),
            to: Coord::new(to.0, to.1),
        }
    }

    #[test]
    fn test_start_position() {
        let board = Variant::Chess.board();
        let state = RuleState::default();
        assert_eq!(legal_moves(&board, &state, Color::White).map(|m| m.len()), Ok(20));
        assert_eq!(legal_moves(&board, &state, Color::Black).map(|m| m.len()), Ok(20));
        assert_eq!(outcome(&board, &state, Color::White), Ok(None));
        assert_eq!(threatened(&board, Color::White).map(|t| t.len()), Ok(0));
    }

    #[test]
    fn test_basic_rejections() {
        let board = Variant::Chess.board();
        let state = RuleState::default();
        let reject = |m| validate(&board, &state, m, Color::White).err();
        let rejected = |r| Some(MoveError::Rejected(r));
        assert_eq!(reject(normal((4, 3), (4, 4))), rejected(Rejection::EmptySquare));
        assert_eq!(reject(normal((4, 6), (4, 4))), rejected(Rejection::WrongSide));
        assert_eq!(reject(normal((3, 0), (4, 1))), rejected(Rejection::OwnPiece));
        assert_eq!(reject(normal((4, 1), (4, 4))), rejected(Rejection::IllegalShape));
        assert_eq!(reject(normal((4, 1), (4, 8))), rejected(Rejection::OutOfBounds));
        assert_eq!(reject(normal((4, 0), (6, 0))), rejected(Rejection::OwnPiece));
        assert_eq!(
            reject(Move::Put {
                to: Coord::square(4, 4)
            }),
            rejected(Rejection::WrongMoveType)
        );
    }

    #[test]
    fn test_castling_needs_unmoved_rook() {
        let mut board = Variant::Chess.board();
        board.remove_piece_at(Coord::square(5, 0));
        board.remove_piece_at(Coord::square(6, 0));
        let mut state = RuleState::default();
        let e1g1 = normal((4, 0), (6, 0));
        assert_eq!(validate(&board, &state, e1g1, Color::White), Ok(MoveKind::Castle));
        state.moved |= Moved::WHITE_KING_ROOK;
        assert_eq!(
            validate(&board, &state, e1g1, Color::White),
            Err(MoveError::Rejected(Rejection::CastlingUnavailable))
        );
    }

    #[test]
    fn test_promotion() {
        let mut board = Board::from_diagram(
            Geometry::Square,
            "
            . . . . k . . .
            . P . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . K . . .
            ",
        )
        .expect("valid diagram");
        let mut state = RuleState::default();
        let m = normal((1, 6), (1, 7));
        assert!(is_promotion(&board, m));
        let kind = validate(&board, &state, m, Color::White).expect("legal");

        let mut scratch = board.clone();
        assert_eq!(
            apply(&mut scratch, &mut state, m, kind, Some(Role::King)),
            Err(MoveError::Rejected(Rejection::BadPromotion))
        );
        assert_eq!(scratch, board);

        apply(&mut board, &mut state, m, kind, Some(Role::Knight)).expect("applies");
        assert_eq!(board.piece_at(Coord::square(1, 7)), Some(Role::Knight.of(Color::White)));
    }

    #[test]
    fn test_capture_onto_corner_sets_moved() {
        let mut board = Board::from_diagram(
            Geometry::Square,
            "
            r . . . k . . r
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            R . . . K . . R
            ",
        )
        .expect("valid diagram");
        let mut state = RuleState::default();
        let m = normal((7, 0), (7, 7));
        let kind = validate(&board, &state, m, Color::White).expect("legal");
        assert_eq!(kind, MoveKind::Capture);
        apply(&mut board, &mut state, m, kind, None).expect("applies");
        assert!(state.moved.contains(Moved::WHITE_KING_ROOK));
        assert!(state.moved.contains(Moved::BLACK_KING_ROOK));
        assert!(!state.may_castle(Color::Black, CastlingSide::KingSide));
    }

    #[test]
    fn test_hex_has_no_castling() {
        let board = Variant::HexChess.board();
        let state = RuleState::default();
        let king = Coord::hex(1, 4);
        assert_eq!(board.piece_at(king), Some(Color::White.king()));
        let m = Move::Normal {
            from: king,
            to: Coord::hex(-1, 4),
        };
        assert_eq!(
            validate(&board, &state, m, Color::White),
            Err(MoveError::Rejected(Rejection::IllegalShape))
        );
    }

    #[test]
    fn test_hex_moves_leave_moved_flags() {
        let mut board = Board::empty(Geometry::Hex { radius: 5 });
        board.set_piece_at(Coord::hex(1, 4), Color::White.king());
        board.set_piece_at(Coord::hex(1, -5), Color::Black.king());
        board.set_piece_at(Coord::hex(0, 0), Color::White.rook());
        let mut state = RuleState::default();

        // The centre cell shares its coordinates with the a1 corner.
        let m = Move::Normal {
            from: Coord::hex(0, 0),
            to: Coord::hex(0, -2),
        };
        let kind = validate(&board, &state, m, Color::White).expect("legal");
        apply(&mut board, &mut state, m, kind, None).expect("applies");

        let m = Move::Normal {
            from: Coord::hex(1, -5),
            to: Coord::hex(1, -4),
        };
        let kind = validate(&board, &state, m, Color::Black).expect("legal");
        apply(&mut board, &mut state, m, kind, None).expect("applies");

        assert_eq!(state.moved, Moved::empty());
    }
}
