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

//! Rules of checkers with mandatory capture chains.
//!
//! Men step diagonally forward, crowned pieces step in all four diagonal
//! directions, and both jump over an adjacent enemy piece in all four
//! diagonal directions. If any piece of the side to move can jump, it must
//! jump. After a jump the landing piece must keep jumping while it can:
//! [`RuleState::forced`] names it and the turn does not pass. A man crowned
//! by a jump keeps jumping as a crowned piece.

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, CoordList},
    errors::{InvariantError, MoveError, Rejection},
    m::{Move, MoveKind, MoveList},
    movegen,
    role::Role,
    state::RuleState,
    types::{Outcome, Piece},
};

fn require_checkers_piece(piece: Piece, at: Coord) -> Result<(), InvariantError> {
    if piece.role.is_checkers() {
        Ok(())
    } else {
        Err(InvariantError::UnsupportedPiece { piece, at })
    }
}

/// Checks that the forced piece, if any, still stands on its cell and
/// belongs to `side`.
fn forced_piece(
    board: &Board,
    state: &RuleState,
    side: Color,
) -> Result<Option<Coord>, InvariantError> {
    match state.forced {
        Some(at) if board.color_at(at) == Some(side) => Ok(Some(at)),
        Some(at) => Err(InvariantError::ForcedPieceMissing { at }),
        None => Ok(None),
    }
}

/// Whether any piece of `side` can jump.
///
/// # Errors
///
/// Errors if a piece of `side` is not a checkers piece.
pub fn any_capture(board: &Board, side: Color) -> Result<bool, InvariantError> {
    for (from, _) in board.pieces_of(side) {
        if !movegen::checkers_jumps(board, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Validates a move of `side` and classifies it as [`MoveKind::Quiet`] or
/// [`MoveKind::Capture`].
///
/// # Errors
///
/// Returns [`MoveError::Rejected`] for illegal moves and
/// [`MoveError::Corrupt`] for non-checkers pieces or a vanished forced
/// piece.
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
    require_checkers_piece(piece, from)?;

    let forced = forced_piece(board, state, side)?;
    if forced.is_some_and(|at| at != from) {
        return Err(Rejection::ChainPieceOnly.into());
    }
    match board.color_at(to) {
        Some(color) if color == side => return Err(Rejection::OwnPiece.into()),
        Some(_) => return Err(Rejection::Occupied.into()),
        None => (),
    }

    if movegen::checkers_jumps(board, from)?.contains(&to) {
        return Ok(MoveKind::Capture);
    }
    if forced.is_some() {
        return Err(Rejection::ChainCaptureRequired.into());
    }
    if any_capture(board, side)? {
        return Err(Rejection::CaptureRequired.into());
    }
    if movegen::checkers_steps(board, from)?.contains(&to) {
        Ok(MoveKind::Quiet)
    } else {
        Err(Rejection::IllegalShape.into())
    }
}

/// Commits a move previously classified by [`validate()`].
///
/// Removes the jumped piece, crowns men on the far rank and sets
/// [`RuleState::forced`] if the capture chain must continue.
///
/// # Errors
///
/// Rejects placements, moves from an empty cell and captures that do not
/// have the shape of a jump. Nothing is changed on error.
pub fn apply(
    board: &mut Board,
    state: &mut RuleState,
    m: Move,
    kind: MoveKind,
) -> Result<(), MoveError> {
    let Move::Normal { from, to } = m else {
        return Err(Rejection::WrongMoveType.into());
    };
    let piece = board.piece_at(from).ok_or(Rejection::EmptySquare)?;
    require_checkers_piece(piece, from)?;

    let jumped = match kind {
        MoveKind::Capture => Some(from.midpoint(to).ok_or(Rejection::IllegalShape)?),
        MoveKind::Quiet => None,
        _ => return Err(Rejection::WrongMoveType.into()),
    };

    board.relocate(from, to);
    if let Some(jumped) = jumped {
        board.remove_piece_at(jumped);
    }

    let far_rank = piece.color.fold(7, 0);
    let crowned = piece.role == Role::Man && to.rank() == far_rank;
    if crowned {
        board.set_piece_at(to, Role::Crowned.of(piece.color));
    }

    state.forced = if jumped.is_some() && !movegen::checkers_jumps(board, to)?.is_empty() {
        Some(to)
    } else {
        None
    };
    state.en_passant = None;

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
    require_checkers_piece(piece, from)?;

    let forced = forced_piece(board, state, side)?;
    if forced.is_some_and(|at| at != from) {
        return Ok(moves);
    }

    let destinations = if forced.is_some() || any_capture(board, side)? {
        movegen::checkers_jumps(board, from)?
    } else {
        movegen::checkers_steps(board, from)?
    };
    moves.extend(destinations.into_iter().map(|to| Move::Normal { from, to }));
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

/// The outcome if `side` is to move: a side without pieces or without
/// legal moves loses.
///
/// # Errors
///
/// Errors if the board is inconsistent with the rules.
pub fn outcome(
    board: &Board,
    state: &RuleState,
    side: Color,
) -> Result<Option<Outcome>, InvariantError> {
    if board.count(side) == 0 || legal_moves(board, state, side)?.is_empty() {
        Ok(Some(Outcome::Decisive { winner: !side }))
    } else {
        Ok(None)
    }
}

/// Cells of pieces of `defender` that the opponent could jump right now.
///
/// # Errors
///
/// Errors if the board is inconsistent with the rules.
pub fn threatened(board: &Board, defender: Color) -> Result<CoordList, InvariantError> {
    let mut victims = CoordList::new();
    for (from, _) in board.pieces_of(!defender) {
        for landing in movegen::checkers_jumps(board, from)? {
            if let Some(victim) = from.midpoint(landing) {
                if !victims.contains(&victim) {
                    victims.push(victim);
                }
            }
        }
    }
    Ok(victims)
}
