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

//! Attack and check detection for the chess family.
//!
//! # Examples
//!
//! ```
//! use stratagem::{attacks, Color, Coord, Variant};
//!
//! let board = Variant::Chess.board();
//! // f3 is covered by the g2 pawn and the g1 knight.
//! let f3 = Coord::square(5, 2);
//! assert!(attacks::is_attacked(&board, f3, Color::White)?);
//! assert_eq!(attacks::attackers(&board, f3, Color::White)?.len(), 3);
//! assert!(!attacks::is_in_check(&board, Color::White)?);
//! # Ok::<_, stratagem::InvariantError>(())
//! ```

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, CoordList},
    errors::InvariantError,
    movegen,
};

/// Whether any piece of side `by` attacks `target`.
///
/// # Errors
///
/// Errors if a piece of `by` does not belong to the chess family of this
/// geometry.
pub fn is_attacked(board: &Board, target: Coord, by: Color) -> Result<bool, InvariantError> {
    for (from, _) in board.pieces_of(by) {
        if movegen::attacks(board, from)?.contains(&target) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Cells of all pieces of side `by` that attack `target`.
///
/// # Errors
///
/// Errors like [`is_attacked()`].
pub fn attackers(board: &Board, target: Coord, by: Color) -> Result<CoordList, InvariantError> {
    let mut out = CoordList::new();
    for (from, _) in board.pieces_of(by) {
        if movegen::attacks(board, from)?.contains(&target) {
            out.push(from);
        }
    }
    Ok(out)
}

/// Whether the king of `side` is attacked. A side without a king is never in
/// check.
///
/// # Errors
///
/// Errors like [`is_attacked()`].
pub fn is_in_check(board: &Board, side: Color) -> Result<bool, InvariantError> {
    match board.king_of(side) {
        Some(king) => is_attacked(board, king, !side),
        None => Ok(false),
    }
}
