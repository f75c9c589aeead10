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

//! Rules of the hexagonal connection game.
//!
//! Players alternately place a stone of their color on an empty cell.
//! Stones never move and are never captured. White wins by joining the
//! edges `r = -radius` and `r = radius` with a chain of edge-adjacent white
//! stones, Black by joining `q = -radius` and `q = radius`. A full board
//! without a chain is a draw.
//!
//! # Examples
//!
//! ```
//! use stratagem::{connection, Board, Color, Coord, Geometry, Move};
//!
//! let geometry = Geometry::hex(1)?;
//! let mut board = Board::empty(geometry);
//! for r in -1..=1 {
//!     connection::apply(&mut board, Move::Put { to: Coord::hex(0, r) }, Color::White)?;
//! }
//! assert_eq!(connection::winner(&board), Some(Color::White));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, CoordList, Geometry, MAX_CELLS},
    errors::{MoveError, Rejection},
    m::{Move, MoveKind, MoveList},
    movegen,
    types::Outcome,
};

fn radius(geometry: Geometry) -> i8 {
    match geometry {
        Geometry::Hex { radius } => radius as i8,
        Geometry::Square => 0,
    }
}

/// Whether `c` lies on the edge `color` starts its chain from.
fn on_start_edge(color: Color, radius: i8, c: Coord) -> bool {
    match color {
        Color::White => c.r() == -radius,
        Color::Black => c.q() == -radius,
    }
}

fn on_goal_edge(color: Color, radius: i8, c: Coord) -> bool {
    match color {
        Color::White => c.r() == radius,
        Color::Black => c.q() == radius,
    }
}

/// Whether the stones of `color` join its two edges.
pub fn is_connected(board: &Board, color: Color) -> bool {
    let geometry = board.geometry();
    let radius = radius(geometry);
    if radius == 0 {
        return false;
    }
    let stone = color.stone();

    let mut visited = [false; MAX_CELLS];
    let mut stack = CoordList::new();
    for c in geometry.coords() {
        if on_start_edge(color, radius, c) && board.piece_at(c) == Some(stone) {
            if let Some(i) = geometry.index(c) {
                visited[i] = true;
                stack.push(c);
            }
        }
    }

    while let Some(c) = stack.pop() {
        if on_goal_edge(color, radius, c) {
            return true;
        }
        for &delta in movegen::rook_directions(geometry) {
            let next = c.offset(delta);
            if board.piece_at(next) != Some(stone) {
                continue;
            }
            if let Some(i) = geometry.index(next) {
                if !visited[i] {
                    visited[i] = true;
                    stack.push(next);
                }
            }
        }
    }
    false
}

/// The side whose stones join its two edges, if any.
pub fn winner(board: &Board) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&color| is_connected(board, color))
}

/// A win, a draw on a full board, or `None` while the game continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(winner) => Some(Outcome::Decisive { winner }),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}

/// Validates a placement by `side`.
///
/// # Errors
///
/// Rejects piece moves, off-board and occupied cells, and any placement
/// after the game has been decided.
pub fn validate(board: &Board, m: Move, side: Color) -> Result<MoveKind, MoveError> {
    let Move::Put { to } = m else {
        return Err(Rejection::WrongMoveType.into());
    };
    if !board.contains(to) {
        return Err(Rejection::OutOfBounds.into());
    }
    if winner(board).is_some() {
        return Err(Rejection::GameOver.into());
    }
    match board.color_at(to) {
        Some(color) if color == side => Err(Rejection::OwnPiece.into()),
        Some(_) => Err(Rejection::Occupied.into()),
        None => Ok(MoveKind::Put),
    }
}

/// Validates and places a stone of `side`.
///
/// # Errors
///
/// Errors like [`validate()`]. Nothing is changed on error.
pub fn apply(board: &mut Board, m: Move, side: Color) -> Result<MoveKind, MoveError> {
    let kind = validate(board, m, side)?;
    board.set_piece_at(m.to(), side.stone());
    Ok(kind)
}

/// Every empty cell, or nothing once the game is decided.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    if winner(board).is_none() {
        moves.extend(
            board
                .geometry()
                .coords()
                .filter(|&c| board.is_vacant(c))
                .map(|to| Move::Put { to }),
        );
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(q: i8, r: i8) -> Move {
        Move::Put {
            to: Coord::hex(q, r),
        }
    }

    #[test]
    fn test_black_edges() {
        let geometry = Geometry::Hex { radius: 2 };
        let mut board = Board::empty(geometry);
        // A bent chain along the r = 0 and r = 1 rows.
        for m in [put(-2, 1), put(-1, 1), put(0, 0), put(1, 0)] {
            apply(&mut board, m, Color::Black).expect("empty cell");
        }
        assert_eq!(winner(&board), None);
        apply(&mut board, put(2, 0), Color::Black).expect("empty cell");
        assert_eq!(winner(&board), Some(Color::Black));
        assert!(!is_connected(&board, Color::White));
        assert!(legal_moves(&board).is_empty());
        assert_eq!(
            validate(&board, put(0, 2), Color::White),
            Err(MoveError::Rejected(Rejection::GameOver))
        );
    }

    #[test]
    fn test_disconnected_chain() {
        let geometry = Geometry::Hex { radius: 2 };
        let mut board = Board::empty(geometry);
        for m in [put(0, -2), put(0, -1), put(0, 1), put(0, 2)] {
            apply(&mut board, m, Color::White).expect("empty cell");
        }
        assert_eq!(winner(&board), None);
        assert_eq!(
            validate(&board, put(0, 1), Color::Black),
            Err(MoveError::Rejected(Rejection::Occupied))
        );
        assert_eq!(
            validate(&board, put(0, 3), Color::Black),
            Err(MoveError::Rejected(Rejection::OutOfBounds))
        );
        assert_eq!(legal_moves(&board).len(), geometry.len() - 4);
    }

    #[test]
    fn test_wrong_move_type() {
        let board = Board::empty(Geometry::Hex { radius: 3 });
        let m = Move::Normal {
            from: Coord::hex(0, 0),
            to: Coord::hex(0, 1),
        };
        assert_eq!(
            validate(&board, m, Color::White),
            Err(MoveError::Rejected(Rejection::WrongMoveType))
        );
    }
}
