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

use std::fmt;

use arrayvec::ArrayVec;

use crate::coord::Coord;

/// A move request.
///
/// Moves carry neither the side to move nor the moving piece. Both are
/// supplied by the board and the game the move is validated against.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using raw coordinates. Use
/// [`notation`](crate::notation) for cell names like `e4`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Move {
    /// Moves the piece on `from` to `to`. Castling is a king moving two
    /// files, en passant is a pawn moving onto the en passant target.
    Normal { from: Coord, to: Coord },
    /// Places a new stone on `to`.
    Put { to: Coord },
}

impl Move {
    /// Gets the origin, or `None` for placements.
    pub const fn from(self) -> Option<Coord> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Put { .. } => None,
        }
    }

    /// Gets the destination.
    pub const fn to(self) -> Coord {
        match self {
            Move::Normal { to, .. } | Move::Put { to } => to,
        }
    }

    pub const fn is_put(self) -> bool {
        matches!(self, Move::Put { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal { from, to } => write!(f, "{from} -> {to}"),
            Move::Put { to } => write!(f, "@{to}"),
        }
    }
}

/// Classification of an accepted move.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Moves onto an empty cell.
    Quiet,
    /// Captures the piece on the destination, or jumps over an enemy man in
    /// checkers.
    Capture,
    /// King moves two files and the rook jumps over it.
    Castle,
    /// Pawn captures a pawn that just advanced two cells.
    EnPassant,
    /// Places a stone.
    Put,
}

impl MoveKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveKind::Quiet => "move",
            MoveKind::Capture => "capture",
            MoveKind::Castle => "castle",
            MoveKind::EnPassant => "enpassant",
            MoveKind::Put => "put",
        }
    }

    /// Whether an enemy piece is removed.
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is limited, but there is enough space to hold the legal
/// moves of any position reachable in the supported games.
pub type MoveList = ArrayVec<Move, 1024>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let m = Move::Normal {
            from: Coord::square(4, 1),
            to: Coord::square(4, 3),
        };
        assert_eq!(m.from(), Some(Coord::square(4, 1)));
        assert_eq!(m.to(), Coord::square(4, 3));
        assert!(!m.is_put());
        assert_eq!(m.to_string(), "(4, 1) -> (4, 3)");

        let m = Move::Put {
            to: Coord::hex(0, 0),
        };
        assert_eq!(m.from(), None);
        assert_eq!(m.to_string(), "@(0, 0)");
    }

    #[test]
    fn test_kind() {
        assert!(MoveKind::EnPassant.is_capture());
        assert!(!MoveKind::Castle.is_capture());
        assert_eq!(MoveKind::Put.to_string(), "put");
    }
}
