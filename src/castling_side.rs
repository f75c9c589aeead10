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

use std::ops;

use crate::{color::Color, coord::Coord};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    #[inline]
    pub const fn from_king_side(king_side: bool) -> CastlingSide {
        if king_side {
            CastlingSide::KingSide
        } else {
            CastlingSide::QueenSide
        }
    }

    /// Side of a king move from `from` to `to`, if it has the castling
    /// shape: two files along the back rank.
    pub const fn from_king_move(from: Coord, to: Coord) -> Option<CastlingSide> {
        if from.y != to.y {
            return None;
        }
        match to.x.wrapping_sub(from.x) {
            2 => Some(CastlingSide::KingSide),
            -2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    /// Back rank of `color` on a square board.
    pub const fn backrank(color: Color) -> i8 {
        match color {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub const fn rook_from_file(self) -> i8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    pub const fn king_to_file(self) -> i8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    pub const fn rook_to_file(self) -> i8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /// Original corner of the rook of this side.
    pub const fn rook_from(self, color: Color) -> Coord {
        Coord::square(self.rook_from_file(), CastlingSide::backrank(color))
    }

    pub const fn king_to(self, color: Color) -> Coord {
        Coord::square(self.king_to_file(), CastlingSide::backrank(color))
    }

    pub const fn rook_to(self, color: Color) -> Coord {
        Coord::square(self.rook_to_file(), CastlingSide::backrank(color))
    }

    #[must_use]
    #[inline]
    pub const fn other(self) -> CastlingSide {
        match self {
            CastlingSide::KingSide => CastlingSide::QueenSide,
            CastlingSide::QueenSide => CastlingSide::KingSide,
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

impl ops::Not for CastlingSide {
    type Output = CastlingSide;

    #[inline]
    fn not(self) -> CastlingSide {
        self.other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares() {
        assert_eq!(
            CastlingSide::KingSide.king_to(Color::White),
            Coord::square(6, 0)
        );
        assert_eq!(
            CastlingSide::QueenSide.rook_to(Color::Black),
            Coord::square(3, 7)
        );
        assert_eq!(
            CastlingSide::QueenSide.rook_from(Color::White),
            Coord::square(0, 0)
        );
        assert_eq!(!CastlingSide::KingSide, CastlingSide::QueenSide);
    }

    #[test]
    fn test_from_king_move() {
        let e1 = Coord::square(4, 0);
        assert_eq!(
            CastlingSide::from_king_move(e1, Coord::square(6, 0)),
            Some(CastlingSide::KingSide)
        );
        assert_eq!(
            CastlingSide::from_king_move(e1, Coord::square(2, 0)),
            Some(CastlingSide::QueenSide)
        );
        assert_eq!(CastlingSide::from_king_move(e1, Coord::square(5, 0)), None);
        assert_eq!(CastlingSide::from_king_move(e1, Coord::square(6, 1)), None);
    }
}
