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

//! Rule state that is not visible on the board.

use bitflags::bitflags;

use crate::{castling_side::CastlingSide, color::Color, coord::Coord};

bitflags! {
    /// Pieces that have left their initial cell, as far as castling is
    /// concerned. Flags are set once and never cleared.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct Moved: u8 {
        const WHITE_KING = 1;
        const BLACK_KING = 2;
        const WHITE_KING_ROOK = 4;
        const WHITE_QUEEN_ROOK = 8;
        const BLACK_KING_ROOK = 16;
        const BLACK_QUEEN_ROOK = 32;
    }
}

impl Moved {
    pub const fn king(color: Color) -> Moved {
        match color {
            Color::White => Moved::WHITE_KING,
            Color::Black => Moved::BLACK_KING,
        }
    }

    pub const fn rook(color: Color, side: CastlingSide) -> Moved {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => Moved::WHITE_KING_ROOK,
            (Color::White, CastlingSide::QueenSide) => Moved::WHITE_QUEEN_ROOK,
            (Color::Black, CastlingSide::KingSide) => Moved::BLACK_KING_ROOK,
            (Color::Black, CastlingSide::QueenSide) => Moved::BLACK_QUEEN_ROOK,
        }
    }

    /// Flag of the rook whose original corner is `c`, if any.
    pub fn rook_origin(c: Coord) -> Option<Moved> {
        Color::ALL.into_iter().find_map(|color| {
            CastlingSide::ALL
                .into_iter()
                .find(|side| side.rook_from(color) == c)
                .map(|side| Moved::rook(color, side))
        })
    }
}

/// A pending en passant opportunity, valid for exactly one move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnPassant {
    /// The cell the double-stepping pawn skipped.
    pub target: Coord,
    /// The cell of the pawn that may be captured.
    pub captured: Coord,
    /// The side allowed to capture.
    pub side: Color,
}

/// Auxiliary rule state of a game session.
///
/// Passed by reference to the validators and by mutable reference to the
/// appliers of the rule families.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleState {
    pub moved: Moved,
    pub en_passant: Option<EnPassant>,
    /// The checkers piece that must continue a capture chain.
    pub forced: Option<Coord>,
}

impl RuleState {
    /// Whether the castling king and rook of `side` are both unmoved.
    pub fn may_castle(&self, color: Color, side: CastlingSide) -> bool {
        !self
            .moved
            .intersects(Moved::king(color) | Moved::rook(color, side))
    }

    /// En passant target that `side` may capture onto.
    pub fn en_passant_for(&self, side: Color) -> Option<EnPassant> {
        self.en_passant.filter(|ep| ep.side == side)
    }
}

impl Default for RuleState {
    fn default() -> RuleState {
        RuleState {
            moved: Moved::empty(),
            en_passant: None,
            forced: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_origin() {
        assert_eq!(
            Moved::rook_origin(Coord::square(7, 0)),
            Some(Moved::WHITE_KING_ROOK)
        );
        assert_eq!(
            Moved::rook_origin(Coord::square(0, 7)),
            Some(Moved::BLACK_QUEEN_ROOK)
        );
        assert_eq!(Moved::rook_origin(Coord::square(4, 0)), None);
    }

    #[test]
    fn test_may_castle() {
        let mut state = RuleState::default();
        assert!(state.may_castle(Color::White, CastlingSide::KingSide));
        state.moved |= Moved::WHITE_KING_ROOK;
        assert!(!state.may_castle(Color::White, CastlingSide::KingSide));
        assert!(state.may_castle(Color::White, CastlingSide::QueenSide));
        state.moved |= Moved::king(Color::White);
        assert!(!state.may_castle(Color::White, CastlingSide::QueenSide));
        assert!(state.may_castle(Color::Black, CastlingSide::QueenSide));
    }
}
