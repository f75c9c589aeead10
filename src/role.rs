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

use crate::{color::Color, types::Piece};

/// Piece types of every supported game.
///
/// Orthodox chess pieces come first, followed by the fairy pieces, the two
/// checkers pieces and the connection-game stone.
///
/// # Examples
///
/// ```
/// use stratagem::Role;
///
/// assert_eq!(Role::from_char('A'), Some(Role::Archbishop));
/// assert_eq!(Role::Camel.char(), 'm');
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
    /// Moves as bishop or knight.
    Archbishop = 7,
    /// Moves as rook or knight.
    Chancellor = 8,
    /// A (3, 1)-leaper.
    Camel = 9,
    /// An uncrowned checkers piece.
    Man = 10,
    /// A crowned checkers piece, moving diagonally in all four directions.
    Crowned = 11,
    /// A connection-game stone. Stones are placed and never move.
    Stone = 12,
}

impl Role {
    /// Gets the piece type from its English letter. Only the chess-family
    /// roles have letters of their own; checkers pieces and stones are
    /// written with dedicated symbols, see [`Piece::from_char()`].
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            'A' | 'a' => Some(Role::Archbishop),
            'C' | 'c' => Some(Role::Chancellor),
            'M' | 'm' => Some(Role::Camel),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of the given color.
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece { color, role: self }
    }

    /// Gets the lowercase letter for the piece type.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
            Role::Archbishop => 'a',
            Role::Chancellor => 'c',
            Role::Camel => 'm',
            Role::Man => 'o',
            Role::Crowned => 'd',
            Role::Stone => 's',
        }
    }

    /// Gets the uppercase letter for the piece type.
    pub const fn upper_char(self) -> char {
        self.char().to_ascii_uppercase()
    }

    /// Whether this role belongs to the chess family (orthodox or fairy).
    pub const fn is_chess(self) -> bool {
        !matches!(self, Role::Man | Role::Crowned | Role::Stone)
    }

    /// Whether this role belongs to checkers.
    pub const fn is_checkers(self) -> bool {
        matches!(self, Role::Man | Role::Crowned)
    }

    /// Whether a pawn may promote to this role in some variant.
    pub const fn is_promotion_candidate(self) -> bool {
        matches!(
            self,
            Role::Knight
                | Role::Bishop
                | Role::Rook
                | Role::Queen
                | Role::Archbishop
                | Role::Chancellor
                | Role::Camel
        )
    }

    /// All roles, in discriminant order.
    pub const ALL: [Role; 12] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
        Role::Archbishop,
        Role::Chancellor,
        Role::Camel,
        Role::Man,
        Role::Crowned,
        Role::Stone,
    ];
}

macro_rules! int_from_role_impl {
    ($($t:ty)+) => {
        $(impl From<Role> for $t {
            #[inline]
            fn from(role: Role) -> $t {
                role as $t
            }
        })+
    }
}

int_from_role_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_chars() {
        for role in Role::ALL.into_iter().filter(|r| r.is_chess()) {
            assert_eq!(Role::from_char(role.char()), Some(role));
            assert_eq!(Role::from_char(role.upper_char()), Some(role));
        }
        assert_eq!(Role::from_char('x'), None);
        assert_eq!(u8::from(Role::Stone), 12);
    }
}
