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

use std::{error::Error, fmt, str::FromStr};

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
///
/// Pieces are plain values. They carry no position: the board decides
/// where a piece stands and every query supplies the coordinate.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Gets the diagram symbol of the piece.
    ///
    /// Chess-family pieces use uppercase letters for White and lowercase
    /// letters for Black. Checkers pieces use `o`/`O` for White men and
    /// kings and `x`/`X` for Black men and kings. Stones are `S` and `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratagem::{Color, Piece, Role};
    ///
    /// assert_eq!(Role::Knight.of(Color::White).char(), 'N');
    /// assert_eq!(Role::Crowned.of(Color::Black).char(), 'X');
    /// ```
    pub fn char(self) -> char {
        match self.role {
            Role::Man => self.color.fold('o', 'x'),
            Role::Crowned => self.color.fold('O', 'X'),
            Role::Stone => self.color.fold('S', 's'),
            role => self.color.fold(role.upper_char(), role.char()),
        }
    }

    /// Parses a diagram symbol, see [`Piece::char()`].
    pub fn from_char(ch: char) -> Option<Piece> {
        Some(match ch {
            'o' => Role::Man.of(Color::White),
            'O' => Role::Crowned.of(Color::White),
            'x' => Role::Man.of(Color::Black),
            'X' => Role::Crowned.of(Color::Black),
            'S' => Role::Stone.of(Color::White),
            's' => Role::Stone.of(Color::Black),
            _ => Role::from_char(ch)?.of(Color::from_white(ch.is_ascii_uppercase())),
        })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Outcome of a game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// One side won. In the chess family this is checkmate, in checkers the
    /// loser had no pieces or no legal move, in the connection game the
    /// winner joined their two edges.
    Decisive { winner: Color },
    /// Stalemate, or a full connection board without a winner.
    Draw,
}

impl Outcome {
    pub const fn from_winner(winner: Option<Color>) -> Outcome {
        match winner {
            Some(winner) => Outcome::Decisive { winner },
            None => Outcome::Draw,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }

    pub const fn is_decisive(self) -> bool {
        matches!(self, Outcome::Decisive { .. })
    }

    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing the syntax of an invalid outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOutcomeError;

impl fmt::Display for ParseOutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid outcome")
    }
}

impl Error for ParseOutcomeError {}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Outcome, ParseOutcomeError> {
        Ok(match s {
            "1-0" => Outcome::Decisive {
                winner: Color::White,
            },
            "0-1" => Outcome::Decisive {
                winner: Color::Black,
            },
            "1/2-1/2" => Outcome::Draw,
            _ => return Err(ParseOutcomeError),
        })
    }
}
