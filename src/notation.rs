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

//! Read and write cells and moves as text.
//!
//! Square boards use algebraic cell names like `e4`. Hexagonal boards use
//! axial coordinates written as `q,r`, for example `0,-5` or `-3,2`.
//!
//! Moves are written as two cells, either run together (`e2e4`), separated
//! by whitespace (`e2 e4`, `0,1 0,-1`) or, on square boards, by a hyphen
//! (`e2-e4`). A promotion role may follow the destination (`e7e8n`,
//! `e7-e8=N`). Placements are written as `@` followed by a cell (`@0,0`).
//!
//! # Examples
//!
//! Parsing and playing a move:
//!
//! ```
//! use stratagem::{notation::MoveText, Game, MoveKind, Variant};
//!
//! let mut game = Game::new(Variant::Chess);
//! let text: MoveText = "e2-e4".parse()?;
//! assert_eq!(text.play(&mut game)?, MoveKind::Quiet);
//! assert_eq!(text.to_string(), "e2e4");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Writing moves from a position:
//!
//! ```
//! use stratagem::{notation::MoveText, Game, Variant};
//!
//! let game = Game::new(Variant::HexChess);
//! let geometry = game.board().geometry();
//! let names: Vec<String> = game
//!     .legal_moves()?
//!     .into_iter()
//!     .map(|m| MoveText::from_move(geometry, m, None).to_string())
//!     .collect();
//! assert!(names.contains(&"1,1 1,-1".to_owned()));
//! # Ok::<_, stratagem::InvariantError>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{
    coord::{Coord, Geometry},
    errors::{MoveError, Rejection},
    game::Game,
    m::{Move, MoveKind},
    role::Role,
};

/// How cells are named.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Style {
    /// File letter and rank number, `a1` to `h8`.
    Algebraic,
    /// Signed axial coordinates, `q,r`.
    Axial,
}

impl Style {
    pub const fn of(geometry: Geometry) -> Style {
        match geometry {
            Geometry::Square => Style::Algebraic,
            Geometry::Hex { .. } => Style::Axial,
        }
    }
}

/// Error when parsing an invalid cell name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseCoordError;

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid cell name")
    }
}

impl Error for ParseCoordError {}

/// Error when parsing invalid move text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseMoveError;

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid move text")
    }
}

impl Error for ParseMoveError {}

impl From<ParseCoordError> for ParseMoveError {
    fn from(_: ParseCoordError) -> ParseMoveError {
        ParseMoveError
    }
}

/// A named cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct CellName {
    pub style: Style,
    pub coord: Coord,
}

impl CellName {
    pub const fn new(geometry: Geometry, coord: Coord) -> CellName {
        CellName {
            style: Style::of(geometry),
            coord,
        }
    }

    /// Parses a cell name. Off-board axial coordinates are accepted, but
    /// algebraic names must lie on the 8×8 board.
    ///
    /// # Errors
    ///
    /// Errors if the input is neither an algebraic name nor an axial pair.
    pub fn from_ascii(s: &[u8]) -> Result<CellName, ParseCoordError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(CellName {
                style: Style::Algebraic,
                coord: Coord::square((file - b'a') as i8, (rank - b'1') as i8),
            }),
            _ => {
                let comma = s.iter().position(|&b| b == b',').ok_or(ParseCoordError)?;
                let q = btoi::btoi(&s[..comma]).map_err(|_| ParseCoordError)?;
                let r = btoi::btoi(&s[comma + 1..]).map_err(|_| ParseCoordError)?;
                Ok(CellName {
                    style: Style::Axial,
                    coord: Coord::hex(q, r),
                })
            }
        }
    }
}

impl FromStr for CellName {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<CellName, ParseCoordError> {
        CellName::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Style::Algebraic => write!(
                f,
                "{}{}",
                char::from(b'a'.wrapping_add(self.coord.file() as u8)),
                i16::from(self.coord.rank()) + 1
            ),
            Style::Axial => write!(f, "{},{}", self.coord.q(), self.coord.r()),
        }
    }
}

/// A move in text form, with an optional promotion role.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct MoveText {
    pub style: Style,
    pub m: Move,
    pub promotion: Option<Role>,
}

/// Splits a destination token into the cell and an optional promotion
/// letter, accepting `=` before the letter.
fn split_promotion(token: &[u8]) -> Result<(&[u8], Option<Role>), ParseMoveError> {
    match token {
        [rest @ .., last] if last.is_ascii_alphabetic() && rest.last().is_some_and(|b| !b.is_ascii_lowercase()) => {
            let role = Role::from_char(char::from(*last)).ok_or(ParseMoveError)?;
            let cell = rest.strip_suffix(b"=").unwrap_or(rest);
            Ok((cell, Some(role)))
        }
        _ => Ok((token, None)),
    }
}

impl MoveText {
    pub const fn from_move(geometry: Geometry, m: Move, promotion: Option<Role>) -> MoveText {
        MoveText {
            style: Style::of(geometry),
            m,
            promotion,
        }
    }

    /// Parses move text.
    ///
    /// # Errors
    ///
    /// Errors if the text is not one of the accepted forms, if the two
    /// cells use different styles or if the promotion letter is unknown.
    pub fn from_ascii(s: &[u8]) -> Result<MoveText, ParseMoveError> {
        let s = s.trim_ascii();

        if let Some(cell) = s.strip_prefix(b"@") {
            let to = CellName::from_ascii(cell)?;
            return Ok(MoveText {
                style: to.style,
                m: Move::Put { to: to.coord },
                promotion: None,
            });
        }

        let tokens: Vec<&[u8]> = s
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
            .collect();
        let (from, to) = match *tokens.as_slice() {
            [from, to] => (from, to),
            [token] if token.len() >= 5 && token[2] == b'-' => (&token[..2], &token[3..]),
            [token] if token.len() >= 4 => (&token[..2], &token[2..]),
            _ => return Err(ParseMoveError),
        };

        let from = CellName::from_ascii(from)?;
        let (to, promotion) = split_promotion(to)?;
        let to = CellName::from_ascii(to)?;
        if from.style != to.style {
            return Err(ParseMoveError);
        }

        Ok(MoveText {
            style: from.style,
            m: Move::Normal {
                from: from.coord,
                to: to.coord,
            },
            promotion,
        })
    }

    /// Validates and plays the move in `game`.
    ///
    /// # Errors
    ///
    /// Rejects text written for another kind of board, and errors like
    /// [`Game::play()`] otherwise.
    pub fn play(&self, game: &mut Game) -> Result<MoveKind, MoveError> {
        if Style::of(game.board().geometry()) != self.style {
            return Err(Rejection::OutOfBounds.into());
        }
        match self.promotion {
            Some(role) => game.play_promoting(self.m, role),
            None => game.play(self.m),
        }
    }
}

impl FromStr for MoveText {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<MoveText, ParseMoveError> {
        MoveText::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for MoveText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |coord| CellName {
            style: self.style,
            coord,
        };
        match self.m {
            Move::Normal { from, to } => match self.style {
                Style::Algebraic => write!(f, "{}{}", cell(from), cell(to))?,
                Style::Axial => write!(f, "{} {}", cell(from), cell(to))?,
            },
            Move::Put { to } => write!(f, "@{}", cell(to))?,
        }
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}
