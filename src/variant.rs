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

//! Supported games and their starting layouts.

use std::{error::Error, fmt, str::FromStr};

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, Geometry, PawnRules},
    role::Role,
};

/// Radius of the default connection board.
pub const DEFAULT_CONNECTION_RADIUS: u8 = 5;

/// Radius of the hexagonal chess board.
pub const HEX_CHESS_RADIUS: u8 = 5;

/// Rule family of a [`Variant`].
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Family {
    /// Orthodox, fairy and both hexagonal chess games.
    Chess,
    Checkers,
    /// The stone-placing connection game.
    Connection,
}

/// A supported game.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Variant {
    /// Orthodox chess.
    Chess,
    /// Chess with a chancellor, a camel and an archbishop replacing the
    /// queen-side knight, the queen-side bishop and the king-side knight.
    Fairy,
    /// Checkers on the dark squares of an 8×8 board.
    Checkers,
    /// Glinski's hexagonal chess.
    HexChess,
    /// McCooey's hexagonal chess: a smaller army on the same board, pawns
    /// capturing onto the vertex neighbours.
    McCooey,
    /// The hexagonal connection game.
    Connection,
}

impl Variant {
    /// Gets the name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Chess => "chess",
            Variant::Fairy => "fairy",
            Variant::Checkers => "checkers",
            Variant::HexChess => "hexchess",
            Variant::McCooey => "mccooey",
            Variant::Connection => "connection",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Variant::Chess | Variant::Fairy | Variant::HexChess | Variant::McCooey => {
                Family::Chess
            }
            Variant::Checkers => Family::Checkers,
            Variant::Connection => Family::Connection,
        }
    }

    /// Default geometry. Only the connection game can be played on other
    /// sizes, see [`Game::connection()`](crate::Game::connection).
    pub const fn geometry(self) -> Geometry {
        match self {
            Variant::Chess | Variant::Fairy | Variant::Checkers => Geometry::Square,
            Variant::HexChess | Variant::McCooey => Geometry::Hex {
                radius: HEX_CHESS_RADIUS,
            },
            Variant::Connection => Geometry::Hex {
                radius: DEFAULT_CONNECTION_RADIUS,
            },
        }
    }

    /// Roles a pawn may promote to. Empty for games without pawns.
    pub const fn promotion_roles(self) -> &'static [Role] {
        match self {
            Variant::Chess | Variant::HexChess | Variant::McCooey => {
                &[Role::Queen, Role::Rook, Role::Bishop, Role::Knight]
            }
            Variant::Fairy => &[
                Role::Queen,
                Role::Rook,
                Role::Bishop,
                Role::Knight,
                Role::Archbishop,
                Role::Chancellor,
                Role::Camel,
            ],
            Variant::Checkers | Variant::Connection => &[],
        }
    }

    /// How pawns move and capture in this game.
    pub const fn pawn_rules(self) -> PawnRules {
        match self {
            Variant::McCooey => PawnRules::McCooey,
            _ => PawnRules::default_for(self.geometry()),
        }
    }

    /// Creates the starting board.
    pub fn board(self) -> Board {
        match self {
            Variant::Chess => square_chess(&[
                Role::Rook,
                Role::Knight,
                Role::Bishop,
                Role::Queen,
                Role::King,
                Role::Bishop,
                Role::Knight,
                Role::Rook,
            ]),
            Variant::Fairy => square_chess(&[
                Role::Rook,
                Role::Chancellor,
                Role::Camel,
                Role::Queen,
                Role::King,
                Role::Bishop,
                Role::Archbishop,
                Role::Rook,
            ]),
            Variant::Checkers => checkers(),
            Variant::HexChess => hex_chess(),
            Variant::McCooey => mccooey(),
            Variant::Connection => Board::empty(self.geometry()),
        }
    }

    pub const ALL: [Variant; 6] = [
        Variant::Chess,
        Variant::Fairy,
        Variant::Checkers,
        Variant::HexChess,
        Variant::McCooey,
        Variant::Connection,
    ];
}

fn square_chess(backrank: &[Role; 8]) -> Board {
    let mut board = Board::empty(Geometry::Square);
    for (file, &role) in (0..).zip(backrank) {
        board.set_piece_at(Coord::square(file, 0), role.of(Color::White));
        board.set_piece_at(Coord::square(file, 1), Color::White.pawn());
        board.set_piece_at(Coord::square(file, 6), Color::Black.pawn());
        board.set_piece_at(Coord::square(file, 7), role.of(Color::Black));
    }
    board
}

fn checkers() -> Board {
    let mut board = Board::empty(Geometry::Square);
    for c in Geometry::Square.coords() {
        if (c.x + c.y) % 2 != 0 {
            continue;
        }
        match c.y {
            0..=2 => board.set_piece_at(c, Color::White.man()),
            5..=7 => board.set_piece_at(c, Color::Black.man()),
            _ => (),
        }
    }
    board
}

/// White's half of Glinski's layout. Black mirrors it.
const HEX_CHESS_WHITE: [(Role, i8, i8); 18] = [
    (Role::Pawn, -4, 5),
    (Role::Pawn, -3, 4),
    (Role::Pawn, -2, 3),
    (Role::Pawn, -1, 2),
    (Role::Pawn, 0, 1),
    (Role::Pawn, 1, 1),
    (Role::Pawn, 2, 1),
    (Role::Pawn, 3, 1),
    (Role::Pawn, 4, 1),
    (Role::Rook, -3, 5),
    (Role::Rook, 3, 2),
    (Role::Knight, -2, 5),
    (Role::Knight, 2, 3),
    (Role::Bishop, 0, 5),
    (Role::Bishop, 0, 4),
    (Role::Bishop, 0, 3),
    (Role::Queen, -1, 5),
    (Role::King, 1, 4),
];

fn hex_chess() -> Board {
    let geometry = Variant::HexChess.geometry();
    let mut board = Board::empty(geometry);
    for (role, q, r) in HEX_CHESS_WHITE {
        let c = Coord::hex(q, r);
        board.set_piece_at(c, role.of(Color::White));
        board.set_piece_at(geometry.flip(c), role.of(Color::Black));
    }
    board
}

/// White's half of McCooey's layout. Black is its point reflection.
const MCCOOEY_WHITE: [(Role, i8, i8); 13] = [
    (Role::Pawn, -3, 3),
    (Role::Pawn, -2, 3),
    (Role::Pawn, -1, 3),
    (Role::Pawn, 0, 3),
    (Role::Pawn, 1, 3),
    (Role::Pawn, 2, 3),
    (Role::Rook, -3, 4),
    (Role::Knight, -1, 4),
    (Role::Knight, 1, 4),
    (Role::Bishop, -2, 4),
    (Role::Bishop, 0, 4),
    (Role::Queen, -1, 5),
    (Role::King, 0, 5),
];

fn mccooey() -> Board {
    let mut board = Board::empty(Variant::McCooey.geometry());
    board.set_pawn_rules(PawnRules::McCooey);
    for (role, q, r) in MCCOOEY_WHITE {
        board.set_piece_at(Coord::hex(q, r), role.of(Color::White));
        board.set_piece_at(Coord::hex(-q, -r), role.of(Color::Black));
    }
    board
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an unknown variant name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseVariantError;

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown variant")
    }
}

impl Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Variant, ParseVariantError> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or(ParseVariantError)
    }
}
