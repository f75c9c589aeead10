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

//! Rule engines for chess, fairy chess, checkers, hexagonal chess and a
//! hexagonal connection game.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use stratagem::{Game, Variant};
//!
//! let game = Game::new(Variant::Chess);
//! assert_eq!(game.legal_moves()?.len(), 20);
//! # Ok::<_, stratagem::InvariantError>(())
//! ```
//!
//! Play moves:
//!
//! ```
//! use stratagem::{Coord, Game, Move, MoveKind, Variant};
//!
//! let mut game = Game::new(Variant::Checkers);
//!
//! let kind = game.play(Move::Normal {
//!     from: Coord::square(2, 2),
//!     to: Coord::square(3, 3),
//! })?;
//! assert_eq!(kind, MoveKind::Quiet);
//! # Ok::<_, stratagem::MoveError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use stratagem::{Color, Coord, Game, Move, Outcome};
//!
//! let mut game = Game::connection(1)?;
//! for (q, r) in [(0, -1), (-1, 0), (0, 0), (1, 0), (0, 1)] {
//!     game.play(Move::Put { to: Coord::hex(q, r) })?;
//! }
//! assert_eq!(game.outcome()?, Some(Outcome::Decisive { winner: Color::White }));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Also supports a text [notation] for cells and moves.
//!
//! # Logging
//!
//! Rejected moves are reported as [`tracing`](https://docs.rs/tracing/0.1)
//! events at `TRACE` level, applied and undone moves and finished games at
//! `DEBUG` level, and boards that are inconsistent with the rules at `WARN`
//! level. Install a subscriber to see them.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for plain value types, for fuzzing.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![doc(html_root_url = "https://docs.rs/stratagem/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod coord;
mod errors;
mod game;
mod m;
mod perft;
mod role;
mod state;
mod types;

pub mod attacks;
pub mod board;
pub mod checkers;
pub mod chess;
pub mod connection;
pub mod movegen;
pub mod notation;
pub mod variant;

pub use board::{Board, ParseBoardError};
pub use castling_side::CastlingSide;
pub use color::{Color, ParseColorError};
pub use coord::{
    Coord, CoordList, Coords, Geometry, GeometryError, PawnRules, MAX_CELLS, MAX_HEX_RADIUS,
};
pub use errors::{InvariantError, MoveError, Rejection};
pub use game::{Game, Snapshot};
pub use m::{Move, MoveKind, MoveList};
pub use perft::perft;
pub use role::Role;
pub use state::{EnPassant, Moved, RuleState};
pub use types::{Outcome, ParseOutcomeError, Piece};
pub use variant::{Family, ParseVariantError, Variant};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Coord {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
