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

//! Rejections of illegal moves and internal invariant violations.

use std::{error::Error, fmt};

use crate::{coord::Coord, types::Piece};

/// Reason why a move was rejected.
///
/// Rejections are ordinary outcomes of validating user input. The game
/// state is unchanged when a move is rejected.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Rejection {
    /// Origin or destination is not on the board.
    OutOfBounds,
    /// No piece on the origin.
    EmptySquare,
    /// The piece on the origin belongs to the opponent.
    WrongSide,
    /// The destination holds a piece of the mover.
    OwnPiece,
    /// The destination of a placement or a checkers step is not empty.
    Occupied,
    /// The piece cannot move like that.
    IllegalShape,
    /// King or rook moved, cells between are occupied, or the king would
    /// pass through check.
    CastlingUnavailable,
    /// The move would leave the mover's king attacked.
    SelfCheck,
    /// A capture is available, so quiet moves are illegal.
    CaptureRequired,
    /// A capture chain is in progress with another piece.
    ChainPieceOnly,
    /// A capture chain is in progress and must continue with a capture.
    ChainCaptureRequired,
    /// The requested promotion role is not allowed, or a promotion was
    /// requested for a move that does not promote.
    BadPromotion,
    /// A placement in a game of moving pieces, or the other way around.
    WrongMoveType,
    /// The game is already decided.
    GameOver,
}

impl Rejection {
    pub const fn reason(self) -> &'static str {
        match self {
            Rejection::OutOfBounds => "cell is off the board",
            Rejection::EmptySquare => "no piece on origin",
            Rejection::WrongSide => "not your piece",
            Rejection::OwnPiece => "destination holds your own piece",
            Rejection::Occupied => "destination is occupied",
            Rejection::IllegalShape => "piece cannot move like that",
            Rejection::CastlingUnavailable => "castling not available",
            Rejection::SelfCheck => "move leaves king in check",
            Rejection::CaptureRequired => "capture is mandatory",
            Rejection::ChainPieceOnly => "capture chain must continue with the same piece",
            Rejection::ChainCaptureRequired => "capture chain must continue with a capture",
            Rejection::BadPromotion => "invalid promotion",
            Rejection::WrongMoveType => "wrong move type for this game",
            Rejection::GameOver => "game is over",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl Error for Rejection {}

/// Internal inconsistency between the board and the rules.
///
/// These cannot be caused by well-formed moves on a board created from a
/// variant layout. They can be caused by hand-edited boards, for example a
/// checkers man placed into a chess game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum InvariantError {
    /// A piece stands on a board whose geometry or rule family does not
    /// know how it moves.
    UnsupportedPiece { piece: Piece, at: Coord },
    /// The piece that must continue a capture chain is missing.
    ForcedPieceMissing { at: Coord },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvariantError::UnsupportedPiece { piece, at } => {
                write!(f, "unsupported piece {piece} at {at}")
            }
            InvariantError::ForcedPieceMissing { at } => {
                write!(f, "forced piece missing at {at}")
            }
        }
    }
}

impl Error for InvariantError {}

/// Error when validating or applying a move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MoveError {
    /// The move is illegal.
    Rejected(Rejection),
    /// The board is inconsistent with the rules. The operation was aborted.
    Corrupt(InvariantError),
}

impl MoveError {
    /// Gets the rejection, if the move was merely illegal.
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            MoveError::Rejected(rejection) => Some(rejection),
            MoveError::Corrupt(_) => None,
        }
    }

    pub const fn is_corrupt(self) -> bool {
        matches!(self, MoveError::Corrupt(_))
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Rejected(rejection) => write!(f, "illegal move: {rejection}"),
            MoveError::Corrupt(err) => write!(f, "corrupt game state: {err}"),
        }
    }
}

impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MoveError::Rejected(rejection) => Some(rejection),
            MoveError::Corrupt(err) => Some(err),
        }
    }
}

impl From<Rejection> for MoveError {
    fn from(rejection: Rejection) -> MoveError {
        MoveError::Rejected(rejection)
    }
}

impl From<InvariantError> for MoveError {
    fn from(err: InvariantError) -> MoveError {
        MoveError::Corrupt(err)
    }
}
