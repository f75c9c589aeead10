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

use crate::{
    attacks,
    board::Board,
    checkers, chess,
    color::Color,
    connection,
    coord::{Coord, CoordList, Geometry, GeometryError},
    errors::{InvariantError, MoveError, Rejection},
    m::{Move, MoveKind, MoveList},
    role::Role,
    state::RuleState,
    types::Outcome,
    variant::{Family, Variant},
};

/// Everything needed to restore a [`Game`] to an earlier point.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    board: Board,
    state: RuleState,
    turn: Color,
    plies: u32,
}

impl Snapshot {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub const fn state(&self) -> &RuleState {
        &self.state
    }

    pub const fn turn(&self) -> Color {
        self.turn
    }

    pub const fn plies(&self) -> u32 {
        self.plies
    }
}

/// A game session: board, rule state, side to move and undo history.
///
/// # Examples
///
/// ```
/// use stratagem::{Color, Coord, Game, Move, MoveKind, Outcome, Variant};
///
/// let mut game = Game::new(Variant::Chess);
/// for (from, to) in [((5, 1), (5, 2)), ((4, 6), (4, 4)), ((6, 1), (6, 3)), ((3, 7), (7, 3))] {
///     game.play(Move::Normal {
///         from: Coord::square(from.0, from.1),
///         to: Coord::square(to.0, to.1),
///     })?;
/// }
///
/// assert!(game.is_in_check()?);
/// assert_eq!(game.outcome()?, Some(Outcome::Decisive { winner: Color::Black }));
///
/// game.undo();
/// assert_eq!(game.outcome()?, None);
/// # Ok::<_, stratagem::MoveError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    variant: Variant,
    board: Board,
    state: RuleState,
    turn: Color,
    plies: u32,
    history: Vec<Snapshot>,
}

impl Game {
    /// Starts a game of `variant` from its starting layout.
    pub fn new(variant: Variant) -> Game {
        Game::from_board(variant, variant.board(), Color::White)
    }

    /// Starts a connection game on a hexagonal board of the given radius.
    ///
    /// # Errors
    ///
    /// Errors if the radius is not supported, see [`Geometry::hex()`].
    pub fn connection(radius: u8) -> Result<Game, GeometryError> {
        let geometry = Geometry::hex(radius)?;
        Ok(Game::from_board(
            Variant::Connection,
            Board::empty(geometry),
            Color::White,
        ))
    }

    /// Starts a game of `variant` from an arbitrary position with fresh
    /// rule state: nothing has moved and no en passant is pending. The
    /// board takes the pawn rules of `variant`.
    pub fn from_board(variant: Variant, mut board: Board, turn: Color) -> Game {
        board.set_pawn_rules(variant.pawn_rules());
        Game {
            variant,
            board,
            state: RuleState::default(),
            turn,
            plies: 0,
            history: Vec::new(),
        }
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn state(&self) -> &RuleState {
        &self.state
    }

    /// Side to move. During a checkers capture chain this stays the side
    /// that started the chain.
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// Number of moves applied so far. Every jump of a checkers chain
    /// counts.
    pub const fn plies(&self) -> u32 {
        self.plies
    }

    /// Number of snapshots available to [`Game::undo()`].
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn family(&self) -> Family {
        self.variant.family()
    }

    fn log_invariant<T>(&self, result: Result<T, InvariantError>) -> Result<T, InvariantError> {
        result.inspect_err(|err| {
            tracing::warn!(variant = %self.variant, error = %err, "inconsistent game state");
        })
    }

    /// Validates a move of the side to move and classifies it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Rejected`] if the move is illegal and
    /// [`MoveError::Corrupt`] if the board is inconsistent with the rules.
    pub fn validate(&self, m: Move) -> Result<MoveKind, MoveError> {
        let result = match self.family() {
            Family::Chess => chess::validate(&self.board, &self.state, m, self.turn),
            Family::Checkers => checkers::validate(&self.board, &self.state, m, self.turn),
            Family::Connection => connection::validate(&self.board, m, self.turn),
        };
        match result {
            Err(MoveError::Rejected(rejection)) => {
                tracing::trace!(%m, side = %self.turn, %rejection, "move rejected");
            }
            Err(MoveError::Corrupt(err)) => {
                tracing::warn!(%m, side = %self.turn, error = %err, "inconsistent game state");
            }
            Ok(_) => (),
        }
        result
    }

    /// Commits a move that [`Game::validate()`] classified as `kind`.
    ///
    /// `promotion` selects the role of a promoting pawn and defaults to a
    /// queen. The previous state is pushed to the undo history.
    ///
    /// # Errors
    ///
    /// Rejects promotion roles the variant does not allow and moves that
    /// cannot be applied at all. The game is unchanged on error.
    pub fn apply(
        &mut self,
        m: Move,
        kind: MoveKind,
        promotion: Option<Role>,
    ) -> Result<(), MoveError> {
        if promotion.is_some_and(|role| !self.variant.promotion_roles().contains(&role)) {
            return Err(Rejection::BadPromotion.into());
        }

        let before = self.snapshot();
        let result = match self.family() {
            Family::Chess => chess::apply(&mut self.board, &mut self.state, m, kind, promotion),
            Family::Checkers => {
                if promotion.is_some() {
                    Err(Rejection::BadPromotion.into())
                } else {
                    checkers::apply(&mut self.board, &mut self.state, m, kind)
                }
            }
            Family::Connection => {
                connection::apply(&mut self.board, m, self.turn).map(|_| ())
            }
        };
        if let Err(err) = result {
            self.restore(before);
            return Err(err);
        }

        tracing::debug!(%m, %kind, side = %self.turn, ply = self.plies, "move applied");
        self.history.push(before);
        self.plies += 1;
        match self.state.forced {
            Some(forced) if self.family() == Family::Checkers => {
                tracing::debug!(%forced, side = %self.turn, "capture chain continues");
            }
            _ => self.turn = !self.turn,
        }
        Ok(())
    }

    /// Validates and applies a move, promoting to a queen.
    ///
    /// # Errors
    ///
    /// Errors like [`Game::validate()`] and [`Game::apply()`].
    pub fn play(&mut self, m: Move) -> Result<MoveKind, MoveError> {
        let kind = self.validate(m)?;
        self.apply(m, kind, None)?;
        Ok(kind)
    }

    /// Validates and applies a move, promoting a pawn to `role`.
    ///
    /// # Errors
    ///
    /// Errors like [`Game::play()`], and rejects moves that do not promote.
    pub fn play_promoting(&mut self, m: Move, role: Role) -> Result<MoveKind, MoveError> {
        let kind = self.validate(m)?;
        self.apply(m, kind, Some(role))?;
        Ok(kind)
    }

    /// Whether `m` is a pawn move onto a promotion cell.
    pub fn is_promotion(&self, m: Move) -> bool {
        self.family() == Family::Chess && chess::is_promotion(&self.board, m)
    }

    /// Legal moves of the piece on `from`. Empty if the cell is empty or
    /// holds a piece of the side not to move. In the connection game this
    /// is the placement on `from`, if legal.
    ///
    /// # Errors
    ///
    /// Errors if the board is inconsistent with the rules.
    pub fn legal_moves_from(&self, from: Coord) -> Result<MoveList, InvariantError> {
        let result = match self.family() {
            Family::Chess => chess::legal_moves_from(&self.board, &self.state, from, self.turn),
            Family::Checkers => {
                checkers::legal_moves_from(&self.board, &self.state, from, self.turn)
            }
            Family::Connection => Ok(connection::legal_moves(&self.board)
                .into_iter()
                .filter(|m| m.to() == from)
                .collect()),
        };
        self.log_invariant(result)
    }

    /// All legal moves of the side to move.
    ///
    /// # Errors
    ///
    /// Errors if the board is inconsistent with the rules.
    pub fn legal_moves(&self) -> Result<MoveList, InvariantError> {
        let result = match self.family() {
            Family::Chess => chess::legal_moves(&self.board, &self.state, self.turn),
            Family::Checkers => checkers::legal_moves(&self.board, &self.state, self.turn),
            Family::Connection => Ok(connection::legal_moves(&self.board)),
        };
        self.log_invariant(result)
    }

    /// Whether the side to move is in check. Always `false` outside the
    /// chess family.
    ///
    /// # Errors
    ///
    /// Errors if the board is inconsistent with the rules.
    pub fn is_in_check(&self) -> Result<bool, InvariantError> {
        match self.family() {
            Family::Chess => self.log_invariant(attacks::is_in_check(&self.board, self.turn)),
            Family::Checkers | Family::Connection => Ok(false),
        }
    }

    /// The outcome, or `None` while the game continues.
    ///
    /// # Errors
    ///
    /// Errors if the board is inconsistent with the rules.
    pub fn outcome(&self) -> Result<Option<Outcome>, InvariantError> {
        let result = match self.family() {
            Family::Chess => chess::outcome(&self.board, &self.state, self.turn),
            Family::Checkers => checkers::outcome(&self.board, &self.state, self.turn),
            Family::Connection => Ok(connection::outcome(&self.board)),
        };
        let outcome = self.log_invariant(result)?;
        if let Some(outcome) = outcome {
            tracing::debug!(variant = %self.variant, %outcome, plies = self.plies, "game over");
        }
        Ok(outcome)
    }

    /// Whether the game has been decided.
    ///
    /// # Errors
    ///
    /// Errors if the board is inconsistent with the rules.
    pub fn is_game_over(&self) -> Result<bool, InvariantError> {
        self.outcome().map(|outcome| outcome.is_some())
    }

    /// Cells of pieces of `defender` that the opponent could capture:
    /// attacked pieces in the chess family, jumpable pieces in checkers.
    /// Nothing can be captured in the connection game.
    ///
    /// # Errors
    ///
    /// Errors if the board is inconsistent with the rules.
    pub fn threatened(&self, defender: Color) -> Result<CoordList, InvariantError> {
        let result = match self.family() {
            Family::Chess => chess::threatened(&self.board, defender),
            Family::Checkers => checkers::threatened(&self.board, defender),
            Family::Connection => Ok(CoordList::new()),
        };
        self.log_invariant(result)
    }

    /// Copies the current board and rule state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            state: self.state,
            turn: self.turn,
            plies: self.plies,
        }
    }

    /// Restores a snapshot verbatim. The undo history is kept.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.state = snapshot.state;
        self.turn = snapshot.turn;
        self.plies = snapshot.plies;
    }

    /// Takes back the last applied move. Returns `false` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.restore(snapshot);
                tracing::debug!(side = %self.turn, ply = self.plies, "move undone");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_promotion_leaves_game_unchanged() {
        let mut game = Game::new(Variant::Chess);
        let before = game.snapshot();
        let m = Move::Normal {
            from: Coord::square(4, 1),
            to: Coord::square(4, 3),
        };
        assert_eq!(
            game.play_promoting(m, Role::Knight),
            Err(MoveError::Rejected(Rejection::BadPromotion))
        );
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.history_len(), 0);

        assert_eq!(
            game.play_promoting(m, Role::Camel),
            Err(MoveError::Rejected(Rejection::BadPromotion))
        );
    }

    #[test]
    fn test_undo_empty() {
        let mut game = Game::new(Variant::Checkers);
        assert!(!game.undo());
        assert_eq!(game.legal_moves().map(|m| m.len()), Ok(7));
        assert_eq!(game.is_in_check(), Ok(false));
    }

    #[test]
    fn test_connection_radius() {
        assert!(Game::connection(0).is_err());
        let game = Game::connection(3).expect("valid radius");
        assert_eq!(game.board().geometry(), Geometry::Hex { radius: 3 });
        assert_eq!(game.legal_moves().map(|m| m.len()), Ok(37));
        assert_eq!(game.threatened(Color::White).map(|t| t.len()), Ok(0));
        assert_eq!(game.outcome(), Ok(None));
    }
}
