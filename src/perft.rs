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

use crate::{errors::MoveError, game::Game};

/// Counts legal move paths of a given length.
///
/// Paths ending early because the game is over are not counted. Promoting
/// moves count once, as a queen promotion. Every jump of a checkers chain
/// is a ply of its own. Useful for comparing, testing and debugging move
/// generation correctness and performance.
///
/// # Errors
///
/// Errors if a position on the way is inconsistent with the rules.
///
/// # Examples
///
/// ```
/// use stratagem::{perft, Game, Variant};
///
/// let game = Game::new(Variant::Chess);
/// assert_eq!(perft(&game, 1)?, 20);
/// assert_eq!(perft(&game, 2)?, 400);
/// assert_eq!(perft(&game, 3)?, 8902);
/// # Ok::<_, stratagem::MoveError>(())
/// ```
pub fn perft(game: &Game, depth: u32) -> Result<u64, MoveError> {
    if depth < 1 {
        return Ok(1);
    }

    let moves = game.legal_moves()?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for m in moves {
        let mut child = game.clone();
        child.play(m)?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}
