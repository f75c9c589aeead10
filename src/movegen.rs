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

//! Pseudo-legal destinations and attack sets of single pieces.
//!
//! Nothing here knows about check. The chess validator filters
//! pseudo-legal moves by simulating them, see [`crate::chess`].
//!
//! # Examples
//!
//! ```
//! use stratagem::{movegen, Coord, Variant};
//!
//! let board = Variant::Chess.board();
//! let knight = movegen::pseudo_moves(&board, Coord::square(6, 0), None)?;
//! assert_eq!(knight.len(), 2);
//! # Ok::<_, stratagem::InvariantError>(())
//! ```

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, CoordList, Geometry},
    errors::InvariantError,
    role::Role,
    state::EnPassant,
    types::Piece,
};

type Delta = (i8, i8);

const SQUARE_ROOK: [Delta; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const SQUARE_BISHOP: [Delta; 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
const SQUARE_KING: [Delta; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
const SQUARE_KNIGHT: [Delta; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const SQUARE_CAMEL: [Delta; 8] = [
    (1, 3),
    (3, 1),
    (3, -1),
    (1, -3),
    (-1, -3),
    (-3, -1),
    (-3, 1),
    (-1, 3),
];

// Edge neighbours, counter-clockwise starting east.
const HEX_ROOK: [Delta; 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];
// Sums of consecutive edge neighbours.
const HEX_BISHOP: [Delta; 6] = [(2, -1), (1, -2), (-1, -1), (-2, 1), (-1, 2), (1, 1)];
const HEX_KING: [Delta; 12] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (2, -1),
    (1, -2),
    (-1, -1),
    (-2, 1),
    (-1, 2),
    (1, 1),
];
// Two steps along an edge neighbour, then one step along an adjacent one.
const HEX_KNIGHT: [Delta; 12] = [
    (3, -1),
    (2, 1),
    (3, -2),
    (2, -3),
    (1, -3),
    (-1, -2),
    (-2, -1),
    (-3, 1),
    (-3, 2),
    (-2, 3),
    (-1, 3),
    (1, 2),
];

/// Straight slider directions of the geometry.
pub fn rook_directions(geometry: Geometry) -> &'static [Delta] {
    match geometry {
        Geometry::Square => &SQUARE_ROOK,
        Geometry::Hex { .. } => &HEX_ROOK,
    }
}

/// Diagonal slider directions of the geometry.
pub fn bishop_directions(geometry: Geometry) -> &'static [Delta] {
    match geometry {
        Geometry::Square => &SQUARE_BISHOP,
        Geometry::Hex { .. } => &HEX_BISHOP,
    }
}

pub fn king_deltas(geometry: Geometry) -> &'static [Delta] {
    match geometry {
        Geometry::Square => &SQUARE_KING,
        Geometry::Hex { .. } => &HEX_KING,
    }
}

pub fn knight_deltas(geometry: Geometry) -> &'static [Delta] {
    match geometry {
        Geometry::Square => &SQUARE_KNIGHT,
        Geometry::Hex { .. } => &HEX_KNIGHT,
    }
}

fn slides(board: &Board, from: Coord, color: Color, dirs: &[Delta], out: &mut CoordList) {
    for &dir in dirs {
        let mut c = from.offset(dir);
        while board.contains(c) {
            match board.color_at(c) {
                None => out.push(c),
                Some(other) => {
                    if other != color {
                        out.push(c);
                    }
                    break;
                }
            }
            c = c.offset(dir);
        }
    }
}

fn leaps(board: &Board, from: Coord, color: Color, deltas: &[Delta], out: &mut CoordList) {
    for &delta in deltas {
        let c = from.offset(delta);
        if board.contains(c) && board.color_at(c) != Some(color) {
            out.push(c);
        }
    }
}

fn unsupported(piece: Piece, at: Coord) -> InvariantError {
    InvariantError::UnsupportedPiece { piece, at }
}

/// Destinations shared by move and attack generation: everything except
/// pawn moves.
fn piece_moves(
    board: &Board,
    from: Coord,
    piece: Piece,
    out: &mut CoordList,
) -> Result<(), InvariantError> {
    let geometry = board.geometry();
    let color = piece.color;
    match piece.role {
        // Pawns move and attack differently, callers handle them.
        Role::Pawn => (),
        Role::Knight => leaps(board, from, color, knight_deltas(geometry), out),
        Role::Bishop => slides(board, from, color, bishop_directions(geometry), out),
        Role::Rook => slides(board, from, color, rook_directions(geometry), out),
        Role::Queen => {
            slides(board, from, color, rook_directions(geometry), out);
            slides(board, from, color, bishop_directions(geometry), out);
        }
        Role::King => leaps(board, from, color, king_deltas(geometry), out),
        Role::Archbishop => {
            slides(board, from, color, bishop_directions(geometry), out);
            leaps(board, from, color, knight_deltas(geometry), out);
        }
        Role::Chancellor => {
            slides(board, from, color, rook_directions(geometry), out);
            leaps(board, from, color, knight_deltas(geometry), out);
        }
        Role::Camel => match geometry {
            Geometry::Square => leaps(board, from, color, &SQUARE_CAMEL, out),
            Geometry::Hex { .. } => return Err(unsupported(piece, from)),
        },
        Role::Man | Role::Crowned | Role::Stone => return Err(unsupported(piece, from)),
    }
    Ok(())
}

fn pawn_moves(
    board: &Board,
    from: Coord,
    color: Color,
    en_passant: Option<EnPassant>,
    out: &mut CoordList,
) {
    let geometry = board.geometry();
    let forward = geometry.forward(color);

    let single = from.offset(forward);
    if board.is_vacant(single) {
        out.push(single);
        let double = single.offset(forward);
        if board.pawn_rules().is_home(geometry, color, from) && board.is_vacant(double) {
            out.push(double);
        }
    }

    for delta in board.pawn_rules().captures(color) {
        let c = from.offset(delta);
        match board.color_at(c) {
            Some(other) if other != color => out.push(c),
            None if board.contains(c)
                && en_passant.is_some_and(|ep| ep.side == color && ep.target == c) =>
            {
                out.push(c)
            }
            _ => (),
        }
    }
}

/// Gets the pseudo-legal destinations of the chess-family piece on `from`,
/// ignoring check and castling. An empty cell has no moves.
///
/// `en_passant` is the pending en passant record, if any. Pawns of the side
/// it names may capture onto its target.
///
/// # Errors
///
/// Errors if the piece does not move on this geometry, for example a camel
/// on a hexagonal board or a checkers man on any board.
pub fn pseudo_moves(
    board: &Board,
    from: Coord,
    en_passant: Option<EnPassant>,
) -> Result<CoordList, InvariantError> {
    let mut out = CoordList::new();
    if let Some(piece) = board.piece_at(from) {
        if piece.role == Role::Pawn {
            pawn_moves(board, from, piece.color, en_passant, &mut out);
        } else {
            piece_moves(board, from, piece, &mut out)?;
        }
    }
    Ok(out)
}

/// Gets the cells attacked by the chess-family piece on `from`.
///
/// Identical to [`pseudo_moves()`] except for pawns, which attack both
/// capture cells regardless of what stands there.
///
/// # Errors
///
/// Errors like [`pseudo_moves()`].
pub fn attacks(board: &Board, from: Coord) -> Result<CoordList, InvariantError> {
    let mut out = CoordList::new();
    if let Some(piece) = board.piece_at(from) {
        if piece.role == Role::Pawn {
            for delta in board.pawn_rules().captures(piece.color) {
                let c = from.offset(delta);
                if board.contains(c) {
                    out.push(c);
                }
            }
        } else {
            piece_moves(board, from, piece, &mut out)?;
        }
    }
    Ok(out)
}

fn checkers_piece(board: &Board, from: Coord) -> Result<Option<Piece>, InvariantError> {
    match board.piece_at(from) {
        None => Ok(None),
        Some(piece) if piece.role.is_checkers() && board.geometry() == Geometry::Square => {
            Ok(Some(piece))
        }
        Some(piece) => Err(unsupported(piece, from)),
    }
}

/// Diagonal directions a checkers piece may step in: forward only for men,
/// all four for crowned pieces.
fn checkers_step_directions(piece: Piece) -> &'static [Delta] {
    match (piece.role, piece.color) {
        (Role::Crowned, _) => &SQUARE_BISHOP,
        (_, Color::White) => &SQUARE_BISHOP[..2],
        (_, Color::Black) => &SQUARE_BISHOP[2..],
    }
}

/// Gets the non-capturing destinations of the checkers piece on `from`.
///
/// # Errors
///
/// Errors if the piece on `from` is not a checkers piece on a square board.
pub fn checkers_steps(board: &Board, from: Coord) -> Result<CoordList, InvariantError> {
    let mut out = CoordList::new();
    if let Some(piece) = checkers_piece(board, from)? {
        for &dir in checkers_step_directions(piece) {
            let c = from.offset(dir);
            if board.is_vacant(c) {
                out.push(c);
            }
        }
    }
    Ok(out)
}

/// Gets the landing cells of jumps by the checkers piece on `from`. Men and
/// crowned pieces both jump in all four diagonal directions.
///
/// # Errors
///
/// Errors like [`checkers_steps()`].
pub fn checkers_jumps(board: &Board, from: Coord) -> Result<CoordList, InvariantError> {
    let mut out = CoordList::new();
    if let Some(piece) = checkers_piece(board, from)? {
        for &(dx, dy) in &SQUARE_BISHOP {
            let over = from.offset((dx, dy));
            let landing = over.offset((dx, dy));
            if board.color_at(over) == Some(!piece.color) && board.is_vacant(landing) {
                out.push(landing);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::PawnRules;

    fn board(geometry: Geometry, pieces: &[(Coord, Piece)]) -> Board {
        let mut board = Board::empty(geometry);
        for &(c, piece) in pieces {
            board.set_piece_at(c, piece);
        }
        board
    }

    #[test]
    fn test_hex_tables() {
        for (i, &(q, r)) in HEX_ROOK.iter().enumerate() {
            let (nq, nr) = HEX_ROOK[(i + 1) % 6];
            assert_eq!(HEX_BISHOP[i], (q + nq, r + nr));
        }
        for &(q, r) in &HEX_KNIGHT {
            let s = -q - r;
            assert_eq!(q.abs().max(r.abs()).max(s.abs()), 3);
        }
        let mut sorted = HEX_KNIGHT.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 12);
    }

    #[test]
    fn test_hex_center_mobility() {
        let geometry = Geometry::Hex { radius: 5 };
        let center = Coord::hex(0, 0);
        let expected = [
            (Role::Rook, 30),
            (Role::Bishop, 12),
            (Role::Queen, 42),
            (Role::King, 12),
            (Role::Knight, 12),
            (Role::Archbishop, 24),
            (Role::Chancellor, 42),
        ];
        for (role, count) in expected {
            let b = board(geometry, &[(center, role.of(Color::White))]);
            let moves = pseudo_moves(&b, center, None).expect("supported piece");
            assert_eq!(moves.len(), count, "{role:?}");
        }
    }

    #[test]
    fn test_unsupported() {
        let hex = Geometry::Hex { radius: 5 };
        let c = Coord::hex(0, 0);
        let b = board(hex, &[(c, Role::Camel.of(Color::White))]);
        assert!(pseudo_moves(&b, c, None).is_err());

        let b = board(Geometry::Square, &[(c, Color::White.man())]);
        assert!(pseudo_moves(&b, c, None).is_err());
        assert!(checkers_steps(&b, c).is_ok());

        let b = board(Geometry::Square, &[(c, Color::White.queen())]);
        assert!(checkers_jumps(&b, c).is_err());
    }

    #[test]
    fn test_slider_blocked() {
        let a1 = Coord::square(0, 0);
        let b = board(
            Geometry::Square,
            &[
                (a1, Color::White.rook()),
                (Coord::square(0, 3), Color::White.pawn()),
                (Coord::square(4, 0), Color::Black.rook()),
            ],
        );
        let mut moves = pseudo_moves(&b, a1, None).expect("rook moves");
        moves.sort_unstable();
        assert_eq!(
            moves.as_slice(),
            &[
                Coord::square(0, 1),
                Coord::square(0, 2),
                Coord::square(1, 0),
                Coord::square(2, 0),
                Coord::square(3, 0),
                Coord::square(4, 0),
            ]
        );
    }

    #[test]
    fn test_pawn_attacks_ignore_occupancy() {
        let e4 = Coord::square(4, 3);
        let b = board(Geometry::Square, &[(e4, Color::White.pawn())]);
        assert_eq!(pseudo_moves(&b, e4, None).map(|m| m.len()), Ok(1));
        assert_eq!(attacks(&b, e4).map(|m| m.len()), Ok(2));
    }

    #[test]
    fn test_mccooey_pawns() {
        let side = Coord::hex(1, 3);
        let central = Coord::hex(0, 3);
        let mut b = board(
            Geometry::Hex { radius: 5 },
            &[
                (side, Color::White.pawn()),
                (central, Color::White.pawn()),
                (Coord::hex(2, 1), Role::Knight.of(Color::Black)),
                (Coord::hex(-1, 2), Role::Knight.of(Color::Black)),
            ],
        );
        b.set_pawn_rules(PawnRules::McCooey);

        let mut moves = pseudo_moves(&b, side, None).expect("pawn moves");
        moves.sort_unstable();
        assert_eq!(
            moves.as_slice(),
            &[Coord::hex(1, 1), Coord::hex(1, 2), Coord::hex(2, 1)]
        );

        // The central pawn never double-steps.
        let mut moves = pseudo_moves(&b, central, None).expect("pawn moves");
        moves.sort_unstable();
        assert_eq!(moves.as_slice(), &[Coord::hex(-1, 2), Coord::hex(0, 2)]);

        let mut attacked = attacks(&b, central).expect("pawn attacks");
        attacked.sort_unstable();
        assert_eq!(attacked.as_slice(), &[Coord::hex(-1, 2), Coord::hex(1, 1)]);
    }

    #[test]
    fn test_pawn_en_passant() {
        let e5 = Coord::square(4, 4);
        let d6 = Coord::square(3, 5);
        let b = board(
            Geometry::Square,
            &[
                (e5, Color::White.pawn()),
                (Coord::square(3, 4), Color::Black.pawn()),
            ],
        );
        let ep = EnPassant {
            target: d6,
            captured: Coord::square(3, 4),
            side: Color::White,
        };
        assert!(pseudo_moves(&b, e5, Some(ep))
            .expect("pawn moves")
            .contains(&d6));
        let stale = EnPassant {
            side: Color::Black,
            ..ep
        };
        assert!(!pseudo_moves(&b, e5, Some(stale))
            .expect("pawn moves")
            .contains(&d6));
    }

    #[test]
    fn test_checkers_moves() {
        let c3 = Coord::square(2, 2);
        let b = board(
            Geometry::Square,
            &[
                (c3, Color::White.man()),
                (Coord::square(3, 3), Color::Black.man()),
                (Coord::square(1, 1), Color::Black.man()),
            ],
        );
        assert_eq!(
            checkers_steps(&b, c3).map(|m| m.into_iter().collect::<Vec<_>>()),
            Ok(vec![Coord::square(1, 3)])
        );
        let mut jumps = checkers_jumps(&b, c3).expect("checkers piece");
        jumps.sort_unstable();
        assert_eq!(
            jumps.as_slice(),
            &[Coord::square(0, 0), Coord::square(4, 4)]
        );
    }
}
