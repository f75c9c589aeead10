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

use std::{
    error::Error,
    fmt::{self, Write as _},
    iter::FusedIterator,
};

use crate::{
    color::Color,
    coord::{Coord, Coords, Geometry, PawnRules, MAX_CELLS},
    role::Role,
    types::Piece,
};

/// Piece positions on a board of some [`Geometry`].
///
/// Every cell of the geometry holds at most one piece. The set of cells is
/// fixed at construction.
///
/// # Examples
///
/// ```
/// use stratagem::{Board, Coord, Geometry, Variant};
///
/// let board = Variant::Chess.board();
/// assert_eq!(board.geometry(), Geometry::Square);
/// assert_eq!(board.piece_at(Coord::square(4, 0)).map(|p| p.char()), Some('K'));
///
/// assert_eq!(board.to_string(), concat!(
///     "r n b q k b n r\n",
///     "p p p p p p p p\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     "P P P P P P P P\n",
///     "R N B Q K B N R\n",
/// ));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "BoardRepr", try_from = "BoardRepr")
)]
pub struct Board {
    geometry: Geometry,
    pawns: PawnRules,
    cells: [Option<Piece>; MAX_CELLS],
}

impl Board {
    /// An empty board with the default [`PawnRules`] of the geometry.
    pub const fn empty(geometry: Geometry) -> Board {
        Board {
            geometry,
            pawns: PawnRules::default_for(geometry),
            cells: [None; MAX_CELLS],
        }
    }

    #[inline]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// How the pawns on this board move.
    #[inline]
    pub const fn pawn_rules(&self) -> PawnRules {
        self.pawns
    }

    pub fn set_pawn_rules(&mut self, pawns: PawnRules) {
        self.pawns = pawns;
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.geometry.contains(c)
    }

    /// Gets the piece on a cell. Off-board cells are always empty.
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        self.geometry.index(c).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn color_at(&self, c: Coord) -> Option<Color> {
        self.piece_at(c).map(|piece| piece.color)
    }

    #[inline]
    pub fn role_at(&self, c: Coord) -> Option<Role> {
        self.piece_at(c).map(|piece| piece.role)
    }

    /// Whether `c` is on the board and empty.
    #[inline]
    pub fn is_vacant(&self, c: Coord) -> bool {
        self.geometry
            .index(c)
            .is_some_and(|i| self.cells[i].is_none())
    }

    /// Puts a piece on a cell, replacing any previous occupant. Off-board
    /// cells are ignored.
    pub fn set_piece_at(&mut self, c: Coord, piece: Piece) {
        if let Some(i) = self.geometry.index(c) {
            self.cells[i] = Some(piece);
        }
    }

    /// Removes and returns the piece on a cell.
    pub fn remove_piece_at(&mut self, c: Coord) -> Option<Piece> {
        self.geometry.index(c).and_then(|i| self.cells[i].take())
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let piece = self.remove_piece_at(from)?;
        self.set_piece_at(to, piece);
        Some(piece)
    }

    /// Iterates over all occupied cells in index order.
    pub fn pieces(&self) -> Pieces<'_> {
        Pieces {
            board: self,
            coords: self.geometry.coords(),
        }
    }

    /// Iterates over the cells occupied by pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Number of pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Whether no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells[..self.geometry.len()].iter().all(Option::is_some)
    }

    /// Finds the king of `color`. If there are multiple kings, the first
    /// one in index order is returned.
    pub fn king_of(&self, color: Color) -> Option<Coord> {
        self.pieces()
            .find(|&(_, piece)| piece == color.king())
            .map(|(c, _)| c)
    }

    /// Applies `edit` to a disposable copy of the board and evaluates
    /// `inspect` on the result. The board itself is never changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratagem::{Coord, Variant};
    ///
    /// let board = Variant::Chess.board();
    /// let e2 = Coord::square(4, 1);
    /// let e4 = Coord::square(4, 3);
    ///
    /// let moved = board.simulate(
    ///     |b| {
    ///         b.relocate(e2, e4);
    ///     },
    ///     |b| b.piece_at(e4).is_some(),
    /// );
    /// assert!(moved);
    /// assert!(board.piece_at(e4).is_none());
    /// ```
    pub fn simulate<E, P, R>(&self, edit: E, inspect: P) -> R
    where
        E: FnOnce(&mut Board),
        P: FnOnce(&Board) -> R,
    {
        let mut copy = self.clone();
        edit(&mut copy);
        inspect(&copy)
    }

    /// Parses a text diagram.
    ///
    /// Each non-empty line is one row: from rank 8 down to rank 1 on square
    /// boards, from `r = -radius` down to `r = radius` on hexagonal boards.
    /// Every non-whitespace character is one cell, either `.` for empty or a
    /// piece symbol (see [`Piece::char()`]). Cells may be separated by
    /// spaces, and hexagonal rows may be indented.
    ///
    /// # Errors
    ///
    /// Errors if the number of rows or cells per row does not match the
    /// geometry, or if a symbol is unknown.
    pub fn from_diagram(geometry: Geometry, diagram: &str) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty(geometry);
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let expected_rows = match geometry {
            Geometry::Square => 8,
            Geometry::Hex { radius } => 2 * usize::from(radius) + 1,
        };
        if rows.len() != expected_rows {
            return Err(ParseBoardError::RowCount {
                expected: expected_rows,
                found: rows.len(),
            });
        }

        for (row, line) in rows.into_iter().enumerate() {
            let cells = row_coords(geometry, row);
            let symbols: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if symbols.len() != cells.len() {
                return Err(ParseBoardError::RowLength {
                    row,
                    expected: cells.len(),
                    found: symbols.len(),
                });
            }
            for (c, ch) in cells.into_iter().zip(symbols) {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_char(ch).ok_or(ParseBoardError::InvalidSymbol { ch })?;
                board.set_piece_at(c, piece);
            }
        }

        Ok(board)
    }
}

/// Cells of the `row`-th diagram row, in display order.
fn row_coords(geometry: Geometry, row: usize) -> Vec<Coord> {
    match geometry {
        Geometry::Square => {
            let rank = 7 - row as i8;
            (0..8).map(|file| Coord::square(file, rank)).collect()
        }
        Geometry::Hex { .. } => {
            let r = geometry.coords().next().map_or(0, |c| c.r()) + row as i8;
            geometry.coords().filter(|c| c.r() == r).collect()
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = match self.geometry {
            Geometry::Square => 8,
            Geometry::Hex { radius } => 2 * usize::from(radius) + 1,
        };
        for row in 0..rows {
            let cells = row_coords(self.geometry, row);
            if let Geometry::Hex { radius } = self.geometry {
                let indent = 2 * usize::from(radius) + 1 - cells.len();
                for _ in 0..indent {
                    f.write_char(' ')?;
                }
            }
            for (i, c) in cells.into_iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(self.piece_at(c).map_or('.', Piece::char))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}\n{}", self.geometry, self.pawns, self)
    }
}

/// Iterator over the pieces of a [`Board`], see [`Board::pieces()`].
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    board: &'a Board,
    coords: Coords,
}

impl Iterator for Pieces<'_> {
    type Item = (Coord, Piece);

    fn next(&mut self) -> Option<(Coord, Piece)> {
        for c in self.coords.by_ref() {
            if let Some(piece) = self.board.piece_at(c) {
                return Some((c, piece));
            }
        }
        None
    }
}

impl FusedIterator for Pieces<'_> {}

/// Serialized form of a [`Board`]: only the occupied cells.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardRepr {
    geometry: Geometry,
    pawns: PawnRules,
    pieces: Vec<(Coord, Piece)>,
}

#[cfg(feature = "serde")]
impl From<Board> for BoardRepr {
    fn from(board: Board) -> BoardRepr {
        BoardRepr {
            geometry: board.geometry,
            pawns: board.pawns,
            pieces: board.pieces().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = ParseBoardError;

    fn try_from(repr: BoardRepr) -> Result<Board, ParseBoardError> {
        if let Geometry::Hex { radius } = repr.geometry {
            Geometry::hex(radius).map_err(|_| ParseBoardError::InvalidRadius { radius })?;
        }
        let mut board = Board::empty(repr.geometry);
        board.pawns = repr.pawns;
        for (c, piece) in repr.pieces {
            if !board.geometry.contains(c) {
                return Err(ParseBoardError::OffBoard { at: c });
            }
            board.set_piece_at(c, piece);
        }
        Ok(board)
    }
}

/// Error when parsing an invalid board diagram or a serialized board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    RowCount { expected: usize, found: usize },
    RowLength { row: usize, expected: usize, found: usize },
    InvalidSymbol { ch: char },
    InvalidRadius { radius: u8 },
    OffBoard { at: Coord },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseBoardError::RowCount { expected, found } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            ParseBoardError::RowLength {
                row,
                expected,
                found,
            } => write!(f, "expected {expected} cells in row {row}, found {found}"),
            ParseBoardError::InvalidSymbol { ch } => write!(f, "invalid piece symbol {ch:?}"),
            ParseBoardError::InvalidRadius { radius } => {
                write!(f, "unsupported hex radius {radius}")
            }
            ParseBoardError::OffBoard { at } => write!(f, "piece on {at} is off the board"),
        }
    }
}

impl Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut board = Board::empty(Geometry::Square);
        let c = Coord::square(3, 3);
        board.set_piece_at(c, Color::White.queen());
        assert_eq!(board.piece_at(c), Some(Color::White.queen()));
        assert_eq!(board.count(Color::White), 1);
        assert_eq!(board.remove_piece_at(c), Some(Color::White.queen()));
        assert!(board.is_vacant(c));

        board.set_piece_at(Coord::square(8, 0), Color::White.queen());
        assert_eq!(board.pieces().count(), 0);
        assert!(!board.is_vacant(Coord::square(-1, 0)));
    }

    #[test]
    fn test_diagram_roundtrip_square() {
        let diagram = "\
            r . . . k . . r\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            . . . . . . . .\n\
            R . . . K . . R\n";
        let board = Board::from_diagram(Geometry::Square, diagram).expect("valid diagram");
        assert_eq!(board.king_of(Color::White), Some(Coord::square(4, 0)));
        assert_eq!(board.king_of(Color::Black), Some(Coord::square(4, 7)));
        assert_eq!(board.to_string(), diagram);
    }

    #[test]
    fn test_diagram_roundtrip_hex() {
        let geometry = Geometry::Hex { radius: 2 };
        let mut board = Board::empty(geometry);
        board.set_piece_at(Coord::hex(0, -2), Color::Black.stone());
        board.set_piece_at(Coord::hex(-2, 2), Color::White.stone());
        let text = board.to_string();
        assert_eq!(
            text,
            concat!(
                "  s . .\n",
                " . . . .\n",
                ". . . . .\n",
                " . . . .\n",
                "  S . .\n",
            )
        );
        assert_eq!(Board::from_diagram(geometry, &text), Ok(board));
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            Board::from_diagram(Geometry::Square, "rnbqkbnr"),
            Err(ParseBoardError::RowCount {
                expected: 8,
                found: 1
            })
        );
        let bad = "z......./......../......../......../......../......../......../........";
        assert_eq!(
            Board::from_diagram(Geometry::Square, &bad.replace('/', "\n")),
            Err(ParseBoardError::InvalidSymbol { ch: 'z' })
        );
    }

    #[test]
    fn test_full() {
        let geometry = Geometry::Hex { radius: 1 };
        let mut board = Board::empty(geometry);
        for c in geometry.coords() {
            assert!(!board.is_full());
            board.set_piece_at(c, Color::Black.stone());
        }
        assert!(board.is_full());
    }
}
