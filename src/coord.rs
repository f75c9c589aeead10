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

//! Coordinates and board geometries.
//!
//! Square boards address cells by file and rank, both counted from zero,
//! so that `a1` is `(0, 0)` and `h8` is `(7, 7)`. Hexagonal boards use
//! axial coordinates `(q, r)` with the implicit third coordinate
//! `s = -q - r`, laid out flat-topped: `(0, -1)` points straight up,
//! towards Black.

use std::{error::Error, fmt, hash::Hash, hash::Hasher, iter::FusedIterator};

use arrayvec::ArrayVec;

use crate::color::Color;

/// Number of cells of the largest supported board.
pub const MAX_CELLS: usize = 128;

/// Largest supported hexagonal radius. A board of radius 6 has 127 cells.
pub const MAX_HEX_RADIUS: u8 = 6;

/// A list of coordinates that can be stored inline on the stack. Large
/// enough for every cell of the largest board.
pub type CoordList = ArrayVec<Coord, MAX_CELLS>;

/// A cell address.
///
/// On square boards `x` is the file and `y` the rank. On hexagonal boards
/// they are the axial `q` and `r`. Whether a coordinate exists is decided
/// by the [`Geometry`] of the board.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Coord {
        Coord { x, y }
    }

    /// Square board cell from file and rank, both counted from zero.
    #[inline]
    pub const fn square(file: i8, rank: i8) -> Coord {
        Coord::new(file, rank)
    }

    /// Hexagonal board cell from axial coordinates.
    #[inline]
    pub const fn hex(q: i8, r: i8) -> Coord {
        Coord::new(q, r)
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.x
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.y
    }

    #[inline]
    pub const fn q(self) -> i8 {
        self.x
    }

    #[inline]
    pub const fn r(self) -> i8 {
        self.y
    }

    /// The implicit third axial coordinate.
    #[inline]
    pub const fn s(self) -> i8 {
        (0i8).wrapping_sub(self.x).wrapping_sub(self.y)
    }

    /// Shifts the coordinate. The result may be off the board.
    #[must_use]
    #[inline]
    pub const fn offset(self, (dx, dy): (i8, i8)) -> Coord {
        Coord::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The vector from `self` to `other`.
    #[inline]
    pub const fn delta(self, other: Coord) -> (i8, i8) {
        (other.x.wrapping_sub(self.x), other.y.wrapping_sub(self.y))
    }

    /// The cell halfway between `self` and `other`, if the distance is even
    /// on both axes.
    pub const fn midpoint(self, other: Coord) -> Option<Coord> {
        let (dx, dy) = self.delta(other);
        if dx % 2 == 0 && dy % 2 == 0 {
            Some(self.offset((dx / 2, dy / 2)))
        } else {
            None
        }
    }
}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u16(u16::from_le_bytes([self.x as u8, self.y as u8]));
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error when constructing a geometry that does not fit into
/// [`MAX_CELLS`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeometryError {
    radius: u8,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hexagonal radius {} is outside of 1..={}",
            self.radius, MAX_HEX_RADIUS
        )
    }
}

impl Error for GeometryError {}

/// Shape of a board.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// The 8×8 board of chess and checkers.
    Square,
    /// A hexagon of cells with `max(|q|, |r|, |s|) <= radius`.
    Hex { radius: u8 },
}

impl Geometry {
    /// Hexagonal geometry of the given radius.
    ///
    /// # Errors
    ///
    /// Errors if the radius is zero or larger than [`MAX_HEX_RADIUS`].
    pub const fn hex(radius: u8) -> Result<Geometry, GeometryError> {
        if radius == 0 || radius > MAX_HEX_RADIUS {
            Err(GeometryError { radius })
        } else {
            Ok(Geometry::Hex { radius })
        }
    }

    pub const fn is_hex(self) -> bool {
        matches!(self, Geometry::Hex { .. })
    }

    /// Number of cells.
    pub const fn len(self) -> usize {
        match self {
            Geometry::Square => 64,
            Geometry::Hex { radius } => {
                let r = radius as usize;
                3 * r * (r + 1) + 1
            }
        }
    }

    pub fn contains(self, c: Coord) -> bool {
        match self {
            Geometry::Square => (0..8).contains(&c.x) && (0..8).contains(&c.y),
            Geometry::Hex { radius } => {
                let r = i16::from(radius);
                let (q, rr) = (i16::from(c.x), i16::from(c.y));
                q.abs() <= r && rr.abs() <= r && (q + rr).abs() <= r
            }
        }
    }

    /// Dense index of a cell, in row-major order.
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(match self {
            Geometry::Square => c.y as usize * 8 + c.x as usize,
            Geometry::Hex { radius } => {
                let radius = radius as i8;
                let mut start = 0;
                for r in -radius..c.y {
                    start += hex_row_len(radius, r);
                }
                start + (c.x - hex_row_start(radius, c.y)) as usize
            }
        })
    }

    /// Inverse of [`Geometry::index()`].
    pub fn coord(self, mut index: usize) -> Option<Coord> {
        if index >= self.len() {
            return None;
        }
        Some(match self {
            Geometry::Square => Coord::square((index % 8) as i8, (index / 8) as i8),
            Geometry::Hex { radius } => {
                let radius = radius as i8;
                let mut r = -radius;
                while index >= hex_row_len(radius, r) {
                    index -= hex_row_len(radius, r);
                    r += 1;
                }
                Coord::hex(hex_row_start(radius, r) + index as i8, r)
            }
        })
    }

    /// Iterates over all cells in index order.
    pub fn coords(self) -> Coords {
        Coords {
            geometry: self,
            next: 0,
        }
    }

    /// Unit step a pawn of the given color advances by.
    pub fn forward(self, color: Color) -> (i8, i8) {
        match self {
            Geometry::Square => (0, color.fold(1, -1)),
            Geometry::Hex { .. } => (0, color.fold(-1, 1)),
        }
    }

    /// Whether a pawn of the given color promotes on `c`: the cell exists
    /// but the next cell forward does not.
    pub fn is_promotion_cell(self, color: Color, c: Coord) -> bool {
        self.contains(c) && !self.contains(c.offset(self.forward(color)))
    }

    /// Mirrors a cell between the White and Black halves of the board.
    #[must_use]
    pub const fn flip(self, c: Coord) -> Coord {
        match self {
            Geometry::Square => Coord::square(c.x, 7 - c.y),
            Geometry::Hex { .. } => Coord::hex(c.x, c.s()),
        }
    }
}

/// How pawns capture and which cells they may double-step from.
///
/// Every pawn moves one cell [forward](Geometry::forward()), or two from a
/// home cell, and promotes where it cannot advance any further.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum PawnRules {
    /// Diagonal captures and double steps from the second rank.
    Orthodox,
    /// Glinski's hexagonal pawns: captures onto the edge neighbours at ±60°
    /// from forward, double steps from any cell of the initial chevron.
    Glinski,
    /// McCooey's hexagonal pawns: captures onto the vertex neighbours next
    /// to forward, double steps from the initial row except on the central
    /// file.
    McCooey,
}

impl PawnRules {
    /// Orthodox pawns on square boards and Glinski pawns on hexagonal
    /// boards.
    pub const fn default_for(geometry: Geometry) -> PawnRules {
        match geometry {
            Geometry::Square => PawnRules::Orthodox,
            Geometry::Hex { .. } => PawnRules::Glinski,
        }
    }

    /// The two steps a pawn of the given color captures by.
    pub fn captures(self, color: Color) -> [(i8, i8); 2] {
        match self {
            PawnRules::Orthodox => {
                let dy = color.fold(1, -1);
                [(-1, dy), (1, dy)]
            }
            PawnRules::Glinski => color.fold([(-1, 0), (1, -1)], [(1, 0), (-1, 1)]),
            PawnRules::McCooey => color.fold([(-1, -1), (1, -2)], [(1, 1), (-1, 2)]),
        }
    }

    /// Whether a pawn of the given color standing on `c` may double-step.
    pub fn is_home(self, geometry: Geometry, color: Color, c: Coord) -> bool {
        if !geometry.contains(c) {
            return false;
        }
        match self {
            PawnRules::Orthodox => c.rank() == color.fold(1, 6),
            PawnRules::Glinski => {
                let Geometry::Hex { radius } = geometry else {
                    return false;
                };
                if c.q().unsigned_abs() >= radius {
                    return false;
                }
                match color {
                    Color::White => (c.q() >= 0 && c.r() == 1) || (c.q() <= 0 && c.s() == -1),
                    Color::Black => (c.q() >= 0 && c.s() == 1) || (c.q() <= 0 && c.r() == -1),
                }
            }
            PawnRules::McCooey => {
                // Black's row is White's turned by 180 degrees.
                let (q, r) = color.fold((c.q(), c.r()), (-c.q(), -c.r()));
                r == 3 && q != 0 && (-3..=2).contains(&q)
            }
        }
    }
}

fn hex_row_start(radius: i8, r: i8) -> i8 {
    (-radius).max(-radius - r)
}

fn hex_row_len(radius: i8, r: i8) -> usize {
    (2 * radius + 1 - r.abs()) as usize
}

/// Iterator over the cells of a [`Geometry`].
#[derive(Debug, Clone)]
pub struct Coords {
    geometry: Geometry,
    next: usize,
}

impl Iterator for Coords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let c = self.geometry.coord(self.next)?;
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.geometry.len().saturating_sub(self.next);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Coords {}

impl FusedIterator for Coords {}
