//! Square type: a plain 0..64 index, `row * 8 + col` with row 0 = rank 1.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, `a1 = 0`, `b1 = 1`, ..., `h8 = 63`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub(crate) u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    /// Build from row and column; `None` when either is off the board
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Build from signed coordinates, used by ray casting and offsets
    #[inline]
    #[must_use]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Row 0..8 (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Column 0..8 (0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a (row, col) delta, staying on the board
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::from_coords(self.row() as i8 + d_row, self.col() as i8 + d_col)
    }

    /// Mirror vertically (a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Square {
        Square(self.0 ^ 56)
    }

    /// Iterate all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col() + b'a') as char, (self.row() + b'1') as char)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        Ok(Square((rank - b'1') * 8 + (file - b'a')))
    }
}
