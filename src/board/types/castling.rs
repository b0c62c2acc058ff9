//! Per-color castling flags.
//!
//! Bits record rights that have been *lost*, so along one line of play the
//! set only ever grows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const LOST_LEFT: u8 = 1 << 0;
pub(crate) const LOST_RIGHT: u8 = 1 << 1;

/// Both castling rights lost
pub(crate) const LOST_BOTH: u8 = LOST_LEFT | LOST_RIGHT;

/// Castling side, seen from white's side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Queen side (towards file a)
    Left,
    /// King side (towards file h)
    Right,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Right, CastleSide::Left];

    #[inline]
    #[must_use]
    pub(crate) const fn lost_bit(self) -> u8 {
        match self {
            CastleSide::Left => LOST_LEFT,
            CastleSide::Right => LOST_RIGHT,
        }
    }

    /// Column of the rook's home square
    #[inline]
    #[must_use]
    pub(crate) const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Left => 0,
            CastleSide::Right => 7,
        }
    }

    /// Column where the king lands
    #[inline]
    #[must_use]
    pub(crate) const fn king_dst_col(self) -> u8 {
        match self {
            CastleSide::Left => 2,
            CastleSide::Right => 6,
        }
    }

    /// Column where the rook lands
    #[inline]
    #[must_use]
    pub(crate) const fn rook_dst_col(self) -> u8 {
        match self {
            CastleSide::Left => 3,
            CastleSide::Right => 5,
        }
    }
}

/// Lost-castling bitset for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingFlags(u8);

impl CastlingFlags {
    /// Every right still available
    #[must_use]
    pub const fn intact() -> Self {
        CastlingFlags(0)
    }

    /// Every right lost
    #[must_use]
    pub const fn lost() -> Self {
        CastlingFlags(LOST_BOTH)
    }

    #[inline]
    #[must_use]
    pub const fn can_castle(self, side: CastleSide) -> bool {
        self.0 & side.lost_bit() == 0
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn insert(&mut self, bits: u8) {
        self.0 |= bits & LOST_BOTH;
    }

    /// Loader-only: grant a right back. Play never calls this.
    #[inline]
    pub(crate) fn restore(&mut self, side: CastleSide) {
        self.0 &= !side.lost_bit();
    }
}

/// Index into the 16-entry castling key table: white in bits 0-1, black in bits 2-3
#[inline]
#[must_use]
pub(crate) const fn castling_nibble(flags: [CastlingFlags; 2]) -> usize {
    ((flags[0].0 | (flags[1].0 << 2)) & 0xF) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_monotonic() {
        let mut flags = CastlingFlags::intact();
        assert!(flags.can_castle(CastleSide::Left));
        flags.insert(LOST_LEFT);
        flags.insert(0);
        assert!(!flags.can_castle(CastleSide::Left));
        assert!(flags.can_castle(CastleSide::Right));
        flags.insert(LOST_RIGHT);
        assert_eq!(flags, CastlingFlags::lost());
    }

    #[test]
    fn test_nibble_layout() {
        let white = CastlingFlags(LOST_RIGHT);
        let black = CastlingFlags(LOST_LEFT);
        assert_eq!(castling_nibble([white, black]), 0b0110);
        assert_eq!(
            castling_nibble([CastlingFlags::lost(), CastlingFlags::lost()]),
            15
        );
    }
}
