//! Move descriptor.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move: source, destination and promotion kind (`PieceKind::None` when
/// the move is not a promotion).
///
/// Castling is recorded as the king's two-square step only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub src: Square,
    pub dst: Square,
    pub promotion: PieceKind,
}

impl Move {
    /// The null move `a1a1`. Never generated; means "no move found".
    pub const NULL: Move = Move {
        src: Square(0),
        dst: Square(0),
        promotion: PieceKind::None,
    };

    #[inline]
    #[must_use]
    pub const fn new(src: Square, dst: Square) -> Self {
        Move {
            src,
            dst,
            promotion: PieceKind::None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(src: Square, dst: Square, promotion: PieceKind) -> Self {
        Move {
            src,
            dst,
            promotion,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.src.0 == 0 && self.dst.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        !matches!(self.promotion, PieceKind::None)
    }

    /// Absolute number of rows travelled
    #[inline]
    #[must_use]
    pub const fn row_delta(self) -> u8 {
        self.src.row().abs_diff(self.dst.row())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.src, self.dst)?;
        if self.is_promotion() {
            write!(f, "{}", self.promotion.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation (`e2e4`, `e7e8q`). Only the shape is
    /// checked here; legality needs a board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let src: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let dst: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => PieceKind::None,
            Some(c) => match PieceKind::from_char(c) {
                Some(
                    kind @ (PieceKind::Queen
                    | PieceKind::Rook
                    | PieceKind::Bishop
                    | PieceKind::Knight),
                ) => kind,
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Move::with_promotion(src, dst, promotion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_move() {
        assert!(Move::NULL.is_null());
        assert_eq!(Move::default(), Move::NULL);
        assert!(!Move::new(Square(12), Square(28)).is_null());
    }

    #[test]
    fn test_parse_and_display() {
        let m: Move = "e2e4".parse().unwrap();
        assert_eq!(m.src, Square(12));
        assert_eq!(m.dst, Square(28));
        assert_eq!(m.to_string(), "e2e4");
        assert_eq!(m.row_delta(), 2);

        let p: Move = "a7a8n".parse().unwrap();
        assert_eq!(p.promotion, PieceKind::Knight);
        assert_eq!(p.to_string(), "a7a8n");
    }

    #[test]
    fn test_equality_includes_promotion() {
        let q: Move = "a7a8q".parse().unwrap();
        let r: Move = "a7a8r".parse().unwrap();
        assert_ne!(q, r);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "e2e9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }
}
