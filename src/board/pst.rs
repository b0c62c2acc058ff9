//! Piece-square bonuses in centipawns.
//!
//! Tables are laid out from black's point of view, indexed by square
//! (`a1 = 0`). White reads the vertically mirrored square.

use super::{Color, Piece, PieceKind, Square};

#[rustfmt::skip]
const KING: [i16; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0, 15, 15,  0,  0,  0,
     0,  0,  0, 15, 15,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
    10,  5, 15,  5,  5,  5, 15, 10,
    15, 10, 20, 10, 10, 10, 20, 15,
];

#[rustfmt::skip]
const CENTER: [i16; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     0,  5, 10, 10, 10, 10,  5,  0,
     0,  5, 10, 20, 20, 10,  5,  0,
     0,  5, 10, 20, 20, 10,  5,  0,
     0,  5, 10, 10, 10, 10,  5,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const ROOK: [i16; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5,  5,  5,  5,  5,  5,  5,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  5,  0,  5,  0,  0,
];

#[rustfmt::skip]
const PAWN: [i16; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    30, 30, 30, 30, 30, 30, 30, 30,
    10, 10, 10, 20, 20, 10, 10, 10,
     5,  5,  5, 15, 15,  5,  5,  5,
     0,  0,  0, 10, 10,  0,  0,  0,
     0,  0,  0,  5,  5,  0,  0,  0,
     0,  5,  5,  0,  0,  5,  5,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

/// Tables by kind, in `PieceKind` order starting at the king
const TABLES: [&[i16; 64]; 6] = [&KING, &CENTER, &ROOK, &CENTER, &CENTER, &PAWN];

/// Positional bonus (always non-negative) for `piece` standing on `sq`.
#[inline]
#[must_use]
pub fn bonus(piece: Piece, sq: Square) -> i32 {
    let kind = piece.kind();
    if kind == PieceKind::None {
        return 0;
    }
    let idx = match piece.color() {
        Color::White => sq.flip_vertical(),
        Color::Black => sq,
    };
    i32::from(TABLES[kind as usize - 1][idx.index()])
}

/// Signed contribution of `piece` on `sq` to the material balance:
/// positive for white, negative for black.
#[inline]
#[must_use]
pub(crate) fn piece_value(piece: Piece, sq: Square) -> i32 {
    if piece.is_none() {
        return 0;
    }
    piece.color().sign() * (piece.kind().value() + bonus(piece, sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_mirror_between_colors() {
        let wp = Piece::new(Color::White, PieceKind::Pawn);
        let bp = Piece::new(Color::Black, PieceKind::Pawn);
        for sq in Square::all() {
            assert_eq!(bonus(wp, sq), bonus(bp, sq.flip_vertical()));
        }
        // seventh rank for white is the 30 row
        assert_eq!(bonus(wp, "e7".parse().unwrap()), 30);
        assert_eq!(bonus(bp, "e2".parse().unwrap()), 30);
    }

    #[test]
    fn test_piece_value_sign() {
        let e4: Square = "e4".parse().unwrap();
        let wn = Piece::new(Color::White, PieceKind::Knight);
        let bn = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(piece_value(wn, e4), 320);
        assert_eq!(piece_value(bn, e4.flip_vertical()), -320);
        assert_eq!(piece_value(Piece::NONE, e4), 0);
    }

    #[test]
    fn test_king_value_is_positional_only() {
        let wk = Piece::new(Color::White, PieceKind::King);
        assert_eq!(piece_value(wk, Square::E1), 10);
        assert_eq!(piece_value(wk, "c1".parse().unwrap()), 20);
    }
}
