//! Attack detection on the mailbox board.

use super::{Board, Color, PieceKind, Square};

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Board {
    /// True if any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attacked_by_pawn(sq, by)
            || self.attacked_by_leaper(sq, by, PieceKind::Knight, &KNIGHT_OFFSETS)
            || self.attacked_by_leaper(sq, by, PieceKind::King, &KING_OFFSETS)
            || self.attacked_by_ray(sq, by, PieceKind::Rook, &ORTHOGONAL)
            || self.attacked_by_ray(sq, by, PieceKind::Bishop, &DIAGONAL)
    }

    /// Is the side to move in check?
    #[inline]
    #[must_use]
    pub fn king_in_check(&self) -> bool {
        self.is_square_attacked(self.king[self.turn.index()], self.turn.opponent())
    }

    /// Is the side that just moved in check? Such a position came from an
    /// illegal move, or its king can be taken outright.
    #[inline]
    #[must_use]
    pub fn other_king_in_check(&self) -> bool {
        let other = self.turn.opponent();
        self.is_square_attacked(self.king[other.index()], self.turn)
    }

    fn attacked_by_pawn(&self, sq: Square, by: Color) -> bool {
        // an attacking pawn stands one row behind the target, from its own side
        let d_row = -by.pawn_direction();
        [-1, 1].iter().any(|&d_col| {
            sq.offset(d_row, d_col)
                .is_some_and(|from| self.piece_at(from).is(by, PieceKind::Pawn))
        })
    }

    fn attacked_by_leaper(
        &self,
        sq: Square,
        by: Color,
        kind: PieceKind,
        offsets: &[(i8, i8)],
    ) -> bool {
        offsets.iter().any(|&(d_row, d_col)| {
            sq.offset(d_row, d_col)
                .is_some_and(|from| self.piece_at(from).is(by, kind))
        })
    }

    /// Ray casts from `sq`; the first piece met on each ray is the only
    /// candidate. Queens attack along both ray families.
    fn attacked_by_ray(
        &self,
        sq: Square,
        by: Color,
        kind: PieceKind,
        directions: &[(i8, i8)],
    ) -> bool {
        for &(d_row, d_col) in directions {
            let mut cursor = sq;
            while let Some(next) = cursor.offset(d_row, d_col) {
                let piece = self.piece_at(next);
                if piece.is_some() {
                    if piece.is(by, kind) || piece.is(by, PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                cursor = next;
            }
        }
        false
    }
}
