use super::super::{Board, BoardPool, CastleSide, Color, PieceKind, Square};

impl Board {
    /// Castling for the king standing on `king_sq`, queen side first.
    ///
    /// Needs the right intact, the rook home, the squares between them empty,
    /// and the king's start, transit and landing squares unattacked. With
    /// those checked the child cannot leave the king in check, so it is kept
    /// without re-validation.
    pub(crate) fn generate_castling_children(&self, king_sq: Square, pool: &mut BoardPool) {
        let color = self.turn;
        let rank = color.back_rank() * 8;
        if king_sq != Square(rank + 4) {
            return;
        }
        let enemy = color.opponent();

        for side in [CastleSide::Left, CastleSide::Right] {
            if !self.flags[color.index()].can_castle(side) {
                continue;
            }
            if !self.castling_path_clear(color, side) {
                continue;
            }
            let (low, high) = ordered(4, side.king_dst_col());
            if (low..=high).any(|col| self.is_square_attacked(Square(rank + col), enemy)) {
                continue;
            }
            let child = pool.push(*self);
            child.make_castling(side);
        }
    }

    fn castling_path_clear(&self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank() * 8;
        if !self
            .piece_at(Square(rank + side.rook_col()))
            .is(color, PieceKind::Rook)
        {
            return false;
        }
        let (low, high) = ordered(4, side.rook_col());
        (low + 1..high).all(|col| self.piece_at(Square(rank + col)).is_none())
    }
}

#[inline]
fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, CastleSide, Color};

    fn castles(board: &Board) -> Vec<String> {
        board
            .legal_moves()
            .iter()
            .filter(|m| m.src == board.king_square(board.turn()) && m.row_delta() == 0)
            .filter(|m| m.src.col().abs_diff(m.dst.col()) == 2)
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn test_both_sides_available() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(castles(&board), vec!["e1c1", "e1g1"]);
        let black = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(castles(&black), vec!["e8c8", "e8g8"]);
    }

    #[test]
    fn test_rights_respected() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
        assert_eq!(castles(&board), vec!["e1g1"]);
    }

    #[test]
    fn test_blocked_path() {
        // b1 is only passed by the rook, but it must still be empty
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        assert_eq!(castles(&board), vec!["e1g1"]);
    }

    #[test]
    fn test_attacked_transit_square() {
        // the black rook on f8 covers f1
        let board = Board::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
        assert_eq!(castles(&board), vec!["e1c1"]);
    }

    #[test]
    fn test_attacked_b_file_does_not_matter() {
        // only the king's squares need to be safe
        let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(castles(&board), vec!["e1c1"]);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1");
        assert!(castles(&board).is_empty());
    }

    #[test]
    fn test_castled_child_state() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let child = board.apply_move("e1g1".parse().unwrap()).unwrap();
        assert!(!child.castling(Color::White).can_castle(CastleSide::Left));
        assert!(!child.castling(Color::White).can_castle(CastleSide::Right));
        assert!(child.castling(Color::Black).can_castle(CastleSide::Left));
        assert_eq!(child.hash(), child.compute_hash());
        assert_eq!(child.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1");
    }
}
