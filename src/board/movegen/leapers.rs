use super::super::{Board, BoardPool, Move, Square};

impl Board {
    /// Knight and king steps: each offset is tried once and lands on an
    /// empty or enemy square.
    pub(crate) fn generate_leaper_children(
        &self,
        src: Square,
        offsets: &[(i8, i8)],
        pool: &mut BoardPool,
    ) {
        let color = self.turn;
        for &(d_row, d_col) in offsets {
            if let Some(dst) = src.offset(d_row, d_col) {
                if !self.piece_at(dst).is_color(color) {
                    self.push_child(Move::new(src, dst), None, pool);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    fn count_from(board: &Board, src: &str) -> usize {
        let src = src.parse().unwrap();
        board.legal_moves().iter().filter(|m| m.src == src).count()
    }

    #[test]
    fn test_knight_corner_and_center() {
        let board = Board::from_fen("7k/8/8/8/3N4/8/8/N6K w - - 0 1");
        assert_eq!(count_from(&board, "d4"), 8);
        assert_eq!(count_from(&board, "a1"), 2);
    }

    #[test]
    fn test_king_avoids_attacked_squares() {
        // the black rook on a2 covers the second rank
        let board = Board::from_fen("7k/8/8/8/8/8/r7/4K3 w - - 0 1");
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.dst.row() == 0));
    }
}
