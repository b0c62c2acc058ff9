use super::super::{Board, BoardPool, Move, PieceKind, Square};

impl Board {
    pub(crate) fn generate_pawn_children(&self, src: Square, pool: &mut BoardPool) {
        let color = self.turn;
        let dir = color.pawn_direction();

        if let Some(dst) = src.offset(dir, 0) {
            if self.piece_at(dst).is_none() {
                self.push_pawn_child(src, dst, pool);
                if src.row() == color.pawn_start_rank() {
                    if let Some(dst2) = src.offset(2 * dir, 0) {
                        if self.piece_at(dst2).is_none() {
                            self.push_child(Move::new(src, dst2), None, pool);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(dst) = src.offset(dir, d_col) {
                if self.piece_at(dst).is_color(color.opponent()) {
                    self.push_pawn_child(src, dst, pool);
                }
            }
        }
    }

    /// A pawn step or capture, expanded into the four promotions on the last rank.
    fn push_pawn_child(&self, src: Square, dst: Square, pool: &mut BoardPool) {
        if dst.row() == self.turn.pawn_promotion_rank() {
            for kind in PieceKind::PROMOTIONS {
                self.push_child(Move::with_promotion(src, dst, kind), None, pool);
            }
        } else {
            self.push_child(Move::new(src, dst), None, pool);
        }
    }

    /// En passant follows only from the previous move: when it was a double
    /// step, a pawn of ours beside its destination may capture onto the
    /// passed square.
    pub(crate) fn generate_en_passant_children(&self, pool: &mut BoardPool) {
        if self.en_passant_file().is_none() {
            return;
        }
        let victim = self.last_move.dst;
        let color = self.turn;
        let Some(target) = victim.offset(color.pawn_direction(), 0) else {
            return;
        };
        if self.piece_at(target).is_some() {
            return;
        }
        for d_col in [-1, 1] {
            if let Some(src) = victim.offset(0, d_col) {
                if self.piece_at(src).is(color, PieceKind::Pawn) {
                    self.push_child(Move::new(src, target), Some(victim), pool);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardPool, Color, Move, PieceKind};

    fn moves_from(board: &Board, src: &str) -> Vec<String> {
        let src = src.parse().unwrap();
        board
            .legal_moves()
            .into_iter()
            .filter(|m| m.src == src)
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn test_single_and_double_push() {
        let board = Board::new();
        assert_eq!(moves_from(&board, "e2"), vec!["e2e3", "e2e4"]);
        let blocked = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(moves_from(&blocked, "e2").is_empty());
        let half_blocked = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(moves_from(&half_blocked, "e2"), vec!["e2e3"]);
    }

    #[test]
    fn test_promotions_in_order() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            moves_from(&board, "a7"),
            vec!["a7a8q", "a7a8r", "a7a8b", "a7a8n"]
        );
    }

    #[test]
    fn test_capture_promotion() {
        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let moves = moves_from(&board, "a7");
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&"a7b8n".to_string()));
    }

    #[test]
    fn test_en_passant_capture() {
        let board = Board::new()
            .play("e2e4")
            .and_then(|b| b.play("a7a6"))
            .and_then(|b| b.play("e4e5"))
            .and_then(|b| b.play("d7d5"))
            .unwrap();
        assert_eq!(board.en_passant_file(), Some(3));
        let ep: Move = "e5d6".parse().unwrap();
        assert!(board.legal_moves().contains(&ep));

        let after = board.apply_move(ep).unwrap();
        assert!(after.piece_at("d5".parse().unwrap()).is_none());
        assert!(after
            .piece_at("d6".parse().unwrap())
            .is(Color::White, PieceKind::Pawn));
        assert!(!after.is_reversible());
        assert_eq!(after.hash(), after.compute_hash());
        assert_eq!(after.material, after.compute_material());
    }

    #[test]
    fn test_en_passant_expires() {
        let board = Board::new()
            .play("e2e4")
            .and_then(|b| b.play("a7a6"))
            .and_then(|b| b.play("e4e5"))
            .and_then(|b| b.play("d7d5"))
            .and_then(|b| b.play("h2h3"))
            .and_then(|b| b.play("h7h6"))
            .unwrap();
        assert!(!board.legal_moves().contains(&"e5d6".parse().unwrap()));
    }

    #[test]
    fn test_en_passant_generated_once() {
        // two pawns can take the same double-stepped pawn
        let board = Board::from_fen("4k3/8/8/2PpP3/8/8/8/4K3 w - d6 0 1");
        let mut pool = BoardPool::new();
        let count = board.generate_children(&mut pool);
        let ep: Vec<String> = pool
            .tail(0)
            .iter()
            .take(count)
            .map(|b| b.last_move().to_string())
            .filter(|m| m.ends_with("d6"))
            .collect();
        assert_eq!(ep, vec!["c5d6", "e5d6"]);
    }
}
