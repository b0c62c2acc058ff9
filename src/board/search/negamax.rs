use super::{Diagnostic, SearchContext, SearchResult, DRAW_SCORE, SCORE_MIN};
use crate::board::Board;

impl SearchContext<'_> {
    /// Exhaustive negamax from the root.
    ///
    /// The reference that alpha-beta must agree with: same terminal rules,
    /// same repetition scoring, same first-child fallback, but every node is
    /// expanded and there is no single-move shortcut.
    pub fn root_negamax(&mut self, board: &Board, depth: u32) -> SearchResult {
        if let Some(result) = self.root_terminal(board, depth) {
            return result;
        }

        let (base, count) = self.expand(board);
        if count == 0 {
            return if board.king_in_check() {
                SearchResult::terminal(SCORE_MIN, Diagnostic::Checkmated)
            } else {
                SearchResult::terminal(DRAW_SCORE, Diagnostic::Draw)
            };
        }

        self.trail.push(board);
        let mut max = SCORE_MIN;
        let mut best_move = self.pool[base].last_move;

        for i in 0..count {
            if self.should_stop() {
                break;
            }
            let child = self.pool[base + i];
            let score = -self.negamax(&child, depth - 1);
            if self.cancelled {
                break;
            }
            self.trace_root_move("negamax", depth, score, child.last_move);
            if score > max {
                max = score;
                best_move = child.last_move;
            }
        }

        self.trail.pop();
        self.pool.drop_last(count);

        if self.cancelled {
            return SearchResult::CANCELLED;
        }
        SearchResult::best(max, best_move)
    }

    pub(crate) fn negamax(&mut self, board: &Board, depth: u32) -> i32 {
        if self.trail.is_repetition(board) {
            return DRAW_SCORE;
        }
        if depth == 0 {
            return self.evaluate(board);
        }

        let (base, count) = self.expand(board);
        if count == 0 {
            return Self::no_moves_score(board);
        }

        self.trail.push(board);
        let mut max = SCORE_MIN;
        for i in 0..count {
            if self.should_stop() {
                break;
            }
            let child = self.pool[base + i];
            let score = -self.negamax(&child, depth - 1);
            if self.cancelled {
                break;
            }
            max = max.max(score);
        }
        self.trail.pop();
        self.pool.drop_last(count);

        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::search::{SearchOptions, SCORE_MAX};
    use crate::board::{BoardPool, Move};
    use std::time::Instant;

    fn both(fen: &str, depth: u32, options: SearchOptions) -> (SearchResult, SearchResult, u64, u64) {
        let board = Board::from_fen(fen);
        let mut pool = BoardPool::new();
        let mut ctx = SearchContext::new(&mut pool, options);
        let nega = ctx.root_negamax(&board, depth);
        let nega_nodes = ctx.nodes();
        let mut pool = BoardPool::new();
        let mut ctx = SearchContext::new(&mut pool, options);
        let ab = ctx.root_alpha_beta(&board, depth);
        (nega, ab, nega_nodes, ctx.nodes())
    }

    #[test]
    fn test_alpha_beta_matches_negamax() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1",
            "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            for depth in 1..=3 {
                let (nega, ab, nega_nodes, ab_nodes) = both(fen, depth, SearchOptions::default());
                assert_eq!(nega.score, ab.score, "score at depth {depth} for {fen}");
                assert_eq!(nega.best_move, ab.best_move, "move at depth {depth} for {fen}");
                assert!(ab_nodes <= nega_nodes);
            }
        }
    }

    #[test]
    fn test_equivalence_with_mobility() {
        let options = SearchOptions::default().with_mobility_term(true);
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let (nega, ab, _, _) = both(fen, 2, options);
        assert_eq!(nega, ab);
    }

    #[test]
    fn test_negamax_mate_in_one() {
        let (nega, _, _, _) = both("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2, SearchOptions::default());
        assert_eq!(nega.best_move, "a1a8".parse::<Move>().unwrap());
        assert_eq!(nega.score, SCORE_MAX);
    }

    #[test]
    fn test_negamax_stalemate() {
        let (nega, _, _, _) = both("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", 2, SearchOptions::default());
        assert_eq!(nega.diagnostic, Diagnostic::Draw);
        assert!(nega.best_move.is_null());
    }

    #[test]
    fn test_negamax_cancelled_by_deadline() {
        let board = Board::new();
        let mut pool = BoardPool::new();
        let mut ctx = SearchContext::new(&mut pool, SearchOptions::default())
            .with_deadline(Some(Instant::now()));
        let result = ctx.root_negamax(&board, 3);
        assert_eq!(result, SearchResult::CANCELLED);
        assert!(ctx.is_cancelled());
        drop(ctx);
        assert!(pool.is_empty());
    }
}
