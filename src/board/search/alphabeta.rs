use super::{Diagnostic, SearchContext, SearchResult, DRAW_SCORE, SCORE_MAX, SCORE_MIN};
use crate::board::Board;

impl SearchContext<'_> {
    /// Fail-hard alpha-beta from the root with a full window.
    ///
    /// Children are scanned in generation order and the first child is the
    /// fallback best move, so the result matches [`SearchContext::root_negamax`]
    /// at the same depth. A cancelled search returns [`SearchResult::CANCELLED`].
    pub fn root_alpha_beta(&mut self, board: &Board, depth: u32) -> SearchResult {
        if let Some(result) = self.root_terminal(board, depth) {
            return result;
        }

        let (base, count) = self.expand(board);
        match count {
            0 => {
                let score = Self::no_moves_score(board);
                let diagnostic = if score == SCORE_MIN {
                    Diagnostic::Checkmated
                } else {
                    Diagnostic::Draw
                };
                return SearchResult::terminal(score, diagnostic);
            }
            1 => {
                let only = self.pool[base];
                self.pool.drop_last(1);
                return SearchResult {
                    score: -only.relative_material(),
                    best_move: only.last_move,
                    diagnostic: Diagnostic::SingleMove,
                };
            }
            _ => {}
        }

        self.trail.push(board);
        let mut alpha = SCORE_MIN;
        let beta = SCORE_MAX;
        let mut best_move = self.pool[base].last_move;
        let mut cutoff = None;

        for i in 0..count {
            if self.should_stop() {
                break;
            }
            let child = self.pool[base + i];
            let score = -self.alpha_beta(&child, -beta, -alpha, depth - 1);
            if self.cancelled {
                break;
            }
            self.trace_root_move("alpha_beta", depth, score, child.last_move);
            if score >= beta {
                cutoff = Some(SearchResult::best(beta, child.last_move));
                break;
            }
            if score > alpha {
                alpha = score;
                best_move = child.last_move;
            }
        }

        self.trail.pop();
        self.pool.drop_last(count);

        if self.cancelled {
            return SearchResult::CANCELLED;
        }
        cutoff.unwrap_or(SearchResult::best(alpha, best_move))
    }

    /// Score of `board` for its side to move, clamped to `[alpha, beta]`.
    pub(crate) fn alpha_beta(&mut self, board: &Board, mut alpha: i32, beta: i32, depth: u32) -> i32 {
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
        for i in 0..count {
            if self.should_stop() {
                break;
            }
            let child = self.pool[base + i];
            let score = -self.alpha_beta(&child, -beta, -alpha, depth - 1);
            if self.cancelled {
                break;
            }
            if score >= beta {
                alpha = beta;
                break;
            }
            if score > alpha {
                alpha = score;
            }
        }
        self.trail.pop();
        self.pool.drop_last(count);

        alpha
    }
}
