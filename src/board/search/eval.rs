use super::SearchContext;
use crate::board::Board;

impl Board {
    /// Material balance seen from the side to move.
    #[inline]
    #[must_use]
    pub fn relative_material(&self) -> i32 {
        self.turn.sign() * self.balance()
    }
}

impl SearchContext<'_> {
    /// Leaf evaluation: relative material, plus one centipawn per legal
    /// reply when the mobility term is on.
    pub(crate) fn evaluate(&mut self, board: &Board) -> i32 {
        let score = board.relative_material();
        if self.options.add_mobility_term {
            score + board.count_legal_moves(self.pool) as i32
        } else {
            score
        }
    }
}
