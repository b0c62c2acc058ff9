use super::super::{Board, BoardPool, Move, Square};

impl Board {
    /// Ray-cast from `src` along each direction: every empty square is a
    /// quiet move, the first occupied square is a capture if it holds an
    /// enemy, and the ray ends there either way.
    pub(crate) fn generate_slider_children(
        &self,
        src: Square,
        directions: &[(i8, i8)],
        pool: &mut BoardPool,
    ) {
        let color = self.turn;
        for &(d_row, d_col) in directions {
            let mut cursor = src;
            while let Some(dst) = cursor.offset(d_row, d_col) {
                let target = self.piece_at(dst);
                if target.is_none() {
                    self.push_child(Move::new(src, dst), None, pool);
                    cursor = dst;
                    continue;
                }
                if !target.is_color(color) {
                    self.push_child(Move::new(src, dst), None, pool);
                }
                break;
            }
        }
    }
}
