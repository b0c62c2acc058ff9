mod castling;
mod leapers;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use super::error::MoveParseError;
use super::{Board, BoardPool, Move, PieceKind, Square};

impl Board {
    /// Append every legal successor of this position to `pool` and return
    /// how many were added.
    ///
    /// Children appear in square order of the moving piece (a1 first), each
    /// piece's moves in a fixed direction order, with castling after the
    /// king's ordinary steps and en passant last. The caller owns the batch
    /// and must release it with `pool.drop_last(count)`.
    pub fn generate_children(&self, pool: &mut BoardPool) -> usize {
        let base = pool.len();
        let color = self.turn;

        for sq in Square::all() {
            let piece = self.piece_at(sq);
            if !piece.is_color(color) {
                continue;
            }
            match piece.kind() {
                PieceKind::Pawn => self.generate_pawn_children(sq, pool),
                PieceKind::Knight => self.generate_leaper_children(sq, &KNIGHT_OFFSETS, pool),
                PieceKind::Bishop => self.generate_slider_children(sq, &DIAGONAL, pool),
                PieceKind::Rook => self.generate_slider_children(sq, &ORTHOGONAL, pool),
                PieceKind::Queen => {
                    self.generate_slider_children(sq, &ORTHOGONAL, pool);
                    self.generate_slider_children(sq, &DIAGONAL, pool);
                }
                PieceKind::King => {
                    self.generate_leaper_children(sq, &KING_OFFSETS, pool);
                    self.generate_castling_children(sq, pool);
                }
                PieceKind::None => {}
            }
        }
        self.generate_en_passant_children(pool);

        pool.len() - base
    }

    /// Copy this board onto the pool, apply `mv`, and keep the child only if
    /// the mover's king is not left attacked.
    #[inline]
    fn push_child(&self, mv: Move, en_passant_victim: Option<Square>, pool: &mut BoardPool) {
        let child = pool.push(*self);
        child.make_move(mv, en_passant_victim);
        if child.other_king_in_check() {
            pool.drop_last(1);
        }
    }

    /// All legal moves, in generation order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut pool = BoardPool::with_capacity(64);
        let count = self.generate_children(&mut pool);
        pool.tail(pool.len() - count)
            .iter()
            .map(Board::last_move)
            .collect()
    }

    /// Number of legal replies, counted on `pool` without keeping the children.
    pub fn count_legal_moves(&self, pool: &mut BoardPool) -> usize {
        let count = self.generate_children(pool);
        pool.drop_last(count);
        count
    }

    /// The board after `mv`, or `IllegalMove` if `mv` is not legal here.
    /// `self` is never modified.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveParseError> {
        let mut pool = BoardPool::with_capacity(64);
        let count = self.generate_children(&mut pool);
        let child = pool
            .tail(pool.len() - count)
            .iter()
            .find(|child| child.last_move == mv)
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: mv.to_string(),
            })?;
        child.debug_validate();
        Ok(child)
    }

    /// Parse a move in coordinate notation (`e2e4`, `e7e8q`) and check that
    /// it is legal in this position.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// assert!(board.parse_move("e2e5").is_err());
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }

    /// Parse and apply a move in one step.
    pub fn play(&self, text: &str) -> Result<Board, MoveParseError> {
        let mv: Move = text.parse()?;
        self.apply_move(mv).map_err(|_| MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.king_in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.king_in_check() && self.legal_moves().is_empty()
    }
}
