//! In-place move application on a copied board.
//!
//! Each step that changes a hashed feature toggles its key, so the hash
//! after a move equals a full recomputation.

use super::{Board, CastleSide, Move, Piece, PieceKind, Square};
use crate::zobrist;

impl Board {
    /// Apply a normal move (anything except castling) without legality checks.
    ///
    /// `en_passant_victim` is the square of the pawn removed by an en passant
    /// capture.
    pub(crate) fn make_move(&mut self, mv: Move, en_passant_victim: Option<Square>) {
        self.toggle_en_passant_key();

        let mover = self.remove_piece_at(mv.src);
        let captures = self.piece_at(mv.dst).is_some() || en_passant_victim.is_some();
        let placed = if mv.is_promotion() {
            Piece::new(mover.color(), mv.promotion)
        } else {
            mover
        };
        self.add_piece_at(mv.dst, placed);

        if mover.kind() == PieceKind::King {
            self.lose_all_castling(mover.color());
        }
        if let Some(victim) = en_passant_victim {
            self.remove_piece_at(victim);
        }

        self.reversible = !(captures || mover.kind() == PieceKind::Pawn);
        self.last_move = mv;
        self.toggle_en_passant_key();
        self.flip_turn();
    }

    /// Castle for the side to move: king and rook move together, both rights
    /// are lost, and the recorded move is the king's step.
    pub(crate) fn make_castling(&mut self, side: CastleSide) {
        self.toggle_en_passant_key();

        let color = self.turn;
        let rank = color.back_rank() * 8;
        let king_src = Square(rank + 4);
        let king_dst = Square(rank + side.king_dst_col());
        let rook_src = Square(rank + side.rook_col());
        let rook_dst = Square(rank + side.rook_dst_col());

        let king = self.remove_piece_at(king_src);
        self.add_piece_at(king_dst, king);
        let rook = self.remove_piece_at(rook_src);
        self.add_piece_at(rook_dst, rook);
        self.lose_all_castling(color);

        self.reversible = true;
        self.last_move = Move::new(king_src, king_dst);
        self.flip_turn();
    }

    /// Called once before and once after a move so the key tracks the
    /// change of en-passant file.
    #[inline]
    fn toggle_en_passant_key(&mut self) {
        if let Some(file) = self.en_passant_file() {
            self.zobrist ^= zobrist::en_passant_key(file);
        }
    }
}
