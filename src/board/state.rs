use std::fmt;

use super::pst::piece_value;
use super::types::{castling_nibble, LOST_BOTH};
use super::{CastleSide, CastlingFlags, Color, Move, Piece, PieceKind, Square};
use crate::zobrist;

/// A chess position on a 64-square mailbox.
///
/// Boards are small `Copy` values: successors are produced by copying the
/// parent and applying one move, so a board never needs undo information.
/// Material and hash are maintained incrementally by [`Board::add_piece_at`]
/// and [`Board::remove_piece_at`]; [`Board::compute_material`] and
/// [`Board::compute_hash`] recompute them from scratch for checking.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub(crate) square: [Piece; 64],
    pub(crate) king: [Square; 2],
    pub(crate) flags: [CastlingFlags; 2],
    // signed centipawns: white entries positive, black entries negative
    pub(crate) material: [i32; 2],
    pub(crate) turn: Color,
    pub(crate) last_move: Move,
    pub(crate) zobrist: u64,
    pub(crate) reversible: bool,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position, white to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            board.flags[color.index()] = CastlingFlags::intact();
        }
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in Color::BOTH {
                if let Some(sq) = Square::new(color.back_rank(), col) {
                    board.add_piece_at(sq, Piece::new(color, *kind));
                }
                if let Some(sq) = Square::new(color.pawn_start_rank(), col) {
                    board.add_piece_at(sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board.zobrist = board.compute_hash();
        board
    }

    /// A board with no pieces, white to move and no castling rights.
    ///
    /// Not a playable position until both kings are placed; used by the
    /// position loader.
    #[must_use]
    pub(crate) fn empty() -> Self {
        let mut board = Board {
            square: [Piece::NONE; 64],
            king: [Square::E1, Square::E8],
            flags: [CastlingFlags::lost(); 2],
            material: [0, 0],
            turn: Color::White,
            last_move: Move::NULL,
            zobrist: 0,
            reversible: true,
        };
        board.zobrist = board.compute_hash();
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.square[sq.index()]
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn castling(&self, color: Color) -> CastlingFlags {
        self.flags[color.index()]
    }

    /// Running material (with positional bonuses) for one color, signed:
    /// white's total is positive and black's is negative.
    #[inline]
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.material[color.index()]
    }

    /// Material balance from white's point of view.
    #[inline]
    #[must_use]
    pub fn balance(&self) -> i32 {
        self.material[0] + self.material[1]
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.zobrist
    }

    /// The move that produced this board, `Move::NULL` for a loaded position.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// False when the move that produced this board was a capture or a pawn move.
    #[inline]
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    /// File of the pawn that just made a double step, if any.
    ///
    /// This is the only state en passant depends on, so it is also the only
    /// en-passant feature that enters the hash.
    #[inline]
    #[must_use]
    pub fn en_passant_file(&self) -> Option<u8> {
        let mv = self.last_move;
        if mv.is_null() || mv.row_delta() != 2 {
            return None;
        }
        if self.square[mv.dst.index()].kind() != PieceKind::Pawn {
            return None;
        }
        Some(mv.dst.col())
    }

    /// Place `piece` on `sq`, first removing whatever stood there.
    pub(crate) fn add_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        if piece.is_none() {
            return;
        }
        self.square[sq.index()] = piece;
        let color = piece.color();
        if piece.kind() == PieceKind::King {
            self.king[color.index()] = sq;
        }
        self.material[color.index()] += piece_value(piece, sq);
        self.zobrist ^= zobrist::piece_key(sq, piece);
    }

    /// Clear `sq` and return its former occupant (`Piece::NONE` if empty).
    ///
    /// A rook leaving its home corner, by moving or by being captured,
    /// forfeits castling on that side.
    pub(crate) fn remove_piece_at(&mut self, sq: Square) -> Piece {
        let piece = self.square[sq.index()];
        if piece.is_none() {
            return piece;
        }
        let color = piece.color();
        self.square[sq.index()] = Piece::NONE;
        self.material[color.index()] -= piece_value(piece, sq);
        self.zobrist ^= zobrist::piece_key(sq, piece);

        if piece.kind() == PieceKind::Rook && sq.row() == color.back_rank() {
            for side in CastleSide::BOTH {
                if sq.col() == side.rook_col() {
                    self.lose_castling(color, side.lost_bit());
                }
            }
        }
        piece
    }

    /// Set lost-castling bits for `color`, toggling the castling key around
    /// the transition.
    pub(crate) fn lose_castling(&mut self, color: Color, bits: u8) {
        let before = self.flags;
        self.flags[color.index()].insert(bits);
        if self.flags != before {
            self.zobrist ^= zobrist::castling_key(castling_nibble(before));
            self.zobrist ^= zobrist::castling_key(castling_nibble(self.flags));
        }
    }

    pub(crate) fn lose_all_castling(&mut self, color: Color) {
        self.lose_castling(color, LOST_BOTH);
    }

    /// Hand the move to the other side.
    pub(crate) fn flip_turn(&mut self) {
        self.zobrist ^= zobrist::turn_key(self.turn);
        self.turn = self.turn.opponent();
        self.zobrist ^= zobrist::turn_key(self.turn);
    }

    /// Full hash recomputation from pieces, turn, castling flags and the
    /// en-passant file. Must always agree with the incremental hash.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            hash ^= zobrist::piece_key(sq, self.square[sq.index()]);
        }
        hash ^= zobrist::turn_key(self.turn);
        hash ^= zobrist::castling_key(castling_nibble(self.flags));
        if let Some(file) = self.en_passant_file() {
            hash ^= zobrist::en_passant_key(file);
        }
        hash
    }

    /// Full material recomputation. Must always agree with the running totals.
    #[must_use]
    pub fn compute_material(&self) -> [i32; 2] {
        let mut material = [0; 2];
        for sq in Square::all() {
            let piece = self.square[sq.index()];
            if piece.is_some() {
                material[piece.color().index()] += piece_value(piece, sq);
            }
        }
        material
    }

    /// Debug-build check that the incremental state has not drifted.
    #[inline]
    pub(crate) fn debug_validate(&self) {
        debug_assert_eq!(self.zobrist, self.compute_hash(), "hash drift");
        debug_assert_eq!(self.material, self.compute_material(), "material drift");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8u8 {
                let piece = self.square[usize::from(row * 8 + col)];
                let c = if piece.is_none() {
                    '.'
                } else {
                    piece.to_fen_char()
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh  {} to move", self.turn)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("fen", &self.to_fen())
            .field("last_move", &self.last_move)
            .field("hash", &format_args!("{:#018x}", self.zobrist))
            .finish()
    }
}
