//! Chess board representation and game logic.
//!
//! A 64-square mailbox with incrementally maintained Zobrist hash and
//! material. Positions are small `Copy` values; move generation writes
//! every legal successor into a [`BoardPool`] instead of producing move
//! lists, and the search walks those successors directly.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Board, BoardPool};
//!
//! let board = Board::new();
//! let mut pool = BoardPool::new();
//! let count = board.generate_children(&mut pool);
//! println!("Starting position has {} legal moves", count);
//! pool.drop_last(count);
//! ```

mod attacks;
mod error;
mod fen;
mod history;
mod make_move;
mod movegen;
mod pool;
pub mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use pool::BoardPool;
pub use state::Board;
pub use types::{CastleSide, CastlingFlags, Color, Move, Piece, PieceKind, Square};

pub use search::{
    find_best_move, iterative_deepening, Diagnostic, SearchContext, SearchLimits, SearchOptions,
    SearchReport, SearchResult, DRAW_SCORE, MAX_DEPTH, SCORE_MAX, SCORE_MIN,
};

pub(crate) use history::PositionHistory;
