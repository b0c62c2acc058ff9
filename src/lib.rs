pub mod board;
pub mod game;
pub mod perft;
pub mod zobrist;

pub use board::{
    find_best_move, Board, BoardPool, Color, Move, Piece, PieceKind, SearchLimits, SearchOptions,
    SearchReport, Square,
};
pub use game::Game;
