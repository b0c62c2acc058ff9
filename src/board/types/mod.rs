//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Color` - bit-packed pieces
//! - `Square` - 0..64 board index
//! - `Move` - source, destination, promotion
//! - `CastlingFlags` - per-color lost castling rights

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingFlags};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use castling::{castling_nibble, LOST_BOTH};
