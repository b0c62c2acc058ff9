//! Error types for board input.

use thiserror::Error;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN string has too few parts (needs at least the placement and side)
    #[error("FEN must have at least 2 parts, found {found}")]
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Invalid castling character
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in position string
    #[error("Invalid rank index {rank} in FEN")]
    InvalidRank { rank: usize },
    /// Too many files in a rank
    #[error("Too many files ({files}) in rank {rank}")]
    TooManyFiles { rank: usize, files: usize },
    /// A side has no king, or more than one
    #[error("Expected exactly one {color} king, found {found}")]
    MissingKing { color: &'static str, found: usize },
}

/// Error type for move text and move legality
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("Move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    /// Invalid square notation in move
    #[error("Invalid square notation in '{notation}'")]
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// Well-formed, but not a legal move in the current position
    #[error("Not a legal move for this position: '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid algebraic notation
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}
