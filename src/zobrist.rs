//! Zobrist hashing for chess positions.
//!
//! Process-wide key tables, generated once from a fixed seed. Boards keep an
//! incrementally-updated 64-bit hash by XOR-toggling these keys; the same
//! toggle both adds and removes a feature.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

const ZOBRIST_SEED: u64 = 20_210_709;

pub(crate) struct ZobristKeys {
    // piece_keys[square][piece_code - 1]
    pub(crate) piece_keys: [[u64; 14]; 64],
    pub(crate) turn_keys: [u64; 2],
    // indexed by white lost-bits | black lost-bits << 2
    pub(crate) castling_keys: [u64; 16],
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[0; 14]; 64];
        let mut turn_keys = [0; 2];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for square in &mut piece_keys {
            for key in square.iter_mut() {
                *key = rng.gen();
            }
        }
        for key in &mut turn_keys {
            *key = rng.gen();
        }
        for key in &mut castling_keys {
            *key = rng.gen();
        }
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            turn_keys,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Key for `piece` on `sq`. The empty piece hashes to zero.
#[inline]
pub(crate) fn piece_key(sq: Square, piece: Piece) -> u64 {
    match piece.code() {
        0 => 0,
        code => ZOBRIST.piece_keys[sq.index()][usize::from(code - 1)],
    }
}

#[inline]
pub(crate) fn turn_key(color: Color) -> u64 {
    ZOBRIST.turn_keys[color.index()]
}

#[inline]
pub(crate) fn castling_key(nibble: usize) -> u64 {
    ZOBRIST.castling_keys[nibble & 0xF]
}

#[inline]
pub(crate) fn en_passant_key(file: u8) -> u64 {
    ZOBRIST.en_passant_keys[usize::from(file & 7)]
}

/// Force key generation. Keys are otherwise built on first use; calling this
/// before a timed search keeps the cost out of the first deadline window.
pub fn init() {
    Lazy::force(&ZOBRIST);
}
