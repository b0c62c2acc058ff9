//! Piece and color types.
//!
//! A [`Piece`] packs a [`PieceKind`] into the low three bits and the
//! [`Color`] into bit 3, so white pieces are codes 1..=6 and black pieces
//! are 9..=14. The zero code is the colorless [`Piece::NONE`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction in rows (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    const fn from_bit(bit: u8) -> Color {
        if bit == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kinds, numbered the way they are packed into a [`Piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    None = 0,
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl PieceKind {
    /// Promotion choices in generation order (queen first)
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    #[must_use]
    const fn from_bits(bits: u8) -> PieceKind {
        match bits & 7 {
            1 => PieceKind::King,
            2 => PieceKind::Queen,
            3 => PieceKind::Rook,
            4 => PieceKind::Bishop,
            5 => PieceKind::Knight,
            6 => PieceKind::Pawn,
            _ => PieceKind::None,
        }
    }

    /// Parse a kind from a letter (either case). Unknown letters yield `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Lowercase letter for this kind, `'?'` for `None`
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
            PieceKind::None => '?',
        }
    }

    /// Material value in centipawns. The king is priceless and counts zero.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight | PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King | PieceKind::None => 0,
        }
    }
}

/// A colored piece, or the colorless empty value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(u8);

impl Piece {
    /// No piece. Compares equal regardless of which side "removed" it.
    pub const NONE: Piece = Piece(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        if matches!(kind, PieceKind::None) {
            return Piece::NONE;
        }
        Piece(((color.index() as u8) << 3) | kind as u8)
    }

    /// Raw packed code (0, 1..=6 for white, 9..=14 for black)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_bits(self.0)
    }

    /// Color of the piece. Meaningless for [`Piece::NONE`], which reports white.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        Color::from_bit(self.0 >> 3)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// True if this is a piece of `color` (never true for `NONE`)
    #[inline]
    #[must_use]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 != 0 && (self.0 >> 3) as usize == color.index()
    }

    /// True if this is a piece of `color` and `kind`
    #[inline]
    #[must_use]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.is_color(color) && self.kind() == kind
    }

    /// Parse a FEN letter: uppercase is white, lowercase is black
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// FEN letter (uppercase for white), `' '` for `NONE`
    #[must_use]
    pub fn to_fen_char(self) -> char {
        if self.is_none() {
            return ' ';
        }
        let c = self.kind().to_char();
        if self.color() == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Piece::NONE")
        } else {
            write!(f, "Piece({:?} {:?})", self.color(), self.kind())
        }
    }
}
