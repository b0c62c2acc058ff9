use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, Color, Move, Piece, PieceKind, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only placement and side to move are required; castling and en passant
    /// default to `-`. The move clocks are accepted and ignored. An en-passant
    /// target is recorded as the double step that produced it, which is all
    /// the generator looks at.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.add_piece_at(Square(row * 8 + file as u8), piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
        }

        for color in Color::BOTH {
            let found = board
                .square
                .iter()
                .filter(|p| p.is(color, PieceKind::King))
                .count();
            if found != 1 {
                return Err(FenError::MissingKing {
                    color: match color {
                        Color::White => "white",
                        Color::Black => "black",
                    },
                    found,
                });
            }
        }

        // Parse side to move
        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let castling = parts.get(2).copied().unwrap_or("-");
        for c in castling.chars() {
            match c {
                'K' => board.flags[0].restore(CastleSide::Right),
                'Q' => board.flags[0].restore(CastleSide::Left),
                'k' => board.flags[1].restore(CastleSide::Right),
                'q' => board.flags[1].restore(CastleSide::Left),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // Parse en passant target
        let en_passant = parts.get(3).copied().unwrap_or("-");
        if en_passant != "-" {
            board.last_move = double_step_through(&board, en_passant)?;
            board.reversible = false;
        }

        board.zobrist = board.compute_hash();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation. Move clocks are not
    /// tracked and are written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (0..8u8).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8u8 {
                let piece = self.piece_at(Square(row * 8 + col));
                if piece.is_none() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    text.push_str(&empty.to_string());
                    empty = 0;
                }
                text.push(piece.to_fen_char());
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, king_side, queen_side) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let flags = self.castling(color);
            if flags.can_castle(CastleSide::Right) {
                castling.push(king_side);
            }
            if flags.can_castle(CastleSide::Left) {
                castling.push(queen_side);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }

    /// Square passed over by the last double pawn step, if any.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_file()?;
        let mover = self.turn.opponent();
        self.last_move.dst.offset(-mover.pawn_direction(), 0)
    }
}

/// The double pawn step that passed over `target`, checked against the
/// placement and side to move.
fn double_step_through(board: &Board, target: &str) -> Result<Move, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: target.to_string(),
    };
    let sq: Square = target.parse().map_err(|_| invalid())?;
    let mover = board.turn.opponent();
    let dir = mover.pawn_direction();
    if sq.row() as i8 != mover.pawn_start_rank() as i8 + dir {
        return Err(invalid());
    }
    let src = sq.offset(-dir, 0).ok_or_else(invalid)?;
    let dst = sq.offset(dir, 0).ok_or_else(invalid)?;
    if !board.piece_at(dst).is(mover, PieceKind::Pawn)
        || board.piece_at(sq).is_some()
        || board.piece_at(src).is_some()
    {
        return Err(invalid());
    }
    Ok(Move::new(src, dst))
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_fen_matches_new() {
        let board = Board::from_fen(START_FEN);
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1",
        ] {
            assert_eq!(Board::from_fen(fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_en_passant_target_matches_played_move() {
        let played = Board::new().play("e2e4").unwrap();
        let loaded =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        assert_eq!(played.hash(), loaded.hash());
        assert_eq!(played.en_passant_target(), Some("e3".parse().unwrap()));
        assert_eq!(loaded.last_move(), "e2e4".parse().unwrap());
    }

    #[test]
    fn test_optional_fields() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/8"),
            Err(FenError::TooFewParts { found: 1 })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::InvalidRank { rank: 7 })
        );
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::TooManyFiles { .. })
        ));
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w X - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - e3 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert_eq!(
            Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::MissingKing {
                color: "black",
                found: 0
            })
        );
    }

    #[test]
    fn test_from_str() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.hash(), Board::new().hash());
    }
}
