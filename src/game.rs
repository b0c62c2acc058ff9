//! Game session: the boards actually played, oldest first.
//!
//! The session is the persistent counterpart of the search pool. Each
//! played move appends the successor board, so the history doubles as the
//! repetition trail that a search started from the current position needs.

use log::debug;

use crate::board::{
    iterative_deepening, Board, BoardPool, Color, FenError, Move, MoveParseError, PositionHistory,
    SearchLimits, SearchOptions, SearchReport,
};

/// How the current position stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    /// The current position already occurred since the last irreversible move
    Repetition,
}

/// A played game with its full board history.
#[derive(Clone, Debug)]
pub struct Game {
    boards: Vec<Board>,
    pool: BoardPool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            boards: vec![board],
            pool: BoardPool::with_capacity(1024),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::try_from_fen(fen).map(Self::from_board)
    }

    /// The position to move in.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Board {
        // never empty: construction pushes a board and undo keeps the first
        &self.boards[self.boards.len() - 1]
    }

    /// Every position of the game, starting position first.
    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.boards
    }

    /// Moves played so far.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.boards.iter().skip(1).map(Board::last_move).collect()
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.current().legal_moves()
    }

    /// Play a move given in coordinate notation.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::Game;
    ///
    /// let mut game = Game::new();
    /// game.play("e2e4").unwrap();
    /// game.play("e7e5").unwrap();
    /// assert!(game.play("e4e5").is_err());
    /// assert_eq!(game.moves().len(), 2);
    /// ```
    pub fn play(&mut self, text: &str) -> Result<&Board, MoveParseError> {
        let next = self.current().play(text)?;
        Ok(self.push(next))
    }

    /// Play an already parsed move; illegal moves leave the game unchanged.
    pub fn apply(&mut self, mv: Move) -> Result<&Board, MoveParseError> {
        let next = self.current().apply_move(mv)?;
        Ok(self.push(next))
    }

    fn push(&mut self, board: Board) -> &Board {
        debug!("game: played {} -> {}", board.last_move(), board.to_fen());
        self.boards.push(board);
        self.current()
    }

    /// Take back the last move. The starting position cannot be undone.
    pub fn undo(&mut self) -> Option<Move> {
        if self.boards.len() < 2 {
            return None;
        }
        self.boards.pop().map(|board| board.last_move())
    }

    /// True if the current position repeats one played since the last
    /// capture or pawn move. Losing a castling right changes the hash but
    /// does not end the look-back.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        let earlier = &self.boards[..self.boards.len() - 1];
        PositionHistory::from_boards(earlier).is_repetition(self.current())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let board = self.current();
        if board.legal_moves().is_empty() {
            if board.king_in_check() {
                GameStatus::Checkmate {
                    winner: board.turn().opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.is_repetition() {
            GameStatus::Repetition
        } else {
            GameStatus::Ongoing
        }
    }

    /// Search the current position with the game history as repetition trail.
    pub fn search(&mut self, limits: SearchLimits, options: SearchOptions) -> SearchReport {
        let (earlier, current) = self.boards.split_at(self.boards.len() - 1);
        iterative_deepening(&current[0], earlier, limits, options, &mut self.pool)
    }
}
