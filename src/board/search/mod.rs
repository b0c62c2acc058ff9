//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Plain negamax as a reference search
//! - Alpha-beta with a single-legal-move fast path at the root
//! - Draw scoring for repeated positions along the search path
//! - Iterative deepening bounded by depth and a wall-clock deadline
//!
//! Scores are centipawns from the point of view of the side to move.

mod alphabeta;
mod eval;
mod iterative;
mod negamax;

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::PositionHistory;
use super::{Board, BoardPool, Move};

pub use iterative::{find_best_move, iterative_deepening};

/// Lower score sentinel: the side to move is checkmated
pub const SCORE_MIN: i32 = -100_000;
/// Upper score sentinel: the opponent's king can be taken
pub const SCORE_MAX: i32 = 100_000;
/// Score of a drawn or repeated position
pub const DRAW_SCORE: i32 = 0;
/// Depth cap for iterative deepening without an explicit depth limit
pub const MAX_DEPTH: u32 = 64;

/// Why a search result is what it is, when it is not an ordinary best move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Diagnostic {
    /// Ordinary result, or a cancelled search
    #[default]
    None,
    /// Depth below one: the score is the static evaluation
    InvalidDepth,
    /// Only one legal move; it was returned without searching
    SingleMove,
    /// The opponent's king is already attacked
    Checkmate,
    /// The side to move is in check with no legal moves
    Checkmated,
    /// No legal moves and no check
    Draw,
}

impl Diagnostic {
    /// True for outcomes that end iterative deepening early
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Diagnostic::SingleMove | Diagnostic::Checkmate | Diagnostic::Checkmated | Diagnostic::Draw
        )
    }
}

/// Evaluation and reporting switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOptions {
    /// Add one centipawn per legal reply to leaf evaluations
    pub add_mobility_term: bool,
    /// Log every root move as it is scored
    pub show_trace: bool,
}

impl SearchOptions {
    #[must_use]
    pub fn with_mobility_term(mut self, enabled: bool) -> Self {
        self.add_mobility_term = enabled;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.show_trace = enabled;
        self
    }
}

/// How long iterative deepening may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchLimits {
    pub max_depth: Option<u32>,
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Search exactly up to `depth`, with no time limit.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits {
            max_depth: Some(depth),
            move_time: None,
        }
    }

    /// Search until `move_time` has elapsed.
    #[must_use]
    pub fn move_time(move_time: Duration) -> Self {
        SearchLimits {
            max_depth: None,
            move_time: Some(move_time),
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub(crate) fn depth_cap(&self) -> u32 {
        self.max_depth.unwrap_or(MAX_DEPTH).min(MAX_DEPTH)
    }
}

/// Outcome of one root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub score: i32,
    /// `Move::NULL` when there is no move to play, or the search was cancelled
    pub best_move: Move,
    pub diagnostic: Diagnostic,
}

impl SearchResult {
    /// What a cancelled search reports: zero score, no move, no diagnostic.
    pub const CANCELLED: SearchResult = SearchResult {
        score: 0,
        best_move: Move::NULL,
        diagnostic: Diagnostic::None,
    };

    #[inline]
    pub(crate) const fn terminal(score: i32, diagnostic: Diagnostic) -> Self {
        SearchResult {
            score,
            best_move: Move::NULL,
            diagnostic,
        }
    }

    #[inline]
    pub(crate) const fn best(score: i32, best_move: Move) -> Self {
        SearchResult {
            score,
            best_move,
            diagnostic: Diagnostic::None,
        }
    }
}

/// Outcome of iterative deepening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Result of the deepest completed depth
    pub result: SearchResult,
    /// Deepest completed depth, zero if none completed
    pub depth: u32,
    /// Children generated over all depths
    pub nodes: u64,
    pub elapsed: Duration,
}

/// State for one search call: the board pool, the repetition trail, the
/// deadline and the counters.
///
/// The pool is reset on construction and owned exclusively until the
/// context is dropped.
pub struct SearchContext<'a> {
    pool: &'a mut BoardPool,
    trail: PositionHistory,
    options: SearchOptions,
    deadline: Option<Instant>,
    nodes: u64,
    cancelled: bool,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(pool: &'a mut BoardPool, options: SearchOptions) -> Self {
        pool.reset();
        SearchContext {
            pool,
            trail: PositionHistory::new(),
            options,
            deadline: None,
            nodes: 0,
            cancelled: false,
        }
    }

    /// Positions played before the root, oldest first, for repetition checks.
    #[must_use]
    pub fn with_history(mut self, history: &[Board]) -> Self {
        self.trail = PositionHistory::from_boards(history);
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Children generated so far
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[inline]
    pub(crate) fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Polled before each sibling; latches `cancelled` once the deadline passes.
    #[inline]
    fn should_stop(&mut self) -> bool {
        if !self.cancelled && self.deadline_passed() {
            self.cancelled = true;
        }
        self.cancelled
    }

    /// Generate the children of `board` on top of the pool and count them.
    /// Returns the index of the first child and the count.
    #[inline]
    fn expand(&mut self, board: &Board) -> (usize, usize) {
        let base = self.pool.len();
        let count = board.generate_children(self.pool);
        self.nodes += count as u64;
        (base, count)
    }

    /// Root handling shared by both searches: invalid depth, a capturable
    /// opponent king, and positions without legal moves.
    fn root_terminal(&mut self, board: &Board, depth: u32) -> Option<SearchResult> {
        if depth < 1 {
            return Some(SearchResult::terminal(
                self.evaluate(board),
                Diagnostic::InvalidDepth,
            ));
        }
        if board.other_king_in_check() {
            return Some(SearchResult::terminal(SCORE_MAX, Diagnostic::Checkmate));
        }
        None
    }

    /// Score for a node whose side to move has no legal moves
    #[inline]
    fn no_moves_score(board: &Board) -> i32 {
        if board.king_in_check() {
            SCORE_MIN
        } else {
            DRAW_SCORE
        }
    }

    fn trace_root_move(&self, algorithm: &str, depth: u32, score: i32, mv: Move) {
        if self.options.show_trace {
            log::debug!(
                "{algorithm}: depth={depth} nodes={} score={score} move={mv}",
                self.nodes
            );
        }
    }
}
