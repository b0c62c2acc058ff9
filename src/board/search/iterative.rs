use std::time::Instant;

use log::debug;

use super::{SearchContext, SearchLimits, SearchOptions, SearchReport, SearchResult, SCORE_MAX};
use crate::board::{Board, BoardPool};

/// Iterative deepening with a fresh pool and no game history.
///
/// # Example
/// ```
/// use mailbox_chess::{find_best_move, Board, SearchLimits, SearchOptions};
///
/// let board = Board::new();
/// let report = find_best_move(&board, SearchLimits::depth(2), SearchOptions::default());
/// assert_eq!(report.depth, 2);
/// assert!(board.legal_moves().contains(&report.result.best_move));
/// ```
#[must_use]
pub fn find_best_move(board: &Board, limits: SearchLimits, options: SearchOptions) -> SearchReport {
    let mut pool = BoardPool::with_capacity(1024);
    iterative_deepening(board, &[], limits, options, &mut pool)
}

/// Search `board` at depth 1, 2, 3, ... and report the deepest completed result.
///
/// `history` holds the positions played before `board`, oldest first; they
/// feed repetition detection. Deepening stops when the deadline passes (a
/// depth cut short is discarded), at the depth cap, on a single legal move,
/// on any terminal diagnostic, or once a forced win is found.
///
/// If not even depth one completes in time, the first legal move is returned
/// with depth zero so that a caller always gets a playable move while one
/// exists.
pub fn iterative_deepening(
    board: &Board,
    history: &[Board],
    limits: SearchLimits,
    options: SearchOptions,
    pool: &mut BoardPool,
) -> SearchReport {
    let start = Instant::now();
    let deadline = limits.move_time.map(|budget| start + budget);
    let max_depth = limits.depth_cap();

    let mut ctx = SearchContext::new(pool, options)
        .with_history(history)
        .with_deadline(deadline);

    if max_depth == 0 {
        let result = ctx.root_alpha_beta(board, 0);
        return SearchReport {
            result,
            depth: 0,
            nodes: ctx.nodes(),
            elapsed: start.elapsed(),
        };
    }

    let mut best = SearchResult::CANCELLED;
    let mut best_depth = 0;

    for depth in 1..=max_depth {
        if ctx.deadline_passed() {
            debug!("search depth={depth}: timeout");
            break;
        }

        let depth_start = Instant::now();
        let nodes_before = ctx.nodes();
        let result = ctx.root_alpha_beta(board, depth);

        if ctx.is_cancelled() {
            debug!("search depth={depth}: timeout - cancelled");
            break;
        }

        best = result;
        best_depth = depth;
        debug!(
            "search depth={depth}: nodes={} score={} move={} ({:?}) elapsed={:?}",
            ctx.nodes() - nodes_before,
            result.score,
            result.best_move,
            result.diagnostic,
            depth_start.elapsed()
        );

        if result.diagnostic.is_terminal() {
            break;
        }
        if result.score == SCORE_MAX {
            debug!("search depth={depth}: found checkmate");
            break;
        }
    }

    if best_depth == 0 {
        if let Some(first) = board.legal_moves().first() {
            best = SearchResult::best(board.relative_material(), *first);
        }
    }

    let report = SearchReport {
        result: best,
        depth: best_depth,
        nodes: ctx.nodes(),
        elapsed: start.elapsed(),
    };
    debug!(
        "search: best depth={} nodes={} score={} move={} elapsed={:?}",
        report.depth, report.nodes, report.result.score, report.result.best_move, report.elapsed
    );
    report
}
