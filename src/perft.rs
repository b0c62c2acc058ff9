//! Move-path enumeration for validating the generator against published counts.

use crate::board::{Board, BoardPool, Move};

impl Board {
    /// Leaf count at `depth`, using a temporary pool.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pool = BoardPool::with_capacity(256);
        perft(self, depth, &mut pool)
    }
}

/// Number of leaf positions `depth` plies below `board`.
///
/// Bulk-counts at the last ply: the children of a depth-one node are
/// generated and counted but never visited.
pub fn perft(board: &Board, depth: u32, pool: &mut BoardPool) -> u64 {
    perft_with_moves(board, depth, pool).0
}

/// Leaf count together with the total number of moves generated on the way.
pub fn perft_with_moves(board: &Board, depth: u32, pool: &mut BoardPool) -> (u64, u64) {
    if depth == 0 {
        return (1, 0);
    }

    let base = pool.len();
    let count = board.generate_children(pool);
    let mut moves = count as u64;
    if depth == 1 {
        pool.drop_last(count);
        return (moves, moves);
    }

    let mut nodes = 0;
    for i in 0..count {
        let child = pool[base + i];
        let (n, total) = perft_with_moves(&child, depth - 1, pool);
        nodes += n;
        moves += total;
    }
    pool.drop_last(count);
    (nodes, moves)
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(board: &Board, depth: u32, pool: &mut BoardPool) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let base = pool.len();
    let count = board.generate_children(pool);
    let mut split = Vec::with_capacity(count);
    for i in 0..count {
        let child = pool[base + i];
        split.push((child.last_move(), perft(&child, depth - 1, pool)));
    }
    pool.drop_last(count);
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow_start() {
        let board = Board::new();
        assert_eq!(board.perft(0), 1);
        assert_eq!(board.perft(1), 20);
        assert_eq!(board.perft(2), 400);
    }

    #[test]
    fn test_perft_with_moves_counts_interior() {
        let board = Board::new();
        let mut pool = BoardPool::new();
        let (nodes, moves) = perft_with_moves(&board, 2, &mut pool);
        assert_eq!(nodes, 400);
        assert_eq!(moves, 420);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_divide_sums_to_total() {
        let board = Board::new();
        let mut pool = BoardPool::new();
        let split = perft_divide(&board, 3, &mut pool);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);
        let e2e4: Move = "e2e4".parse().unwrap();
        assert_eq!(split.iter().find(|(m, _)| *m == e2e4).map(|(_, n)| *n), Some(600));
        assert!(pool.is_empty());
    }
}
