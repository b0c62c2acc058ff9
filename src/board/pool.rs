//! Board pool: a LIFO arena of board snapshots backing recursive generation.

use std::ops::Index;

use super::Board;

/// Reusable stack of boards.
///
/// Move generation appends children with [`BoardPool::push`]; a caller
/// recursing into them addresses each child by index (never by a reference
/// held across a later push) and releases the whole batch with
/// [`BoardPool::drop_last`] before returning. Storage is kept between
/// searches so the hot path does not allocate once the pool has grown.
#[derive(Clone, Debug, Default)]
pub struct BoardPool {
    boards: Vec<Board>,
    high_water: usize,
}

impl BoardPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BoardPool {
            boards: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Copy `board` onto the top of the pool and return the new entry for
    /// in-place mutation.
    #[inline]
    pub fn push(&mut self, board: Board) -> &mut Board {
        self.boards.push(board);
        self.high_water = self.high_water.max(self.boards.len());
        let top = self.boards.len() - 1;
        &mut self.boards[top]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Board> {
        self.boards.last_mut()
    }

    /// Release the `n` most recent entries.
    #[inline]
    pub fn drop_last(&mut self, n: usize) {
        debug_assert!(n <= self.boards.len(), "pool underflow");
        let keep = self.boards.len().saturating_sub(n);
        self.boards.truncate(keep);
    }

    /// Empty the pool, keeping its storage.
    pub fn reset(&mut self) {
        self.boards.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Deepest the pool has been since it was created
    #[inline]
    #[must_use]
    pub fn high_water_mark(&self) -> usize {
        self.high_water
    }

    /// Entries from `start` to the top
    #[inline]
    #[must_use]
    pub fn tail(&self, start: usize) -> &[Board] {
        &self.boards[start.min(self.boards.len())..]
    }
}

impl Index<usize> for BoardPool {
    type Output = Board;

    #[inline]
    fn index(&self, index: usize) -> &Board {
        &self.boards[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drop() {
        let mut pool = BoardPool::new();
        assert!(pool.is_empty());
        let board = Board::new();
        pool.push(board);
        pool.push(board).flip_turn();
        assert_eq!(pool.len(), 2);
        assert_ne!(pool[1].turn(), pool[0].turn());
        pool.drop_last(1);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.high_water_mark(), 2);
        pool.reset();
        assert!(pool.is_empty());
        assert_eq!(pool.high_water_mark(), 2);
    }

    #[test]
    fn test_last_mut_edits_top() {
        let mut pool = BoardPool::with_capacity(4);
        assert!(pool.last().is_none());
        pool.push(Board::new());
        if let Some(top) = pool.last_mut() {
            top.flip_turn();
        }
        assert_eq!(pool.last().map(Board::turn), Some(crate::board::Color::Black));
    }

    #[test]
    fn test_tail() {
        let mut pool = BoardPool::new();
        for _ in 0..3 {
            pool.push(Board::new());
        }
        assert_eq!(pool.tail(1).len(), 2);
        assert!(pool.tail(10).is_empty());
    }
}
