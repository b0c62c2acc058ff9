use super::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TrailEntry {
    hash: u64,
    reversible: bool,
}

/// The chain of positions leading to the current one, oldest first.
///
/// Stands in for parent links: the game session records the boards it has
/// played, and the search pushes each board on the way down and pops it on
/// the way back up, so the trail always matches the path to the node being
/// searched.
#[derive(Clone, Debug, Default)]
pub(crate) struct PositionHistory {
    entries: Vec<TrailEntry>,
}

impl PositionHistory {
    pub(crate) fn new() -> Self {
        PositionHistory {
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_boards<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Self {
        let mut history = PositionHistory::new();
        for board in boards {
            history.push(board);
        }
        history
    }

    #[inline]
    pub(crate) fn push(&mut self, board: &Board) {
        self.entries.push(TrailEntry {
            hash: board.zobrist,
            reversible: board.reversible,
        });
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        self.entries.pop();
    }

    /// True if `board` repeats an earlier position on the trail.
    ///
    /// An irreversible board cannot repeat anything. Otherwise the trail is
    /// walked newest first; the walk ends at the first irreversible entry,
    /// after comparing it, since no earlier position can recur past a capture
    /// or pawn move.
    pub(crate) fn is_repetition(&self, board: &Board) -> bool {
        if !board.reversible {
            return false;
        }
        for entry in self.entries.iter().rev() {
            if entry.hash == board.zobrist {
                return true;
            }
            if !entry.reversible {
                return false;
            }
        }
        false
    }
}
