//! Bounded ledger of recently reached positions.
//!
//! Only used to steer the search away from repeating itself; it is never an
//! undo stack. The ledger is owned by the caller and passed into the search
//! explicitly.

use std::collections::VecDeque;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::HISTORY_CAPACITY;

/// Entries closest to the present that `count_recent_occurrences` skips.
const SKIPPED_RECENT: usize = 2;

#[derive(Debug, Clone)]
pub struct BoardHistory {
    snapshots: VecDeque<Board>,
    capacity: usize,
}

impl Default for BoardHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl BoardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends a snapshot and evicts the oldest one beyond capacity.
    pub fn record(&mut self, board: &Board) {
        self.snapshots.push_back(board.clone());
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// Snapshots with the same placement as `board`, ignoring the two most
    /// recent entries.
    pub fn count_recent_occurrences(&self, board: &Board) -> usize {
        let considered = self.snapshots.len().saturating_sub(SKIPPED_RECENT);
        self.snapshots
            .iter()
            .take(considered)
            .filter(|snapshot| snapshot.same_placement(board))
            .count()
    }

    #[inline]
    pub fn found_recently(&self, board: &Board, threshold: usize) -> bool {
        self.count_recent_occurrences(board) >= threshold
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
