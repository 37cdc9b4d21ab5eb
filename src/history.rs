use std::collections::VecDeque;

use crate::grid::Grid;

/// Maximum number of snapshots retained for undo
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo over committed grid snapshots.
///
/// Holds at least one snapshot at all times and a cursor pointing at the
/// current one. Snapshots past the cursor are the redo future.
#[derive(Debug, Clone)]
pub struct GridHistory {
    snapshots: VecDeque<Grid>,
    cursor: usize,
    capacity: usize,
}

impl GridHistory {
    /// Creates a history holding only `initial`
    pub fn new(initial: Grid) -> Self {
        Self::with_capacity(initial, MAX_HISTORY)
    }

    /// Creates a history retaining at most `capacity` snapshots (at least one)
    pub fn with_capacity(initial: Grid, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut snapshots = VecDeque::with_capacity(capacity.min(MAX_HISTORY) + 1);
        snapshots.push_back(initial);
        Self {
            snapshots,
            cursor: 0,
            capacity,
        }
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> &Grid {
        &self.snapshots[self.cursor]
    }

    /// Record a new snapshot and make it current.
    ///
    /// Committing a grid equal to the current one does nothing and returns
    /// `false`. Otherwise the redo future is discarded, and when the capacity
    /// is exceeded the oldest snapshots are dropped.
    pub fn commit(&mut self, grid: Grid) -> bool {
        if *self.current() == grid {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(grid);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
        true
    }

    /// Step back one snapshot. At the oldest snapshot this is a no-op.
    pub fn undo(&mut self) -> &Grid {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one snapshot. Without a redo future this is a no-op.
    pub fn redo(&mut self) -> &Grid {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Discard all snapshots and start over from `initial`
    pub fn reset(&mut self, initial: Grid) {
        self.snapshots.clear();
        self.snapshots.push_back(initial);
        self.cursor = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
