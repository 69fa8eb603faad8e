//! Snapshot-based undo/redo stacks
//!
//! `past` holds older full snapshots of the board list (oldest first),
//! `future` holds snapshots available for redo (nearest first). A new
//! recording invalidates any pending redo path.

use cork_common::Board;
use std::collections::VecDeque;

/// One history entry: the full board list at a point in time
pub type Snapshot = Vec<Board>;

/// Undo/redo history with a bounded depth.
///
/// Depth 0 means unbounded; otherwise the oldest undo step is discarded
/// once the cap is reached.
#[derive(Debug, Default)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: VecDeque<Snapshot>,
    depth: usize,
}

impl History {
    pub fn new(depth: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            depth,
        }
    }

    /// Record the pre-mutation snapshot and clear the redo path
    pub fn record(&mut self, snapshot: Snapshot) {
        self.push_past(snapshot);
        self.future.clear();
    }

    /// Step back: trades `current` for the most recent past snapshot.
    /// Returns `None` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.past.pop_back()?;
        self.future.push_front(current);
        Some(restored)
    }

    /// Step forward: trades `current` for the nearest future snapshot.
    /// Returns `None` (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.future.pop_front()?;
        self.push_past(current);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        if self.depth > 0 && self.past.len() == self.depth {
            self.past.pop_front();
        }
        self.past.push_back(snapshot);
    }
}
