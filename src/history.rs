//! Linear undo/redo history with a bounded number of entries.
//!
//! Pushing while the cursor is behind the newest entry discards the redo
//! branch. Once the capacity is exceeded the oldest entry is evicted and
//! the cursor shifts down with it, so it keeps pointing at the newest
//! state.

use crate::constants::MAX_HISTORY_STATES;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Button state derived from the history cursor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

#[derive(Clone, Debug)]
pub struct HistoryManager<T> {
    entries: VecDeque<T>,
    cursor: Option<usize>,
    capacity: usize,
}

impl<T> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new(MAX_HISTORY_STATES)
    }
}

impl<T> HistoryManager<T> {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    pub fn push(&mut self, state: T) {
        if let Some(cursor) = self.cursor {
            let pruned = self.entries.len() - (cursor + 1);
            if pruned > 0 {
                trace!(pruned, "Discarding redo branch");
            }
            self.entries.truncate(cursor + 1);
        } else {
            self.entries.clear();
        }

        self.entries.push_back(state);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            debug!(capacity = self.capacity, "History full, evicted oldest entry");
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry. Returns the state to restore, or `None` when
    /// already at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Step forward one entry. Returns `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        let next = self.cursor? + 1;
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        self.entries.get(next)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    pub fn state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// The entry at the cursor
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
