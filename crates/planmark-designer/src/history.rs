//! Bounded undo/redo over full snapshots.
//!
//! The manager owns the live value plus two stacks of earlier values. Each
//! stack holds at most `max_depth` snapshots; pushing past the limit drops
//! the oldest one.

use std::collections::VecDeque;

/// Default depth of each stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Snapshot-based undo/redo state machine.
#[derive(Debug, Clone)]
pub struct HistoryManager<T> {
    current: T,
    undo_stack: VecDeque<T>,
    redo_stack: VecDeque<T>,
    max_depth: usize,
}

impl<T: Clone> HistoryManager<T> {
    /// Creates a manager with the default depth.
    pub fn new(initial: T) -> Self {
        Self::with_depth(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Creates a manager with a custom maximum depth (at least 1).
    pub fn with_depth(initial: T, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            current: initial,
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth,
        }
    }

    /// The live value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Replaces the live value without touching either stack.
    ///
    /// Used for intermediate drag frames after the edit was recorded.
    pub fn replace_current(&mut self, value: T) {
        self.current = value;
    }

    /// Snapshots the live value onto the undo stack and clears redo.
    ///
    /// Call once per discrete edit, before applying it.
    pub fn record_before_change(&mut self) {
        push_bounded(&mut self.undo_stack, self.current.clone(), self.max_depth);
        self.redo_stack.clear();
    }

    /// Records the live value, then replaces it with `value`.
    pub fn commit(&mut self, value: T) {
        self.record_before_change();
        self.current = value;
    }

    /// Restores the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.current, previous);
                push_bounded(&mut self.redo_stack, current, self.max_depth);
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone snapshot. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop_back() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                push_bounded(&mut self.undo_stack, current, self.max_depth);
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drops both stacks, keeping the live value.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Replaces the live value and drops both stacks.
    pub fn reset(&mut self, value: T) {
        self.current = value;
        self.clear_history();
    }
}

impl<T: Clone + PartialEq> HistoryManager<T> {
    /// Drops the newest undo snapshot when it equals the live value.
    ///
    /// Takes back a [`record_before_change`](Self::record_before_change)
    /// whose edit turned out to change nothing. The redo stack it cleared
    /// stays cleared. Returns whether an entry was dropped.
    pub fn retract_unchanged(&mut self) -> bool {
        if self.undo_stack.back() == Some(&self.current) {
            self.undo_stack.pop_back();
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

fn push_bounded<T>(stack: &mut VecDeque<T>, value: T, max_depth: usize) {
    stack.push_back(value);
    while stack.len() > max_depth {
        stack.pop_front();
    }
}
