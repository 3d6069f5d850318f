//! The stack of open frames.

use crate::frame::{Entry, Frame};
use tracing::trace;

/// An indexable stack of frames, root at index 0, current frame on top.
///
/// The root is created with the stack and can never be popped, so the stack
/// always has at least one frame.
#[derive(Debug, Clone)]
pub struct FrameStack {
    frames: Vec<Frame>,
    /// Number of lookups answered by copying from an ancestor frame.
    ancestor_pulls: u64,
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStack {
    /// Creates a stack holding only an empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
            ancestor_pulls: 0,
        }
    }

    /// Returns the number of frames, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Checks if the root is the current frame.
    #[must_use]
    pub fn at_root(&self) -> bool {
        self.frames.len() == 1
    }

    /// Returns the current frame.
    #[must_use]
    pub fn current(&self) -> &Frame {
        // The root is never popped.
        &self.frames[self.frames.len() - 1]
    }

    /// Iterates over frames from the current one down to the root.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().rev()
    }

    /// Returns the number of lookups served by an ancestor frame.
    #[must_use]
    pub fn ancestor_pulls(&self) -> u64 {
        self.ancestor_pulls
    }

    /// Resolves the entry for `key`.
    ///
    /// On a miss in the current frame, the nearest ancestor holding the key
    /// answers and its entry is copied into the current frame. Intermediate
    /// frames are left untouched. If no frame knows the key nothing is
    /// recorded.
    pub fn lookup_entry(&mut self, key: &str) -> Option<Entry> {
        let (top, ancestors) = self.frames.split_last_mut()?;
        if let Some(entry) = top.entry(key) {
            return Some(*entry);
        }

        let found = ancestors.iter().rev().find_map(|f| f.entry(key).copied())?;
        trace!(key, "pulled entry from ancestor frame");
        top.put_entry(key, found);
        self.ancestor_pulls += 1;
        Some(found)
    }

    /// Resolves the number of live keys holding `value`.
    ///
    /// Same walk as [`lookup_entry`](Self::lookup_entry), except that a miss
    /// everywhere records a zero in the current frame.
    pub fn lookup_count(&mut self, value: i64) -> usize {
        let Some((top, ancestors)) = self.frames.split_last_mut() else {
            return 0;
        };
        if let Some(count) = top.count(value) {
            return count;
        }

        let count = match ancestors.iter().rev().find_map(|f| f.count(value)) {
            Some(count) => {
                trace!(value, count, "pulled count from ancestor frame");
                self.ancestor_pulls += 1;
                count
            }
            None => 0,
        };
        top.put_count(value, count);
        count
    }

    /// Adds one holder of `value` in the current frame.
    pub fn increment_count(&mut self, value: i64) {
        let count = self.lookup_count(value);
        self.current_mut().put_count(value, count + 1);
    }

    /// Removes one holder of `value` in the current frame.
    ///
    /// Does nothing if the count is already zero.
    pub fn decrement_count(&mut self, value: i64) {
        let count = self.lookup_count(value);
        if count > 0 {
            self.current_mut().put_count(value, count - 1);
        }
    }

    /// Records an entry in the current frame.
    pub fn put_entry(&mut self, key: &str, entry: Entry) {
        self.current_mut().put_entry(key, entry);
    }

    /// Pushes a new empty frame on top.
    pub fn push(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Pops the current frame, unless it is the root.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.at_root() {
            None
        } else {
            self.frames.pop()
        }
    }

    /// Folds every frame into its parent until only the root is left.
    ///
    /// Returns the number of frames folded.
    pub fn collapse(&mut self) -> usize {
        let mut folded = 0;
        while let Some(child) = self.pop() {
            self.current_mut().absorb(child);
            folded += 1;
        }
        folded
    }

    fn current_mut(&mut self) -> &mut Frame {
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }
}
