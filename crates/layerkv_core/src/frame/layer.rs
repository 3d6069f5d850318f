//! A single snapshot layer.

use crate::frame::Entry;
use std::collections::HashMap;

/// One transaction level's delta relative to its parent.
///
/// A key or value missing from a frame means "ask the parent", not
/// "does not exist".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Key -> last known entry.
    entries: HashMap<String, Entry>,
    /// Value -> number of live keys holding it.
    counts: HashMap<i64, usize>,
}

impl Frame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the entry recorded for `key` in this frame only.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Gets the count recorded for `value` in this frame only.
    #[must_use]
    pub fn count(&self, value: i64) -> Option<usize> {
        self.counts.get(&value).copied()
    }

    /// Records an entry, replacing whatever this frame held for `key`.
    pub fn put_entry(&mut self, key: &str, entry: Entry) {
        // Avoid reallocating the key on overwrite.
        match self.entries.get_mut(key) {
            Some(slot) => *slot = entry,
            None => {
                self.entries.insert(key.to_owned(), entry);
            }
        }
    }

    /// Records a count for `value`.
    pub fn put_count(&mut self, value: i64, count: usize) {
        self.counts.insert(value, count);
    }

    /// Returns the number of entries recorded in this frame.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no entry has been recorded in this frame.
    #[must_use]
    pub fn has_no_entries(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the recorded entries.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Iterates over the recorded counts.
    pub fn counts(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&v, &c)| (v, c))
    }

    /// Overlays a child frame onto this one.
    ///
    /// Last writer wins: child entries and counts replace ours without
    /// comparing versions.
    pub fn absorb(&mut self, child: Frame) {
        self.entries.extend(child.entries);
        self.counts.extend(child.counts);
    }
}
