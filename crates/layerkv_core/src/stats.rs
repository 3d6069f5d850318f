//! Store statistics.
//!
//! Provides operation counters for diagnostics.
//!
//! # Usage
//!
//! ```rust
//! use layerkv_core::{DataStore, Store};
//!
//! let mut store = Store::new();
//! store.set("a", 1);
//! store.get("a");
//!
//! let stats = store.stats();
//! assert_eq!(stats.sets, 1);
//! assert_eq!(stats.gets, 1);
//! ```

use serde::Serialize;

/// Store statistics.
///
/// Counters are monotonically increasing. The store is single-threaded, so
/// these are plain integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of `get` calls.
    pub gets: u64,
    /// Number of `set` calls.
    pub sets: u64,
    /// Number of `del` calls.
    pub deletes: u64,
    /// Number of `count` calls.
    pub counts: u64,
    /// Number of `begin` calls.
    pub begins: u64,
    /// Number of frames actually pushed by `begin`.
    pub frames_pushed: u64,
    /// Number of `commit` calls.
    pub commits: u64,
    /// Number of frames folded into a parent by `commit`.
    pub frames_folded: u64,
    /// Number of successful rollbacks.
    pub rollbacks: u64,
    /// Number of rollbacks requested with no open transaction.
    pub rollbacks_without_transaction: u64,
    /// Number of lookups answered by copying from an ancestor frame.
    pub ancestor_pulls: u64,
}

impl StoreStats {
    /// Creates a zeroed stats instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_get(&mut self) {
        self.gets += 1;
    }

    pub(crate) fn record_set(&mut self) {
        self.sets += 1;
    }

    pub(crate) fn record_delete(&mut self) {
        self.deletes += 1;
    }

    pub(crate) fn record_count(&mut self) {
        self.counts += 1;
    }

    pub(crate) fn record_begin(&mut self, pushed: bool) {
        self.begins += 1;
        if pushed {
            self.frames_pushed += 1;
        }
    }

    pub(crate) fn record_commit(&mut self, folded: usize) {
        self.commits += 1;
        self.frames_folded += folded as u64;
    }

    pub(crate) fn record_rollback(&mut self, rolled_back: bool) {
        if rolled_back {
            self.rollbacks += 1;
        } else {
            self.rollbacks_without_transaction += 1;
        }
    }

    /// Returns the total number of operations recorded.
    #[must_use]
    pub fn total_operations(&self) -> u64 {
        self.gets
            + self.sets
            + self.deletes
            + self.counts
            + self.begins
            + self.commits
            + self.rollbacks
            + self.rollbacks_without_transaction
    }
}
