//! The transactional store.

use crate::config::Config;
use crate::debug::DebugSnapshot;
use crate::error::{CoreError, CoreResult};
use crate::frame::{Entry, FrameStack};
use crate::stats::StoreStats;
use crate::traits::DataStore;
use tracing::debug;

/// A key -> integer store with nested transactions.
///
/// The store owns a [`FrameStack`]. All writes land in the current frame;
/// reads pull from ancestors lazily. Alongside entries every frame tracks how
/// many live keys hold each value, so [`count`](DataStore::count) is a map
/// lookup.
///
/// ## Transactions
///
/// - `begin` pushes a frame, unless the current frame is an open transaction
///   with no entries yet (see [`Config::collapse_empty_begin`])
/// - `rollback` drops the current frame
/// - `commit` folds every open frame into the root, not just the innermost
///
/// # Example
///
/// ```rust
/// use layerkv_core::{DataStore, Store};
///
/// let mut store = Store::new();
/// store.set("a", 10);
/// store.begin();
/// store.set("a", 20);
/// assert_eq!(store.count(10), 0);
/// assert!(store.rollback());
/// assert_eq!(store.get("a"), Some(10));
/// assert_eq!(store.count(10), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    frames: FrameStack,
    config: Config,
    stats: StoreStats,
}

impl Store {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a store with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            frames: FrameStack::new(),
            config,
            stats: StoreStats::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of frames, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// Checks if a transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.frames.at_root()
    }

    /// Returns a copy of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            ancestor_pulls: self.frames.ancestor_pulls(),
            ..self.stats
        }
    }

    /// Like [`rollback`](DataStore::rollback), but fails with
    /// [`CoreError::NoTransaction`] at the root.
    pub fn try_rollback(&mut self) -> CoreResult<()> {
        if self.rollback() {
            Ok(())
        } else {
            Err(CoreError::NoTransaction)
        }
    }

    /// Resolves the entry for `key` and reports whether it is live.
    fn resolve_live(&mut self, key: &str) -> (Option<Entry>, Option<i64>) {
        let entry = self.frames.lookup_entry(key);
        let live = entry.and_then(|e| e.live_value());
        (entry, live)
    }
}

impl DataStore for Store {
    fn get(&mut self, key: &str) -> Option<i64> {
        self.stats.record_get();
        self.frames.lookup_entry(key)?.live_value()
    }

    fn set(&mut self, key: &str, value: i64) {
        self.stats.record_set();
        let (previous, old_value) = self.resolve_live(key);

        self.frames.increment_count(value);
        // Tombstones hold no value, so only live entries give one back.
        if let Some(old) = old_value {
            self.frames.decrement_count(old);
        }

        self.frames
            .put_entry(key, Entry::overwrite(previous.as_ref(), value));
    }

    fn del(&mut self, key: &str) {
        self.stats.record_delete();
        let (previous, old_value) = self.resolve_live(key);

        if let Some(old) = old_value {
            self.frames.decrement_count(old);
        }

        self.frames.put_entry(key, Entry::delete(previous.as_ref()));
    }

    fn count(&mut self, value: i64) -> usize {
        self.stats.record_count();
        self.frames.lookup_count(value)
    }

    fn begin(&mut self) {
        let reuse = self.config.collapse_empty_begin
            && !self.frames.at_root()
            && self.frames.current().has_no_entries();

        if reuse {
            debug!(depth = self.frames.depth(), "reusing empty transaction frame");
        } else {
            self.frames.push();
            debug!(depth = self.frames.depth(), "began transaction");
        }
        self.stats.record_begin(!reuse);
    }

    fn commit(&mut self) -> usize {
        let folded = self.frames.collapse();
        debug!(folded, "committed transactions");
        self.stats.record_commit(folded);
        folded
    }

    fn rollback(&mut self) -> bool {
        let rolled_back = match self.frames.pop() {
            Some(frame) => {
                debug!(
                    discarded_entries = frame.entry_count(),
                    depth = self.frames.depth(),
                    "rolled back transaction"
                );
                true
            }
            None => {
                debug!("rollback requested with no open transaction");
                false
            }
        };
        self.stats.record_rollback(rolled_back);
        rolled_back
    }

    fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot::capture(self.frames.iter_from_top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_is_absent() {
        let mut store = Store::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn set_then_get() {
        let mut store = Store::new();
        store.set("a", 10);
        assert_eq!(store.get("a"), Some(10));
        store.set("a", -3);
        assert_eq!(store.get("a"), Some(-3));
    }

    #[test]
    fn del_hides_key() {
        let mut store = Store::new();
        store.set("a", 10);
        store.del("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.count(10), 0);
    }

    #[test]
    fn del_of_unknown_key_writes_tombstone() {
        let mut store = Store::new();
        store.del("ghost");
        assert_eq!(store.get("ghost"), None);
        let snapshot = store.debug_snapshot();
        assert!(snapshot.frames[0].entries["ghost"].is_tombstone());
        assert!(snapshot.frames[0].counts.is_empty());
    }

    #[test]
    fn overwrite_moves_count() {
        let mut store = Store::new();
        store.set("a", 10);
        store.set("a", 20);
        assert_eq!(store.count(10), 0);
        assert_eq!(store.count(20), 1);
    }

    #[test]
    fn same_value_overwrite_keeps_count() {
        let mut store = Store::new();
        store.set("a", 10);
        store.set("a", 10);
        assert_eq!(store.count(10), 1);
    }

    #[test]
    fn set_after_delete_does_not_touch_stale_value() {
        let mut store = Store::new();
        store.set("a", 10);
        store.del("a");
        store.set("b", 10);
        store.set("a", 5);
        assert_eq!(store.count(10), 1);
        assert_eq!(store.count(5), 1);
    }

    #[test]
    fn double_delete_counts_once() {
        let mut store = Store::new();
        store.set("a", 10);
        store.set("b", 10);
        store.del("a");
        store.del("a");
        assert_eq!(store.count(10), 1);
    }

    #[test]
    fn count_inside_transaction_sees_parent_holders() {
        let mut store = Store::new();
        store.set("a", 10);
        store.begin();
        store.set("b", 10);
        assert_eq!(store.count(10), 2);
        store.commit();
        assert_eq!(store.count(10), 2);
    }

    #[test]
    fn versions_increase_per_write() {
        let mut store = Store::new();
        store.set("a", 1);
        store.set("a", 2);
        store.del("a");
        store.set("a", 3);
        let snapshot = store.debug_snapshot();
        assert_eq!(snapshot.frames[0].entries["a"].version.as_u64(), 4);
    }

    #[test]
    fn begin_at_root_pushes() {
        let mut store = Store::new();
        store.begin();
        assert_eq!(store.depth(), 2);
        assert!(store.in_transaction());
    }

    #[test]
    fn empty_begin_is_reused() {
        let mut store = Store::new();
        store.begin();
        store.begin();
        assert_eq!(store.depth(), 2);
        assert_eq!(store.stats().begins, 2);
        assert_eq!(store.stats().frames_pushed, 1);
    }

    #[test]
    fn read_makes_frame_non_empty() {
        let mut store = Store::new();
        store.set("a", 1);
        store.begin();
        store.get("a");
        store.begin();
        assert_eq!(store.depth(), 3);
    }

    #[test]
    fn strict_config_pushes_every_begin() {
        let mut store = Store::with_config(Config::strict());
        store.begin();
        store.begin();
        assert_eq!(store.depth(), 3);
        assert!(store.rollback());
        assert!(store.rollback());
        assert!(!store.rollback());
    }

    #[test]
    fn rollback_at_root() {
        let mut store = Store::new();
        store.set("a", 1);
        assert!(!store.rollback());
        assert_eq!(store.try_rollback(), Err(CoreError::NoTransaction));
        assert_eq!(store.get("a"), Some(1));
        assert_eq!(store.stats().rollbacks_without_transaction, 2);
    }

    #[test]
    fn try_rollback_inside_transaction() {
        let mut store = Store::new();
        store.begin();
        assert_eq!(store.try_rollback(), Ok(()));
        assert!(!store.in_transaction());
    }

    #[test]
    fn commit_reports_folded_frames() {
        let mut store = Store::new();
        assert_eq!(store.commit(), 0);
        store.begin();
        store.set("a", 1);
        store.begin();
        store.set("b", 2);
        assert_eq!(store.commit(), 2);
        assert_eq!(store.depth(), 1);
    }

    #[test]
    fn debug_snapshot_orders_current_first() {
        let mut store = Store::new();
        store.set("root", 1);
        store.begin();
        store.set("child", 2);
        let snapshot = store.debug_snapshot();
        assert_eq!(snapshot.depth(), 2);
        assert_eq!(snapshot.frames[0].index, 1);
        assert!(snapshot.frames[0].entries.contains_key("child"));
        assert!(snapshot.frames[1].entries.contains_key("root"));
    }

    #[test]
    fn print_debug_writes_text_dump() {
        let mut store = Store::new();
        store.set("a", 1);
        store.begin();
        store.del("a");

        let mut out = Vec::new();
        store.print_debug(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Frame: 1\n"));
        assert!(text.contains("a: <deleted>@v2"));
        assert!(text.contains("Frame: 2\n"));
        assert_eq!(text, store.debug_snapshot().to_string());
    }

    #[test]
    fn config_is_kept() {
        assert!(Store::new().config().collapse_empty_begin);
        let strict = Store::with_config(Config::strict());
        assert!(!strict.config().collapse_empty_begin);
    }

    #[test]
    fn stats_include_ancestor_pulls() {
        let mut store = Store::new();
        store.set("a", 1);
        store.begin();
        store.get("a");
        store.get("a");
        assert_eq!(store.stats().ancestor_pulls, 1);
    }
}
