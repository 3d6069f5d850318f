//! The interface the command router drives.

use crate::debug::DebugSnapshot;
use std::io::{self, Write};

/// A transactional key -> integer store.
///
/// Reads take `&mut self` because lookups memoize ancestor results into the
/// current transaction frame.
pub trait DataStore {
    /// Returns the visible value of `key`, or `None` if unset or deleted.
    fn get(&mut self, key: &str) -> Option<i64>;

    /// Sets `key` to `value` in the current transaction.
    fn set(&mut self, key: &str, value: i64);

    /// Deletes `key` in the current transaction.
    fn del(&mut self, key: &str);

    /// Returns how many keys currently hold `value`.
    fn count(&mut self, value: i64) -> usize;

    /// Opens a transaction, or reuses an empty open one.
    fn begin(&mut self);

    /// Folds every open transaction into the root.
    ///
    /// Returns the number of frames folded.
    fn commit(&mut self) -> usize;

    /// Discards the innermost open transaction.
    ///
    /// Returns `false` if no transaction is open.
    fn rollback(&mut self) -> bool;

    /// Captures the frame stack for diagnostics.
    fn debug_snapshot(&self) -> DebugSnapshot;

    /// Writes the frame stack as text, current frame first.
    fn print_debug(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.debug_snapshot())
    }
}
