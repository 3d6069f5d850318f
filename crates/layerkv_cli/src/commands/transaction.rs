//! Transaction commands: BEGIN, COMMIT, ROLLBACK.

use crate::error::RouterResult;
use layerkv_core::DataStore;
use std::io::Write;

/// Opens a transaction.
pub fn begin(store: &mut impl DataStore) {
    store.begin();
}

/// Commits every open transaction.
pub fn commit(store: &mut impl DataStore) {
    store.commit();
}

/// Rolls back the innermost transaction, or prints `NO TRANSACTION`.
pub fn rollback(store: &mut impl DataStore, out: &mut impl Write) -> RouterResult<()> {
    if !store.rollback() {
        writeln!(out, "NO TRANSACTION")?;
    }
    Ok(())
}
