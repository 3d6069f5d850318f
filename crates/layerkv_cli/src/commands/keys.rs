//! Key and value commands: GET, SET, UNSET, NUMEQUALTO.

use crate::error::RouterResult;
use layerkv_core::{parse_value, DataStore};
use std::io::Write;
use tracing::debug;

/// Prints the value of each key, or `NULL`.
pub fn get(store: &mut impl DataStore, out: &mut impl Write, args: &[&str]) -> RouterResult<()> {
    for key in args {
        match store.get(key) {
            Some(value) => writeln!(out, "{value}")?,
            None => writeln!(out, "NULL")?,
        }
    }
    Ok(())
}

/// Sets a key. Ignored if the value is missing or not an integer.
pub fn set(store: &mut impl DataStore, args: &[&str]) {
    let [key, raw, ..] = args else {
        debug!(?args, "SET needs a key and a value, ignoring");
        return;
    };
    match parse_value(raw) {
        Ok(value) => store.set(key, value),
        Err(err) => debug!(key, %err, "ignoring SET"),
    }
}

/// Deletes each key.
pub fn unset(store: &mut impl DataStore, args: &[&str]) {
    for key in args {
        store.del(key);
    }
}

/// Prints how many keys hold each value. Malformed values print `0`.
pub fn num_equal_to(
    store: &mut impl DataStore,
    out: &mut impl Write,
    args: &[&str],
) -> RouterResult<()> {
    for raw in args {
        let count = match parse_value(raw) {
            Ok(value) => store.count(value),
            Err(_) => 0,
        };
        writeln!(out, "{count}")?;
    }
    Ok(())
}
