//! Benchmark utilities.

#![warn(missing_docs)]

use layerkv_core::{DataStore, Store};
use rand::Rng;

/// Generate `count` distinct key names.
pub fn generate_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key{i}")).collect()
}

/// Generate `count` random values in `0..distinct`.
pub fn random_values(count: usize, distinct: i64) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..distinct)).collect()
}

/// Builds a store with every key set at the root, then `depth` open
/// transactions each holding one unrelated write.
pub fn layered_store(keys: &[String], values: &[i64], depth: usize) -> Store {
    let mut store = Store::new();
    for (key, value) in keys.iter().zip(values.iter().cycle()) {
        store.set(key, *value);
    }
    for level in 0..depth {
        store.begin();
        store.set(&format!("level{level}"), level as i64);
    }
    store
}
