//! Property tests for the store against the reference model.

use layerkv_core::{Config, DataStore, Store};
use layerkv_testkit::prelude::*;
use proptest::prelude::*;

/// Every key's visible value and every value's holder count.
fn observe(store: &mut impl DataStore) -> (Vec<Option<i64>>, Vec<usize>) {
    let values = KEY_POOL.iter().map(|k| store.get(k)).collect();
    let counts = (MIN_VALUE..=MAX_VALUE).map(|v| store.count(v)).collect();
    (values, counts)
}

proptest! {
    #![proptest_config(PropTestConfig::thorough().to_proptest_config())]

    #[test]
    fn store_matches_model(ops in operation_sequence_strategy(1, 80)) {
        let mut store = Store::new();
        let mut model = ModelStore::new();
        for op in &ops {
            prop_assert_eq!(op.apply(&mut store), op.apply(&mut model), "diverged at {}", op);
            prop_assert_eq!(store.depth(), model.depth());
        }
    }
}

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn strict_store_matches_strict_model(ops in operation_sequence_strategy(1, 80)) {
        let mut store = Store::with_config(Config::strict());
        let mut model = ModelStore::with_config(Config::strict());
        for op in &ops {
            prop_assert_eq!(op.apply(&mut store), op.apply(&mut model), "diverged at {}", op);
            prop_assert_eq!(store.depth(), model.depth());
        }
    }

    #[test]
    fn counts_match_visible_keys(ops in operation_sequence_strategy(1, 80)) {
        let mut store = Store::new();
        apply_all(&mut store, &ops);

        let (values, counts) = observe(&mut store);
        for (i, v) in (MIN_VALUE..=MAX_VALUE).enumerate() {
            let holders = values.iter().filter(|x| **x == Some(v)).count();
            prop_assert_eq!(counts[i], holders, "count of {}", v);
        }
    }

    #[test]
    fn set_then_get(ops in operation_sequence_strategy(0, 40), key in key_strategy(), value in value_strategy()) {
        let mut store = Store::new();
        apply_all(&mut store, &ops);
        store.set(&key, value);
        prop_assert_eq!(store.get(&key), Some(value));
    }

    #[test]
    fn del_then_get(ops in operation_sequence_strategy(0, 40), key in key_strategy()) {
        let mut store = Store::new();
        apply_all(&mut store, &ops);
        store.del(&key);
        prop_assert_eq!(store.get(&key), None);
    }

    #[test]
    fn rollback_restores_prior_state(
        prefix in operation_sequence_strategy(0, 40),
        writes in write_sequence_strategy(0, 40),
    ) {
        let mut store = Store::new();
        apply_all(&mut store, &prefix);

        let before = observe(&mut store);
        let depth = store.depth();
        store.begin();
        prop_assume!(store.depth() == depth + 1);

        apply_all(&mut store, &writes);
        prop_assert!(store.rollback());

        prop_assert_eq!(store.depth(), depth);
        prop_assert_eq!(observe(&mut store), before);
    }

    #[test]
    fn commit_flattens_and_preserves_view(ops in operation_sequence_strategy(0, 80)) {
        let mut store = Store::new();
        apply_all(&mut store, &ops);

        let before = observe(&mut store);
        store.commit();

        prop_assert!(!store.in_transaction());
        prop_assert!(!store.rollback());
        prop_assert_eq!(observe(&mut store), before);
    }

    #[test]
    fn empty_begins_collapse(ops in operation_sequence_strategy(0, 40), extra in 1usize..5) {
        let mut store = Store::new();
        apply_all(&mut store, &ops);

        let before = observe(&mut store);
        let depth = store.depth();
        store.begin();
        prop_assume!(store.depth() == depth + 1);
        for _ in 0..extra {
            store.begin();
        }
        prop_assert_eq!(store.depth(), depth + 1);

        prop_assert!(store.rollback());
        prop_assert_eq!(observe(&mut store), before);
    }
}
