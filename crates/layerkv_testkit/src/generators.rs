//! Property-based test generators using proptest.
//!
//! Keys and values are drawn from small pools so that generated sequences
//! overwrite, delete and share values often.

use crate::script::Operation;
use proptest::prelude::*;

/// Keys used by the generators.
pub const KEY_POOL: &[&str] = &["a", "b", "c", "d", "e"];

/// Smallest value produced by [`value_strategy`].
pub const MIN_VALUE: i64 = -3;

/// Largest value produced by [`value_strategy`].
pub const MAX_VALUE: i64 = 3;

/// Strategy for generating keys from [`KEY_POOL`].
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(KEY_POOL).prop_map(str::to_owned)
}

/// Strategy for generating values in `MIN_VALUE..=MAX_VALUE`.
pub fn value_strategy() -> impl Strategy<Value = i64> {
    MIN_VALUE..=MAX_VALUE
}

/// Strategy for writes only (set and delete).
pub fn write_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| Operation::Set { key, value }),
        1 => key_strategy().prop_map(|key| Operation::Del { key }),
    ]
}

/// Strategy for any operation, transactions included.
pub fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        6 => write_strategy(),
        2 => key_strategy().prop_map(|key| Operation::Get { key }),
        2 => value_strategy().prop_map(|value| Operation::Count { value }),
        2 => Just(Operation::Begin),
        1 => Just(Operation::Commit),
        1 => Just(Operation::Rollback),
    ]
}

/// Strategy for a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(operation_strategy(), min_ops..max_ops)
}

/// Strategy for a sequence of writes.
pub fn write_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(write_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn keys_come_from_pool(key in key_strategy()) {
            prop_assert!(KEY_POOL.contains(&key.as_str()));
        }

        #[test]
        fn values_stay_in_range(value in value_strategy()) {
            prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&value));
        }

        #[test]
        fn writes_are_sets_or_deletes(op in write_strategy()) {
            prop_assert!(op.is_write());
        }
    }
}
