//! Reference model of the store.
//!
//! Every transaction level is a full copy of the keyspace. Slow, but each
//! operation is a one-liner, which makes it a trustworthy oracle for
//! property tests against [`Store`](layerkv_core::Store).

use layerkv_core::{Config, DataStore, DebugSnapshot, Entry, Frame, Version};
use std::collections::BTreeMap;

/// One full-copy level. `None` marks a deleted key.
#[derive(Debug, Clone, Default)]
struct Level {
    keys: BTreeMap<String, Option<i64>>,
    /// Whether the real store would have recorded an entry in this frame.
    touched: bool,
}

/// A naive full-copy implementation of [`DataStore`].
#[derive(Debug, Clone)]
pub struct ModelStore {
    levels: Vec<Level>,
    config: Config,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore {
    /// Creates an empty model with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty model with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            levels: vec![Level::default()],
            config,
        }
    }

    /// Returns the number of levels, root included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the live keys and their values at the current level.
    pub fn visible(&self) -> BTreeMap<String, i64> {
        self.top()
            .keys
            .iter()
            .filter_map(|(k, v)| v.map(|v| (k.clone(), v)))
            .collect()
    }

    fn top(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Level {
        let top = self.levels.len() - 1;
        &mut self.levels[top]
    }
}

impl DataStore for ModelStore {
    fn get(&mut self, key: &str) -> Option<i64> {
        let top = self.top_mut();
        let slot = *top.keys.get(key)?;
        top.touched = true;
        slot
    }

    fn set(&mut self, key: &str, value: i64) {
        let top = self.top_mut();
        top.keys.insert(key.to_owned(), Some(value));
        top.touched = true;
    }

    fn del(&mut self, key: &str) {
        let top = self.top_mut();
        top.keys.insert(key.to_owned(), None);
        top.touched = true;
    }

    fn count(&mut self, value: i64) -> usize {
        self.top()
            .keys
            .values()
            .filter(|v| **v == Some(value))
            .count()
    }

    fn begin(&mut self) {
        let reuse = self.config.collapse_empty_begin && self.depth() > 1 && !self.top().touched;
        if !reuse {
            let keys = self.top().keys.clone();
            self.levels.push(Level {
                keys,
                touched: false,
            });
        }
    }

    fn commit(&mut self) -> usize {
        let folded = self.depth() - 1;
        if let Some(top) = self.levels.pop() {
            self.levels.clear();
            self.levels.push(Level {
                keys: top.keys,
                touched: true,
            });
        }
        folded
    }

    fn rollback(&mut self) -> bool {
        if self.depth() > 1 {
            self.levels.pop();
            true
        } else {
            false
        }
    }

    fn debug_snapshot(&self) -> DebugSnapshot {
        let frames: Vec<Frame> = self
            .levels
            .iter()
            .rev()
            .map(|level| {
                let mut frame = Frame::new();
                let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
                for (key, slot) in &level.keys {
                    let entry = match slot {
                        Some(v) => {
                            *counts.entry(*v).or_insert(0) += 1;
                            Entry::live(Version::ZERO, *v)
                        }
                        None => Entry::tombstone(Version::ZERO, 0),
                    };
                    frame.put_entry(key, entry);
                }
                for (value, count) in counts {
                    frame.put_count(value, count);
                }
                frame
            })
            .collect();
        DebugSnapshot::capture(&frames)
    }
}
