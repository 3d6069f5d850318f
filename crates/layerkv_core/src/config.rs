//! Store configuration.

/// Configuration for creating a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether `begin` reuses an open transaction that has no entries yet.
    ///
    /// With collapsing enabled, `BEGIN; BEGIN` with nothing in between pushes
    /// a single frame, so one `ROLLBACK` unwinds both. Disable it for strict
    /// one-frame-per-begin semantics.
    pub collapse_empty_begin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collapse_empty_begin: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty open transactions are reused by `begin`.
    #[must_use]
    pub const fn collapse_empty_begin(mut self, value: bool) -> Self {
        self.collapse_empty_begin = value;
        self
    }

    /// Configuration where every `begin` pushes its own frame.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            collapse_empty_begin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.collapse_empty_begin);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new().collapse_empty_begin(false);
        assert!(!config.collapse_empty_begin);
        assert_eq!(config, Config::strict());
    }
}
