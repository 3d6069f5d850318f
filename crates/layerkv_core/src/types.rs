//! Core type definitions for LayerKV.

use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::fmt;

/// Local version counter of a key's entry.
///
/// Bumped on every write to the key. Commit never consults it; a
/// concurrent-writer extension would compare a child's version against the
/// parent's current one when merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Version(pub u64);

impl Version {
    /// Version of a key with no prior entry.
    pub const ZERO: Self = Self(0);

    /// Creates a new version.
    #[must_use]
    pub const fn new(version: u64) -> Self {
        Self(version)
    }

    /// Returns the raw version value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next version.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Parses a stored value from its decimal text form.
///
/// Accepts an optional sign followed by digits, in the range of `i64`.
pub fn parse_value(input: &str) -> CoreResult<i64> {
    input
        .parse::<i64>()
        .map_err(|_| CoreError::invalid_value(input))
}
