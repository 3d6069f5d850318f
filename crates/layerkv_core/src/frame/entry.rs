//! Per-key entry records.

use crate::types::Version;
use serde::Serialize;
use std::fmt;

/// The last known state of one key within a frame.
///
/// A deleted entry is a tombstone. It still occupies the key slot, which
/// stops lookups from walking further toward the root, but reads report the
/// key as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Local version counter, bumped on every write to the key.
    pub version: Version,
    /// The stored value. Meaningless for tombstones.
    pub value: i64,
    /// Whether the key has been deleted.
    pub deleted: bool,
}

impl Entry {
    /// Creates a live entry.
    #[must_use]
    pub const fn live(version: Version, value: i64) -> Self {
        Self {
            version,
            value,
            deleted: false,
        }
    }

    /// Creates a tombstone.
    #[must_use]
    pub const fn tombstone(version: Version, value: i64) -> Self {
        Self {
            version,
            value,
            deleted: true,
        }
    }

    /// Returns the entry that replaces `previous` with a live `value`.
    #[must_use]
    pub fn overwrite(previous: Option<&Entry>, value: i64) -> Self {
        let version = previous.map_or(Version::ZERO, |e| e.version).next();
        Self::live(version, value)
    }

    /// Returns the tombstone that replaces `previous`.
    #[must_use]
    pub fn delete(previous: Option<&Entry>) -> Self {
        match previous {
            Some(e) => Self::tombstone(e.version.next(), e.value),
            None => Self::tombstone(Version::ZERO.next(), 0),
        }
    }

    /// Returns the value if this entry is live.
    #[must_use]
    pub const fn live_value(&self) -> Option<i64> {
        if self.deleted {
            None
        } else {
            Some(self.value)
        }
    }

    /// Checks if this entry is a tombstone.
    #[must_use]
    pub const fn is_tombstone(&self) -> bool {
        self.deleted
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deleted {
            write!(f, "<deleted>@{}", self.version)
        } else {
            write!(f, "{}@{}", self.value, self.version)
        }
    }
}
