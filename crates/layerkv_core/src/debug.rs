//! Frame stack introspection.

use crate::frame::{Entry, Frame};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Contents of one frame, with sorted maps for stable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    /// 1-based position counted from the current frame.
    pub index: usize,
    /// Entries recorded in the frame.
    pub entries: BTreeMap<String, Entry>,
    /// Value counts recorded in the frame.
    pub counts: BTreeMap<i64, usize>,
}

impl FrameSnapshot {
    /// Captures a frame at the given position.
    #[must_use]
    pub fn capture(index: usize, frame: &Frame) -> Self {
        Self {
            index,
            entries: frame.entries().map(|(k, e)| (k.clone(), *e)).collect(),
            counts: frame.counts().collect(),
        }
    }
}

/// Dump of the whole frame stack, current frame first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebugSnapshot {
    /// Frames from the current one (index 1) down to the root.
    pub frames: Vec<FrameSnapshot>,
}

impl DebugSnapshot {
    /// Captures frames given in current-to-root order.
    pub fn capture<'a>(frames: impl IntoIterator<Item = &'a Frame>) -> Self {
        Self {
            frames: frames
                .into_iter()
                .enumerate()
                .map(|(i, frame)| FrameSnapshot::capture(i + 1, frame))
                .collect(),
        }
    }

    /// Returns the number of frames captured.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frame: {}", self.index)?;
        write!(f, "\tEntries: {{")?;
        for (i, (key, entry)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {entry}")?;
        }
        writeln!(f, "}}")?;
        write!(f, "\tCounts : {{")?;
        for (i, (value, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}: {count}")?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Version;

    #[test]
    fn text_form() {
        let mut frame = Frame::new();
        frame.put_entry("b", Entry::tombstone(Version::new(2), 3));
        frame.put_entry("a", Entry::live(Version::new(1), 10));
        frame.put_count(10, 1);
        frame.put_count(3, 0);

        let snapshot = DebugSnapshot::capture([&frame, &Frame::new()]);
        assert_eq!(
            snapshot.to_string(),
            "Frame: 1\n\tEntries: {a: 10@v1, b: <deleted>@v2}\n\tCounts : {3: 0, 10: 1}\n\
             Frame: 2\n\tEntries: {}\n\tCounts : {}\n"
        );
    }

    #[test]
    fn json_form() {
        let mut frame = Frame::new();
        frame.put_entry("a", Entry::live(Version::new(1), 10));
        frame.put_count(10, 1);

        let snapshot = DebugSnapshot::capture([&frame]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["frames"][0]["index"], 1);
        assert_eq!(json["frames"][0]["entries"]["a"]["value"], 10);
        assert_eq!(json["frames"][0]["entries"]["a"]["version"], 1);
        assert_eq!(json["frames"][0]["counts"]["10"], 1);
    }
}
