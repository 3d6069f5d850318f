//! Scripted scenarios.
//!
//! Drives any [`DataStore`] with operations written the way the shell reads
//! them (`SET a 10`, `NUMEQUALTO 10`, ...) and collects what each one
//! answers.

use layerkv_core::{parse_value, CoreError, DataStore};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Read a key.
    Get {
        /// Key to read.
        key: String,
    },
    /// Write a key.
    Set {
        /// Key to write.
        key: String,
        /// Value to store.
        value: i64,
    },
    /// Delete a key.
    Del {
        /// Key to delete.
        key: String,
    },
    /// Count holders of a value.
    Count {
        /// Value to count.
        value: i64,
    },
    /// Open a transaction.
    Begin,
    /// Commit all open transactions.
    Commit,
    /// Roll back the innermost transaction.
    Rollback,
}

impl Operation {
    /// Checks if the operation is a set or a delete.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Set { .. } | Self::Del { .. })
    }

    /// Applies the operation and returns what it answered.
    pub fn apply(&self, store: &mut impl DataStore) -> Observation {
        match self {
            Self::Get { key } => Observation::Value(store.get(key)),
            Self::Set { key, value } => {
                store.set(key, *value);
                Observation::Silent
            }
            Self::Del { key } => {
                store.del(key);
                Observation::Silent
            }
            Self::Count { value } => Observation::Count(store.count(*value)),
            Self::Begin => {
                store.begin();
                Observation::Silent
            }
            Self::Commit => Observation::Committed(store.commit()),
            Self::Rollback => Observation::RolledBack(store.rollback()),
        }
    }
}

/// Error from parsing a script line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The line has no command word.
    #[error("empty line")]
    Empty,
    /// The command word is not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// The command is missing an argument.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    /// A value failed to parse.
    #[error(transparent)]
    Value(CoreError),
}

impl FromStr for Operation {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let word = parts.next().ok_or(ScriptError::Empty)?;
        let mut arg = |name| parts.next().ok_or(ScriptError::MissingArgument(name));
        let value = |raw: &str| parse_value(raw).map_err(ScriptError::Value);

        match word.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get {
                key: arg("key")?.to_owned(),
            }),
            "SET" => {
                let key = arg("key")?.to_owned();
                let value = value(arg("value")?)?;
                Ok(Self::Set { key, value })
            }
            "UNSET" => Ok(Self::Del {
                key: arg("key")?.to_owned(),
            }),
            "NUMEQUALTO" => Ok(Self::Count {
                value: value(arg("value")?)?,
            }),
            "BEGIN" => Ok(Self::Begin),
            "COMMIT" => Ok(Self::Commit),
            "ROLLBACK" => Ok(Self::Rollback),
            _ => Err(ScriptError::UnknownCommand(word.to_owned())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get { key } => write!(f, "GET {key}"),
            Self::Set { key, value } => write!(f, "SET {key} {value}"),
            Self::Del { key } => write!(f, "UNSET {key}"),
            Self::Count { value } => write!(f, "NUMEQUALTO {value}"),
            Self::Begin => write!(f, "BEGIN"),
            Self::Commit => write!(f, "COMMIT"),
            Self::Rollback => write!(f, "ROLLBACK"),
        }
    }
}

/// What an operation answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The operation produces no answer.
    Silent,
    /// Result of a get.
    Value(Option<i64>),
    /// Result of a count.
    Count(usize),
    /// Number of frames folded by a commit.
    Committed(usize),
    /// Whether a rollback found a transaction.
    RolledBack(bool),
}

impl Observation {
    /// Returns the line the shell would print, if any.
    #[must_use]
    pub fn printed(&self) -> Option<String> {
        match self {
            Self::Value(Some(v)) => Some(v.to_string()),
            Self::Value(None) => Some("NULL".to_owned()),
            Self::Count(n) => Some(n.to_string()),
            Self::RolledBack(false) => Some("NO TRANSACTION".to_owned()),
            Self::Silent | Self::Committed(_) | Self::RolledBack(true) => None,
        }
    }
}

/// Applies every operation in order, returning one observation per operation.
pub fn apply_all<'a>(
    store: &mut impl DataStore,
    ops: impl IntoIterator<Item = &'a Operation>,
) -> Vec<Observation> {
    ops.into_iter().map(|op| op.apply(store)).collect()
}

/// Parses and runs a script, returning the lines the shell would print.
///
/// Blank lines are skipped.
pub fn run_script(store: &mut impl DataStore, script: &str) -> Result<Vec<String>, ScriptError> {
    let mut printed = Vec::new();
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        let op: Operation = line.parse()?;
        printed.extend(op.apply(store).printed());
    }
    Ok(printed)
}
