//! Command parsing and implementations.
//!
//! A command line is a case-insensitive command word followed by
//! whitespace-separated arguments.

pub mod debug;
pub mod keys;
pub mod transaction;

use crate::error::{RouterError, RouterResult};
use std::str::FromStr;

/// Recognized command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `GET key...`
    Get,
    /// `SET key value`
    Set,
    /// `UNSET key...`
    Unset,
    /// `NUMEQUALTO value...`
    NumEqualTo,
    /// `BEGIN`
    Begin,
    /// `COMMIT`
    Commit,
    /// `ROLLBACK`
    Rollback,
    /// `DEBUG`
    Debug,
    /// `END`
    End,
}

impl FromStr for CommandKind {
    type Err = RouterError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "SET" => Ok(Self::Set),
            "UNSET" => Ok(Self::Unset),
            "NUMEQUALTO" => Ok(Self::NumEqualTo),
            "BEGIN" => Ok(Self::Begin),
            "COMMIT" => Ok(Self::Commit),
            "ROLLBACK" => Ok(Self::Rollback),
            "DEBUG" => Ok(Self::Debug),
            "END" => Ok(Self::End),
            _ => Err(RouterError::unknown_command(word)),
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    /// The command word.
    pub kind: CommandKind,
    /// Arguments following the command word.
    pub args: Vec<&'a str>,
}

impl<'a> Command<'a> {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &'a str) -> RouterResult<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let kind = word.parse()?;
        Ok(Some(Self {
            kind,
            args: parts.collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse(" \t ").unwrap(), None);
    }

    #[test]
    fn command_word_is_case_insensitive() {
        let cmd = Command::parse("numEqualTo 10 20").unwrap().unwrap();
        assert_eq!(cmd.kind, CommandKind::NumEqualTo);
        assert_eq!(cmd.args, vec!["10", "20"]);
    }

    #[test]
    fn arguments_keep_their_case() {
        let cmd = Command::parse("  set Key   5 ").unwrap().unwrap();
        assert_eq!(cmd.kind, CommandKind::Set);
        assert_eq!(cmd.args, vec!["Key", "5"]);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = Command::parse("FROB a").unwrap_err();
        assert!(matches!(err, RouterError::UnknownCommand { ref word } if word == "FROB"));
        assert_eq!(err.to_string(), "invalid command: FROB");
    }
}
