//! The read-dispatch loop.

use crate::commands::{self, debug::DebugFormat, Command, CommandKind};
use crate::error::{RouterError, RouterResult};
use layerkv_core::DataStore;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    End,
}

/// Why the loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An `END` command was read.
    Ended,
    /// Input ran out.
    Exhausted,
    /// An unrecognized command word stopped processing.
    Halted {
        /// The offending word.
        word: String,
    },
}

/// Routes command lines to a [`DataStore`], writing answers to `out`.
pub struct Router<S, W> {
    store: S,
    out: W,
    debug_format: DebugFormat,
}

impl<S: DataStore, W: Write> Router<S, W> {
    /// Creates a router over a store and an output sink.
    pub fn new(store: S, out: W) -> Self {
        Self {
            store,
            out,
            debug_format: DebugFormat::default(),
        }
    }

    /// Sets the DEBUG output format.
    #[must_use]
    pub fn with_debug_format(mut self, format: DebugFormat) -> Self {
        self.debug_format = format;
        self
    }

    /// Consumes the router, returning the store and the output sink.
    pub fn into_parts(self) -> (S, W) {
        (self.store, self.out)
    }

    /// Executes a single parsed command.
    pub fn execute(&mut self, command: &Command<'_>) -> RouterResult<Flow> {
        let args = command.args.as_slice();
        match command.kind {
            CommandKind::Get => commands::keys::get(&mut self.store, &mut self.out, args)?,
            CommandKind::Set => commands::keys::set(&mut self.store, args),
            CommandKind::Unset => commands::keys::unset(&mut self.store, args),
            CommandKind::NumEqualTo => {
                commands::keys::num_equal_to(&mut self.store, &mut self.out, args)?;
            }
            CommandKind::Begin => commands::transaction::begin(&mut self.store),
            CommandKind::Commit => commands::transaction::commit(&mut self.store),
            CommandKind::Rollback => {
                commands::transaction::rollback(&mut self.store, &mut self.out)?;
            }
            CommandKind::Debug => {
                commands::debug::run(&self.store, &mut self.out, self.debug_format)?;
            }
            CommandKind::End => return Ok(Flow::End),
        }
        Ok(Flow::Continue)
    }

    /// Parses and executes one line.
    pub fn execute_line(&mut self, line: &str) -> RouterResult<Flow> {
        match Command::parse(line.trim())? {
            Some(command) => self.execute(&command),
            None => Ok(Flow::Continue),
        }
    }

    /// Runs commands from `input` until `END`, end of input, or an unknown
    /// command.
    ///
    /// Only I/O failures are returned as errors. Lines that are not valid UTF-8 are decoded lossily.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> RouterResult<Outcome> {
        let mut outcome = Outcome::Exhausted;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!(line = %line.trim_end(), "input line is not valid UTF-8");
            }
            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::End) => {
                    debug!("END received");
                    outcome = Outcome::Ended;
                    break;
                }
                Err(RouterError::UnknownCommand { word }) => {
                    error!(%word, "invalid command, stopping");
                    outcome = Outcome::Halted { word };
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        self.out.flush()?;
        Ok(outcome)
    }
}
