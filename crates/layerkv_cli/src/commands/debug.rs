//! DEBUG command: dump the frame stack.

use crate::error::RouterResult;
use clap::ValueEnum;
use layerkv_core::DataStore;
use std::io::Write;

/// Output format for DEBUG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DebugFormat {
    /// Indented text, one block per frame.
    #[default]
    Text,
    /// A JSON document on a single line.
    Json,
}

/// Writes the frame stack, current frame first.
pub fn run(store: &impl DataStore, out: &mut impl Write, format: DebugFormat) -> RouterResult<()> {
    match format {
        DebugFormat::Text => store.print_debug(out)?,
        DebugFormat::Json => {
            serde_json::to_writer(&mut *out, &store.debug_snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
