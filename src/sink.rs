//! Output sinks for context logging
//!
//! A sink is the line-oriented destination a context tree writes to. The
//! contract is small: one call to `write_line` emits exactly one line, and
//! the implementation appends the terminator and serializes concurrent
//! writers itself.

use std::sync::{Mutex, PoisonError};

/// Destination for formatted log lines.
pub trait Sink: Send + Sync {
    /// Write one line (without a trailing newline; the sink adds it).
    fn write_line(&self, line: &str);
}

/// Default sink: process standard output.
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Sink that captures lines in memory, for assertions in tests.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// Sink that forwards each line as a `tracing` event, so context output can
/// flow into a host application's subscriber instead of stdout.
pub struct TracingSink;

impl Sink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "ripcord", "{line}");
    }
}
