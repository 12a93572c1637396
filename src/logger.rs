//! Logging seam shared by every execution pattern
//!
//! The harness separates domain-visible output (what an operator watches to
//! compare the patterns) from internal diagnostics. Domain output goes
//! through the [`Logger`] trait — the single substitution point every
//! executor is polymorphic over — while diagnostics use `tracing` and are
//! invisible unless a subscriber is installed.
//!
//! The production implementation lives on [`Runner`](crate::runner::Runner),
//! which writes `HH:MM:SS <message>` lines to stdout. [`MemoryLogger`]
//! buffers messages instead and is what the tests assert against.

use chrono::Local;
use std::sync::Mutex;

/// Timestamped message sink injected into every executor.
///
/// Implementations must be callable from any context the executors use:
/// callback tasks, blocking-pool workers, and resumed suspensions all log
/// through the same instance. Each `log` call must be atomic with respect to
/// concurrent calls — two messages may land in either order, but never
/// interleaved within a line.
pub trait Logger: Send + Sync {
    /// Record one message.
    fn log(&self, message: &str);
}

/// Format a message the way the output boundary emits it: the current
/// wall-clock time as `HH:MM:SS`, a space, then the message.
pub fn timestamped(message: &str) -> String {
    format!("{} {}", Local::now().format("%H:%M:%S"), message)
}

/// Buffering [`Logger`] that records raw messages in order of arrival.
///
/// Messages are stored without the timestamp prefix so assertions can match
/// them exactly. The internal mutex makes each append atomic; the resulting
/// vector order is the observable global log order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Creates an empty logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message logged so far, in arrival order
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of messages logged so far
    pub fn len(&self) -> usize {
        match self.lines.lock() {
            Ok(lines) => lines.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// True if nothing has been logged yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first message equal to `needle`, if any
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines().iter().position(|line| line == needle)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
