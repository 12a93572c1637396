//! Error types for fetch-harness
//!
//! The failure surface of the harness is deliberately small. Each execution
//! pattern has its own propagation contract (see the executor modules), and
//! most of those contracts are about where failures are *not* reported:
//! - The synchronous pattern propagates an [`Error`] to its caller uncaught.
//! - The callback pattern has no channel to report a failed fetch at all.
//! - The worker-pool pattern drops unit faults into the pool's fault state.
//! - The structured patterns catch failures at a specific layer and render
//!   them as logged text.
//!
//! Failures that are swallowed by design carry no variant here; dropping
//! them at the absorbing site is the whole policy.

use thiserror::Error;

/// Result type alias for fetch-harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fetch-harness
#[derive(Debug, Error)]
pub enum Error {
    /// The simulated fetch or a work step failed.
    ///
    /// Displays as the bare reason so that layers which render failures into
    /// log text (e.g. the structured pattern's `failed: <reason>` string)
    /// control the framing themselves.
    #[error("{reason}")]
    Operation {
        /// Human-readable description of what went wrong
        reason: String,
    },

    /// A worker unit or spawned operation task faulted outside any guard
    /// (it panicked, or the runtime tore it down).
    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// Shorthand for an operation failure with the given reason
    pub fn operation(reason: impl Into<String>) -> Self {
        Error::Operation {
            reason: reason.into(),
        }
    }
}
