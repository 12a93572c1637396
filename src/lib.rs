//! # fetch-harness
//!
//! Execution-strategy harness: one long-running operation ("fetch a resource
//! and report the result") driven through five interchangeable concurrency
//! patterns.
//!
//! ## Design Philosophy
//!
//! fetch-harness is designed to be:
//! - **Pattern-faithful** - Each executor reproduces one concurrency model,
//!   including its documented gaps (no cancellation, no retry, no timeout,
//!   and failure channels that are deliberately missing)
//! - **Library-first** - No CLI or UI in the core; a front end selects a
//!   pattern and calls the runner
//! - **Substitutable at the seams** - The fetch, the simulated work, and the
//!   log sink are traits with deterministic fakes for testing
//!
//! ## Quick Start
//!
//! ```no_run
//! use fetch_harness::{Config, Runner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let runner = Runner::new(Config::default());
//!
//!     // Blocking baseline, then the structured suspend/resume pattern
//!     runner.run_sync()?;
//!     runner.run_await(false).await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## The five patterns
//!
//! | Executor | Scheduling | Completion | Failure channel |
//! |----------|------------|------------|-----------------|
//! | [`SyncExecutor`] | caller's thread | return from `run()` | `Result`, uncaught |
//! | [`CallbackExecutor`] | detached task | registered callback | none |
//! | [`TaskExecutor`] | blocking pool | chained continuation | dropped by continuation |
//! | [`AwaitExecutor`] | suspend/resume | resumed caller | caught inner, guarded outer |
//! | [`ParallelAwaitExecutor`] | three tasks + barrier | join of all three | absorbed inner, guarded outer |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// The five execution patterns
pub mod executor;
/// Logging seam and buffering logger
pub mod logger;
/// Long-running operation boundary (fetch and simulated work)
pub mod operation;
/// Pattern selection and the stdout log sink
pub mod runner;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use executor::{
    AwaitExecutor, CallbackExecutor, ParallelAwaitExecutor, SyncExecutor, TaskExecutor,
};
pub use logger::{Logger, MemoryLogger};
pub use operation::{
    BlockingFetch, Fetch, LongRunningOperation, SimulatedFetch, SleepWorkload, Workload,
};
pub use runner::Runner;
