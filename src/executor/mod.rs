//! The five execution patterns, one submodule each.
//!
//! Every executor drives the same long-running operation — fetch a resource,
//! report the result — through a different concurrency model:
//! - [`sync`] - block the calling thread outright (the baseline)
//! - [`callback`] - fire and forget with a registered completion callback
//! - [`task`] - a blocking-pool unit with a manually chained continuation
//! - [`structured`] - suspend/resume with layered error handling
//! - [`parallel`] - three concurrent operations joined at a barrier
//!
//! Executors are stateless across invocations: the [`Runner`](crate::Runner)
//! builds a fresh instance per call. Each one is handed the shared
//! [`Logger`](crate::Logger) and the operation-boundary collaborators at
//! construction, so the patterns differ only in scheduling, completion
//! notification, and where (or whether) failures surface.

mod callback;
mod parallel;
mod structured;
mod sync;
mod task;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

pub use callback::CallbackExecutor;
pub use parallel::ParallelAwaitExecutor;
pub use structured::AwaitExecutor;
pub use sync::SyncExecutor;
pub use task::TaskExecutor;

/// Opening delimiter logged before a result excerpt
pub(crate) const BOUNDARY_OPEN: &str = "<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";

/// Closing delimiter logged after a result excerpt
pub(crate) const BOUNDARY_CLOSE: &str = ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>";
