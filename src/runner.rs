//! Runner: selects an execution pattern and provides the log sink.
//!
//! The runner is the piece a front end (menu, demo binary, embedding
//! application) talks to. It implements [`Logger`] itself — timestamped
//! lines to stdout — and injects itself into a freshly constructed executor
//! on every call. It keeps no state between invocations beyond its
//! collaborators, so repeated runs are independent by construction.

use crate::config::Config;
use crate::error::Result;
use crate::executor::{
    AwaitExecutor, CallbackExecutor, ParallelAwaitExecutor, SyncExecutor, TaskExecutor,
};
use crate::logger::{Logger, timestamped};
use crate::operation::{BlockingFetch, Fetch, SimulatedFetch, SleepWorkload, Workload};
use std::sync::Arc;
use tracing::debug;

/// Entry point over the five execution patterns
///
/// Cloning is cheap: all collaborators are `Arc`-wrapped, and a clone logs
/// to the same stdout sink.
#[derive(Clone)]
pub struct Runner {
    config: Config,
    fetch: Arc<dyn Fetch>,
    blocking_fetch: Arc<dyn BlockingFetch>,
    workload: Arc<dyn Workload>,
}

impl Runner {
    /// Creates a runner with the production collaborators: a simulated fetch
    /// built from the config and real sleeps for the simulated work.
    pub fn new(config: Config) -> Self {
        let fetch = Arc::new(SimulatedFetch::new(
            config.fetch_latency(),
            config.response_body.clone(),
        ));
        Self {
            config,
            blocking_fetch: fetch.clone(),
            fetch,
            workload: Arc::new(SleepWorkload),
        }
    }

    /// Creates a runner over caller-supplied collaborators
    ///
    /// This is the substitution point for deterministic fakes.
    pub fn with_collaborators(
        config: Config,
        fetch: Arc<dyn Fetch>,
        blocking_fetch: Arc<dyn BlockingFetch>,
        workload: Arc<dyn Workload>,
    ) -> Self {
        Self {
            config,
            fetch,
            blocking_fetch,
            workload,
        }
    }

    /// The runner itself, as the logger every executor gets
    fn logger(&self) -> Arc<dyn Logger> {
        Arc::new(self.clone())
    }

    /// Run the synchronous baseline pattern, blocking the calling thread.
    ///
    /// A fetch failure propagates to the caller uncaught.
    pub fn run_sync(&self) -> Result<()> {
        debug!("constructing sync executor");
        SyncExecutor::new(
            self.logger(),
            Arc::clone(&self.blocking_fetch),
            Arc::clone(&self.workload),
            self.config.post_fetch_delay(),
            self.config.excerpt_len,
        )
        .run()
    }

    /// Run the fire-and-forget callback pattern.
    ///
    /// Returns before the operation finishes; must be called from within a
    /// Tokio runtime context.
    pub fn run_callback(&self) {
        debug!("constructing callback executor");
        CallbackExecutor::new(
            self.logger(),
            Arc::clone(&self.fetch),
            self.config.excerpt_len,
        )
        .run();
    }

    /// Run the worker-pool pattern with its chained continuation.
    ///
    /// Returns before the unit finishes; must be called from within a Tokio
    /// runtime context.
    pub fn run_task(&self) {
        debug!("constructing task executor");
        TaskExecutor::new(
            self.logger(),
            Arc::clone(&self.workload),
            self.config.task_delay(),
        )
        .run();
    }

    /// Run the structured suspend/resume pattern.
    ///
    /// With `force_error` set, the logged result reads `failed: Forced error`.
    pub async fn run_await(&self, force_error: bool) {
        debug!(force_error, "constructing await executor");
        AwaitExecutor::new(
            self.logger(),
            Arc::clone(&self.workload),
            self.config.await_delay(),
        )
        .run(force_error)
        .await;
    }

    /// Run the parallel pattern: three operations joined at a barrier.
    pub async fn run_parallel(&self) {
        debug!("constructing parallel executor");
        ParallelAwaitExecutor::new(
            self.logger(),
            Arc::clone(&self.workload),
            self.config.iteration_delay(),
        )
        .run()
        .await;
    }
}

impl Logger for Runner {
    fn log(&self, message: &str) {
        // println! holds the stdout lock for the whole line, which keeps
        // concurrent log calls from interleaving within a message.
        println!("{}", timestamped(message));
    }
}
