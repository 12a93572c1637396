//! Structured suspend/resume with layered error handling.
//!
//! The calling task yields while the operation is outstanding and resumes
//! when it completes; no thread blocks. Failures are handled in two layers:
//! the inner layer catches everything its attempt produces and renders it as
//! a success-shaped `failed: <reason>` string, so the outer layer — which
//! logs the start, the result, and stands guard for anything that escapes —
//! never sees a failure on the designed path. The guard stays in, dead but
//! correct: reaching it takes fault injection, and its presence documents
//! where a failure *could* surface.

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::operation::Workload;
use std::sync::Arc;
use std::time::Duration;

/// Runs the operation through structured suspension
pub struct AwaitExecutor {
    logger: Arc<dyn Logger>,
    workload: Arc<dyn Workload>,
    work_delay: Duration,
}

impl AwaitExecutor {
    /// Creates an executor over the given collaborators
    pub fn new(logger: Arc<dyn Logger>, workload: Arc<dyn Workload>, work_delay: Duration) -> Self {
        Self {
            logger,
            workload,
            work_delay,
        }
    }

    /// Suspend on the operation and log its result.
    ///
    /// With `force_error` set, the inner layer fails immediately with reason
    /// `Forced error` and the logged result reads `failed: Forced error`;
    /// otherwise the operation suspends for the configured delay and the
    /// result reads `success!`. Either way the sequence is: starting line,
    /// suspension, result line.
    pub async fn run(&self, force_error: bool) {
        self.logger.log("Starting long running task...");

        match self.guarded(force_error).await {
            Ok(result) => self
                .logger
                .log(&format!("Long running task completed, result = {result}")),
            Err(error) => {
                // The inner layer converts every failure it sees, so this
                // arm is reachable only when a fault slips past it.
                self.logger
                    .log(&format!("Unhandled error occurred in async operation: {error}"));
            }
        }
    }

    /// Outer guard around the inner layer. `long_running_task` converts all
    /// of its own failures, which leaves this `Ok` by construction.
    async fn guarded(&self, force_error: bool) -> Result<String> {
        Ok(self.long_running_task(force_error).await)
    }

    /// Inner layer: perform the attempt and render any failure as a
    /// success-shaped string instead of letting it escape.
    async fn long_running_task(&self, force_error: bool) -> String {
        match self.attempt(force_error).await {
            Ok(result) => result,
            Err(error) => format!("failed: {error}"),
        }
    }

    /// The operation itself: fail on demand, or suspend and succeed.
    async fn attempt(&self, force_error: bool) -> Result<String> {
        if force_error {
            self.logger.log("Forcing error...");
            return Err(Error::operation("Forced error"));
        }

        self.workload.simulate_work(self.work_delay).await?;
        Ok("success!".to_string())
    }
}
