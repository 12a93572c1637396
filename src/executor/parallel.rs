//! Three concurrent operations joined at a barrier.
//!
//! Three independent multi-step operations (ids 100, 200, 300 with 3, 4, and
//! 5 iterations) run concurrently on their own tasks. Each step suspends for
//! the iteration delay and logs its completion; each operation logs its own
//! start and, if it gets that far, its own completed line. The executor
//! suspends until the last of the three resolves, then logs the
//! all-complete line.
//!
//! Failure semantics are asymmetric on purpose: a step failure inside one
//! operation is absorbed by that operation with no log line anywhere — a
//! known shortcoming kept intact — and never disturbs its siblings or the
//! join. Only a fault in the orchestration itself (an operation task that
//! panicked) reaches the outer guard and gets logged.

use crate::error::Result;
use crate::logger::Logger;
use crate::operation::{LongRunningOperation, Workload};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Runs three independent operations concurrently and waits for all of them
pub struct ParallelAwaitExecutor {
    logger: Arc<dyn Logger>,
    workload: Arc<dyn Workload>,
    step_delay: Duration,
}

impl ParallelAwaitExecutor {
    /// Creates an executor over the given collaborators
    pub fn new(logger: Arc<dyn Logger>, workload: Arc<dyn Workload>, step_delay: Duration) -> Self {
        Self {
            logger,
            workload,
            step_delay,
        }
    }

    /// Launch all three operations, join on the last one, log the outcome.
    pub async fn run(&self) {
        match self.run_all().await {
            Ok(()) => self.logger.log("All tasks complete"),
            Err(error) => self
                .logger
                .log(&format!("Unhandled error occurred in async operation: {error}")),
        }
    }

    /// Spawn one task per operation and wait for every handle to resolve.
    /// Join errors — an operation task that panicked — surface here as
    /// orchestration faults; anything an operation absorbed never does.
    async fn run_all(&self) -> Result<()> {
        let operations = [
            LongRunningOperation::new(100, 3, self.step_delay),
            LongRunningOperation::new(200, 4, self.step_delay),
            LongRunningOperation::new(300, 5, self.step_delay),
        ];

        let handles: Vec<_> = operations
            .into_iter()
            .map(|operation| {
                let logger = Arc::clone(&self.logger);
                let workload = Arc::clone(&self.workload);
                debug!(id = operation.id, iterations = operation.iterations, "launching operation");
                tokio::spawn(run_operation(logger, workload, operation))
            })
            .collect();

        for outcome in join_all(handles).await {
            outcome?;
        }
        Ok(())
    }
}

/// Drive one operation to completion, absorbing its own step failures.
async fn run_operation(
    logger: Arc<dyn Logger>,
    workload: Arc<dyn Workload>,
    operation: LongRunningOperation,
) {
    if run_steps(&logger, &workload, &operation).await.is_err() {
        // A failed step ends this operation and is reported nowhere; the
        // siblings and the join never learn it happened.
    }
}

async fn run_steps(
    logger: &Arc<dyn Logger>,
    workload: &Arc<dyn Workload>,
    operation: &LongRunningOperation,
) -> Result<()> {
    logger.log(&format!("Task {} started", operation.id));

    for i in 1..=operation.iterations {
        workload.simulate_work(operation.step_delay).await?;
        logger.log(&format!("Task {} completed iteration {}", operation.id, i));
    }

    logger.log(&format!("Task {} completed", operation.id));
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::test_helpers::{FaultingWorkload, PanickingWorkload};
    use crate::logger::MemoryLogger;
    use crate::operation::SleepWorkload;

    fn executor(workload: Arc<dyn Workload>, logger: Arc<MemoryLogger>) -> ParallelAwaitExecutor {
        ParallelAwaitExecutor::new(logger, workload, Duration::ZERO)
    }

    fn iteration_lines(lines: &[String], id: u32) -> usize {
        lines
            .iter()
            .filter(|l| l.starts_with(&format!("Task {id} completed iteration ")))
            .count()
    }

    #[tokio::test]
    async fn each_operation_logs_its_iteration_count() {
        let logger = Arc::new(MemoryLogger::new());
        executor(Arc::new(SleepWorkload), Arc::clone(&logger))
            .run()
            .await;

        let lines = logger.lines();
        assert_eq!(iteration_lines(&lines, 100), 3);
        assert_eq!(iteration_lines(&lines, 200), 4);
        assert_eq!(iteration_lines(&lines, 300), 5);
    }

    #[tokio::test]
    async fn all_complete_comes_strictly_after_every_operation() {
        let logger = Arc::new(MemoryLogger::new());
        executor(Arc::new(SleepWorkload), Arc::clone(&logger))
            .run()
            .await;

        let all_complete = logger.position("All tasks complete").unwrap();
        for id in [100, 200, 300] {
            let completed = logger.position(&format!("Task {id} completed")).unwrap();
            assert!(
                completed < all_complete,
                "Task {id} completed at {completed}, after the barrier at {all_complete}"
            );
        }
        assert_eq!(all_complete, logger.len() - 1);
    }

    #[tokio::test]
    async fn iterations_within_one_operation_stay_ordered() {
        let logger = Arc::new(MemoryLogger::new());
        executor(Arc::new(SleepWorkload), Arc::clone(&logger))
            .run()
            .await;

        let lines = logger.lines();
        for id in [100u32, 200, 300] {
            let positions: Vec<usize> = lines
                .iter()
                .enumerate()
                .filter(|(_, l)| l.starts_with(&format!("Task {id} ")))
                .map(|(i, _)| i)
                .collect();
            let sorted = {
                let mut s = positions.clone();
                s.sort_unstable();
                s
            };
            assert_eq!(positions, sorted);
        }
    }

    #[tokio::test]
    async fn step_faults_are_absorbed_and_the_join_still_resolves() {
        let logger = Arc::new(MemoryLogger::new());
        let workload = Arc::new(FaultingWorkload::always("disk on fire"));
        executor(workload, Arc::clone(&logger)).run().await;

        let lines = logger.lines();
        // Every operation logged its start, then died silently at step one
        for id in [100, 200, 300] {
            assert!(lines.contains(&format!("Task {id} started")));
            assert_eq!(iteration_lines(&lines, id), 0);
            assert!(!lines.contains(&format!("Task {id} completed")));
        }
        // No failure line anywhere, and the barrier still resolved
        assert!(lines.iter().all(|l| !l.contains("disk on fire")));
        assert_eq!(lines.last().map(String::as_str), Some("All tasks complete"));
    }

    #[tokio::test]
    async fn one_faulted_operation_never_disturbs_its_siblings() {
        let logger = Arc::new(MemoryLogger::new());
        let workload = Arc::new(FaultingWorkload::first_call_only("transient"));
        executor(workload, Arc::clone(&logger)).run().await;

        let lines = logger.lines();
        let completed = lines
            .iter()
            .filter(|l| {
                [100, 200, 300]
                    .iter()
                    .any(|id| **l == format!("Task {id} completed"))
            })
            .count();
        assert_eq!(completed, 2, "exactly one operation was lost: {lines:?}");
        assert_eq!(lines.last().map(String::as_str), Some("All tasks complete"));
    }

    #[tokio::test]
    async fn panicked_operation_surfaces_through_the_outer_guard() {
        let logger = Arc::new(MemoryLogger::new());
        let workload = Arc::new(PanickingWorkload);
        executor(workload, Arc::clone(&logger)).run().await;

        let lines = logger.lines();
        assert!(!lines.contains(&"All tasks complete".to_string()));
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("Unhandled error occurred in async operation: ")),
            "guard line missing: {lines:?}"
        );
    }
}
