//! Common test utilities for fetch-harness integration tests

use async_trait::async_trait;
use fetch_harness::{Error, MemoryLogger, Result, Workload};
use std::sync::Arc;
use std::time::Duration;

/// Workload whose suspending form fails instead of sleeping.
#[allow(dead_code)]
pub struct FaultingWorkload {
    reason: String,
}

#[allow(dead_code)]
impl FaultingWorkload {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl Workload for FaultingWorkload {
    async fn simulate_work(&self, _duration: Duration) -> Result<()> {
        Err(Error::operation(self.reason.clone()))
    }

    fn simulate_work_blocking(&self, _duration: Duration) {}
}

/// Poll the logger until `needle` appears, failing the test after 5 seconds.
#[allow(dead_code)]
pub async fn wait_for_line(logger: &Arc<MemoryLogger>, needle: &str) {
    let deadline = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if logger.position(needle).is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    });
    deadline
        .await
        .unwrap_or_else(|_| panic!("line never appeared: {needle}"));
}
