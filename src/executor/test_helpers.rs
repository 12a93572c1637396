//! Shared fakes and helpers for executor unit tests.

use crate::error::{Error, Result};
use crate::logger::MemoryLogger;
use crate::operation::Workload;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Workload whose suspending form fails instead of sleeping.
pub(crate) struct FaultingWorkload {
    reason: String,
    calls: AtomicUsize,
    fail_first_only: bool,
}

impl FaultingWorkload {
    /// Fails every `simulate_work` call with `reason`
    pub(crate) fn always(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            calls: AtomicUsize::new(0),
            fail_first_only: false,
        }
    }

    /// Fails only the first `simulate_work` call; later calls succeed
    pub(crate) fn first_call_only(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            calls: AtomicUsize::new(0),
            fail_first_only: true,
        }
    }
}

#[async_trait]
impl Workload for FaultingWorkload {
    async fn simulate_work(&self, _duration: Duration) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_first_only && call > 0 {
            tokio::task::yield_now().await;
            return Ok(());
        }
        Err(Error::operation(self.reason.clone()))
    }

    fn simulate_work_blocking(&self, _duration: Duration) {}
}

/// Workload that panics, for driving work units into the pool's fault state.
pub(crate) struct PanickingWorkload;

#[async_trait]
impl Workload for PanickingWorkload {
    async fn simulate_work(&self, _duration: Duration) -> Result<()> {
        panic!("injected workload panic");
    }

    fn simulate_work_blocking(&self, _duration: Duration) {
        panic!("injected workload panic");
    }
}

/// Poll the logger until `needle` appears, failing the test after 5 seconds.
pub(crate) async fn wait_for_line(logger: &Arc<MemoryLogger>, needle: &str) {
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
