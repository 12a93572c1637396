//! The long-running operation boundary
//!
//! The interesting part of the harness is how each execution pattern drives
//! a long-running operation, not what the operation does. This module pins
//! down the boundary: an abstract resource fetch ([`Fetch`] /
//! [`BlockingFetch`]) standing in for the real network layer, and a
//! simulated-work primitive ([`Workload`]) standing in for everything else
//! that takes time. Both are substitutable with deterministic fakes, which
//! is how the tests stay fast and how faults get injected.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Abstract resource fetch, suspending form.
///
/// Stands in for the network layer: takes a while, then yields the body of
/// the fetched resource or a failure. Implementations must be shareable
/// across spawned tasks.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the resource, suspending the caller while it is outstanding.
    async fn fetch(&self) -> Result<String>;
}

/// Abstract resource fetch, blocking form.
///
/// Same contract as [`Fetch`] but performed on the calling thread, which is
/// what the synchronous baseline pattern deliberately does.
pub trait BlockingFetch: Send + Sync {
    /// Fetch the resource, occupying the calling thread until done.
    fn fetch(&self) -> Result<String>;
}

/// Simulated-work primitive.
///
/// Every place a pattern "does work for a while" goes through this trait, in
/// one of two forms: the suspending form yields control while the work is
/// outstanding, the blocking form occupies its thread. The suspending form
/// is fallible so fakes can inject step faults; [`SleepWorkload`] never
/// fails.
#[async_trait]
pub trait Workload: Send + Sync {
    /// Simulate work at a suspension point: yield, do not block.
    async fn simulate_work(&self, duration: Duration) -> Result<()>;

    /// Simulate blocking work: occupy the calling thread for the duration.
    fn simulate_work_blocking(&self, duration: Duration);
}

/// Production [`Workload`]: real sleeps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepWorkload;

#[async_trait]
impl Workload for SleepWorkload {
    async fn simulate_work(&self, duration: Duration) -> Result<()> {
        tokio::time::sleep(duration).await;
        Ok(())
    }

    fn simulate_work_blocking(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Simulated fetch standing in for the excluded network layer.
///
/// Sleeps for the configured latency, then returns the canned body or the
/// configured failure. Implements both fetch forms; with zero latency it
/// doubles as the deterministic fake the tests use.
#[derive(Debug, Clone)]
pub struct SimulatedFetch {
    latency: Duration,
    body: String,
    fail_with: Option<String>,
}

impl SimulatedFetch {
    /// A fetch that succeeds with `body` after `latency`
    pub fn new(latency: Duration, body: impl Into<String>) -> Self {
        Self {
            latency,
            body: body.into(),
            fail_with: None,
        }
    }

    /// A fetch that fails with `reason` after `latency`
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            body: String::new(),
            fail_with: Some(reason.into()),
        }
    }

    fn outcome(&self) -> Result<String> {
        match &self.fail_with {
            Some(reason) => Err(Error::operation(reason.clone())),
            None => Ok(self.body.clone()),
        }
    }
}

#[async_trait]
impl Fetch for SimulatedFetch {
    async fn fetch(&self) -> Result<String> {
        tokio::time::sleep(self.latency).await;
        self.outcome()
    }
}

impl BlockingFetch for SimulatedFetch {
    fn fetch(&self) -> Result<String> {
        std::thread::sleep(self.latency);
        self.outcome()
    }
}

/// Parameterized unit of work for the parallel pattern: an identifier, an
/// iteration count, and the suspension taken per iteration. Owned by exactly
/// one operation task; nothing is shared between sibling operations.
#[derive(Debug, Clone, Copy)]
pub struct LongRunningOperation {
    /// Numeric identifier used in the operation's log lines
    pub id: u32,
    /// Number of delay-then-log steps the operation performs
    pub iterations: u32,
    /// Suspension taken before each iteration's log line
    pub step_delay: Duration,
}

impl LongRunningOperation {
    /// Creates an operation description
    pub fn new(id: u32, iterations: u32, step_delay: Duration) -> Self {
        Self {
            id,
            iterations,
            step_delay,
        }
    }
}

/// First `len` characters of `s`, respecting char boundaries.
///
/// Shorter inputs come back whole; the synchronous and callback patterns log
/// this excerpt between their boundary lines.
pub fn excerpt(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
