//! Synchronous baseline: block the calling thread until the work is done.
//!
//! This is the contrast case for every other pattern. The fetch, the
//! post-fetch work, and all logging happen on the caller's thread, strictly
//! in order, and `run()` does not return until the completed line has been
//! emitted. A failed fetch propagates straight out of `run()` — there is no
//! catch anywhere on this path.

use crate::error::Result;
use crate::logger::Logger;
use crate::operation::{BlockingFetch, Workload, excerpt};
use std::sync::Arc;
use std::time::Duration;

use super::{BOUNDARY_CLOSE, BOUNDARY_OPEN};

/// Runs the operation on the caller's thread, blocking until done
pub struct SyncExecutor {
    logger: Arc<dyn Logger>,
    fetch: Arc<dyn BlockingFetch>,
    workload: Arc<dyn Workload>,
    post_fetch_delay: Duration,
    excerpt_len: usize,
}

impl SyncExecutor {
    /// Creates an executor over the given collaborators
    ///
    /// # Parameters
    /// - `post_fetch_delay`: blocking work performed after the fetch returns
    /// - `excerpt_len`: number of leading result characters to log
    pub fn new(
        logger: Arc<dyn Logger>,
        fetch: Arc<dyn BlockingFetch>,
        workload: Arc<dyn Workload>,
        post_fetch_delay: Duration,
        excerpt_len: usize,
    ) -> Self {
        Self {
            logger,
            fetch,
            workload,
            post_fetch_delay,
            excerpt_len,
        }
    }

    /// Fetch, work, and log, all on the calling thread.
    ///
    /// Logs the start line, performs the blocking fetch and the post-fetch
    /// delay, then logs the boundary-delimited excerpt and the completed
    /// line. Returns only after the completed line is out. A fetch failure
    /// propagates to the caller with nothing logged past the start line.
    pub fn run(&self) -> Result<()> {
        self.logger.log("SyncExecutor::run() started");

        let result = self.fetch.fetch()?;
        self.workload.simulate_work_blocking(self.post_fetch_delay);

        self.logger.log(BOUNDARY_OPEN);
        self.logger.log(excerpt(&result, self.excerpt_len));
        self.logger.log(BOUNDARY_CLOSE);

        self.logger.log("SyncExecutor::run() completed");
        Ok(())
    }
}
