//! Fire-and-forget: start the fetch, register a completion callback, return.
//!
//! `run()` initiates the fetch on a detached task and comes back immediately;
//! the registered callback fires later, on whatever task the runtime chose,
//! and logs the result excerpt. The caller keeps no handle: there is nothing
//! to await, and no way to learn whether the callback is still pending — or
//! whether the fetch failed, since this pattern carries no error channel at
//! all. That gap is part of the pattern, not an oversight to patch.

use crate::logger::Logger;
use crate::operation::{Fetch, excerpt};
use std::sync::Arc;
use tracing::debug;

use super::{BOUNDARY_CLOSE, BOUNDARY_OPEN};

/// Starts the operation asynchronously and reports through a callback
pub struct CallbackExecutor {
    logger: Arc<dyn Logger>,
    fetch: Arc<dyn Fetch>,
    excerpt_len: usize,
}

impl CallbackExecutor {
    /// Creates an executor over the given collaborators
    pub fn new(logger: Arc<dyn Logger>, fetch: Arc<dyn Fetch>, excerpt_len: usize) -> Self {
        Self {
            logger,
            fetch,
            excerpt_len,
        }
    }

    /// Initiate the fetch and return without waiting for it.
    ///
    /// Logs the started line, registers the excerpt-logging callback against
    /// a freshly spawned fetch, logs the completed line, and returns. For any
    /// operation of non-zero duration the completed line lands before the
    /// callback's output: the two are ordered by submission, never by
    /// completion.
    ///
    /// Must be called from within a Tokio runtime context.
    pub fn run(&self) {
        self.logger.log("CallbackExecutor::run() started");

        let logger = Arc::clone(&self.logger);
        let excerpt_len = self.excerpt_len;
        Self::spawn_with_callback(Arc::clone(&self.fetch), move |result| {
            logger.log(BOUNDARY_OPEN);
            logger.log(excerpt(&result, excerpt_len));
            logger.log(BOUNDARY_CLOSE);
        });

        self.logger.log("CallbackExecutor::run() completed");
    }

    /// Spawn the fetch and invoke `on_complete` with the body once it
    /// succeeds. A failed fetch is dropped on the detached task: this
    /// pattern has nowhere to report it.
    fn spawn_with_callback<F>(fetch: Arc<dyn Fetch>, on_complete: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        debug!("spawning detached fetch with completion callback");
        tokio::spawn(async move {
            match fetch.fetch().await {
                Ok(body) => on_complete(body),
                Err(error) => {
                    // No error channel exists on this path; the failure dies here.
                    debug!(%error, "detached fetch failed with no one to tell");
                }
            }
        });
    }
}
