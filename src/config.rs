//! Configuration types for fetch-harness
//!
//! All knobs default to the durations the harness was designed around, so a
//! `Config::default()` reproduces the canonical timing of every pattern.
//! Durations are stored as integer milliseconds for clean serialization and
//! exposed as [`std::time::Duration`] through accessors.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Harness configuration
///
/// Controls the timing of the simulated long-running work and the shape of
/// the logged output. Every field has a sensible default; partial
/// deserialization fills in the rest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Simulated network latency of the fetch, in milliseconds (default: 500)
    #[serde(default = "default_fetch_latency_ms")]
    pub fetch_latency_ms: u64,

    /// Canned body returned by the simulated fetch (default: a small HTML page)
    #[serde(default = "default_response_body")]
    pub response_body: String,

    /// Extra blocking work after the synchronous fetch, in milliseconds
    /// (default: 3000)
    #[serde(default = "default_post_fetch_delay_ms")]
    pub post_fetch_delay_ms: u64,

    /// Duration of the worker-pool unit's blocking work, in milliseconds
    /// (default: 2000)
    #[serde(default = "default_task_delay_ms")]
    pub task_delay_ms: u64,

    /// Duration of the structured pattern's suspension, in milliseconds
    /// (default: 2000)
    #[serde(default = "default_await_delay_ms")]
    pub await_delay_ms: u64,

    /// Per-iteration suspension of each parallel operation, in milliseconds
    /// (default: 1000)
    #[serde(default = "default_iteration_delay_ms")]
    pub iteration_delay_ms: u64,

    /// Number of leading characters of the fetched body to log (default: 50)
    #[serde(default = "default_excerpt_len")]
    pub excerpt_len: usize,
}

impl Config {
    /// Simulated fetch latency as a [`Duration`]
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }

    /// Post-fetch blocking delay as a [`Duration`]
    pub fn post_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.post_fetch_delay_ms)
    }

    /// Worker-pool unit delay as a [`Duration`]
    pub fn task_delay(&self) -> Duration {
        Duration::from_millis(self.task_delay_ms)
    }

    /// Structured-suspension delay as a [`Duration`]
    pub fn await_delay(&self) -> Duration {
        Duration::from_millis(self.await_delay_ms)
    }

    /// Per-iteration delay as a [`Duration`]
    pub fn iteration_delay(&self) -> Duration {
        Duration::from_millis(self.iteration_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_latency_ms: default_fetch_latency_ms(),
            response_body: default_response_body(),
            post_fetch_delay_ms: default_post_fetch_delay_ms(),
            task_delay_ms: default_task_delay_ms(),
            await_delay_ms: default_await_delay_ms(),
            iteration_delay_ms: default_iteration_delay_ms(),
            excerpt_len: default_excerpt_len(),
        }
    }
}

fn default_fetch_latency_ms() -> u64 {
    500
}

fn default_response_body() -> String {
    concat!(
        "<!doctype html><html><head><title>Example Domain</title></head>",
        "<body><h1>Example Domain</h1><p>This page is served so that the ",
        "harness has something realistic to excerpt.</p></body></html>",
    )
    .to_string()
}

fn default_post_fetch_delay_ms() -> u64 {
    3000
}

fn default_task_delay_ms() -> u64 {
    2000
}

fn default_await_delay_ms() -> u64 {
    2000
}

fn default_iteration_delay_ms() -> u64 {
    1000
}

fn default_excerpt_len() -> usize {
    50
}
