use crate::mapper::MapBackend;
use std::time::Duration;

/// The document counted when no source is supplied: Project Gutenberg's
/// plain-text *Pride and Prejudice*.
pub const DEFAULT_SOURCE_URL: &str = "https://www.gutenberg.org/files/1342/1342-0.txt";

/// How many ranked entries a run reports by default.
pub const DEFAULT_TOP_N: usize = 10;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_FETCH_ATTEMPTS: usize = 3;

/// Explicit per-run configuration. Passed into the engine at construction;
/// there is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub source_url: String,
    /// Size of the map worker pool. Bounds the number of chunks, so no
    /// worker is ever created beyond it.
    pub workers: usize,
    pub top_n: usize,
    pub backend: MapBackend,
    pub fetch_timeout: Duration,
    pub fetch_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            workers: default_workers(),
            top_n: DEFAULT_TOP_N,
            backend: MapBackend::Threads,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            fetch_attempts: DEFAULT_FETCH_ATTEMPTS,
        }
    }
}

/// Default pool size: the hardware concurrency reported by the OS.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
