//! Worker Pool Strategies
//!
//! Runs one map worker per chunk and collects their partial counts. The
//! strategy decides *where* the counting happens; the contract ("submit
//! chunk, await partial result") is the same for every backend, so the
//! reducer never knows which one produced its inputs.
//!
//! Both backends honor the abort flag: once set, already dispatched workers
//! run to completion but no further chunk is submitted, and the pool reports
//! `MapError::Aborted` instead of a partial result set.

use super::counter::{count_chunk, PartialCount};
use crate::partition::WorkChunk;

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum MapError {
    /// A worker panicked or was cancelled before producing its count.
    /// Fatal: excluding the chunk would break the total-count invariant.
    #[error("map worker for chunk {chunk} failed: {reason}")]
    Worker { chunk: usize, reason: String },
    /// The run was aborted before every chunk was dispatched.
    #[error("mapping aborted before all chunks were dispatched")]
    Aborted,
}

/// Shared flag used to stop chunk dispatch mid-run.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Which execution backend the engine should run map workers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapBackend {
    /// Dedicated blocking threads, suited to CPU-bound counting.
    Threads,
    /// Cooperative tasks on the async runtime, suited to I/O-dominated work.
    Tasks,
}

impl MapBackend {
    pub fn strategy(&self) -> Box<dyn MapStrategy> {
        match self {
            MapBackend::Threads => Box::new(ThreadPool),
            MapBackend::Tasks => Box::new(TaskPool),
        }
    }
}

/// The pluggable execution strategy: submit every chunk, await every
/// partial result. Completion order across workers is unspecified; the
/// returned partials carry their chunk index so the caller never depends
/// on it.
#[async_trait]
pub trait MapStrategy: Send + Sync {
    async fn run(
        &self,
        chunks: Vec<WorkChunk>,
        abort: &AbortHandle,
    ) -> Result<Vec<PartialCount>, MapError>;

    fn name(&self) -> &'static str;
}

/// Backend (a): one `spawn_blocking` worker per chunk. The chunk count is
/// bounded by the configured worker count, so the pool never grows past it.
pub struct ThreadPool;

#[async_trait]
impl MapStrategy for ThreadPool {
    async fn run(
        &self,
        chunks: Vec<WorkChunk>,
        abort: &AbortHandle,
    ) -> Result<Vec<PartialCount>, MapError> {
        let mut handles = Vec::with_capacity(chunks.len());
        let mut aborted = false;

        for chunk in chunks {
            if abort.is_aborted() {
                tracing::warn!("Abort requested, chunk {} not dispatched", chunk.index);
                aborted = true;
                break;
            }

            tracing::debug!(
                "Dispatching chunk {} ({} tokens) to blocking worker",
                chunk.index,
                chunk.tokens.len()
            );

            let index = chunk.index;
            let handle = tokio::task::spawn_blocking(move || count_chunk(&chunk));
            handles.push((index, handle));
        }

        let partials = await_partials(handles).await?;

        if aborted {
            return Err(MapError::Aborted);
        }

        Ok(partials)
    }

    fn name(&self) -> &'static str {
        "threads"
    }
}

/// Backend (b): one cooperative task per chunk on the async runtime.
pub struct TaskPool;

#[async_trait]
impl MapStrategy for TaskPool {
    async fn run(
        &self,
        chunks: Vec<WorkChunk>,
        abort: &AbortHandle,
    ) -> Result<Vec<PartialCount>, MapError> {
        let mut handles = Vec::with_capacity(chunks.len());
        let mut aborted = false;

        for chunk in chunks {
            if abort.is_aborted() {
                tracing::warn!("Abort requested, chunk {} not dispatched", chunk.index);
                aborted = true;
                break;
            }

            tracing::debug!(
                "Dispatching chunk {} ({} tokens) to async worker",
                chunk.index,
                chunk.tokens.len()
            );

            let index = chunk.index;
            let handle = tokio::spawn(async move { count_chunk(&chunk) });
            handles.push((index, handle));
        }

        let partials = await_partials(handles).await?;

        if aborted {
            return Err(MapError::Aborted);
        }

        Ok(partials)
    }

    fn name(&self) -> &'static str {
        "tasks"
    }
}

/// The join barrier: waits for every dispatched worker. In-flight workers
/// always run to completion, even when the pool is about to report an
/// abort, so nothing is left detached on the runtime.
async fn await_partials(
    handles: Vec<(usize, JoinHandle<PartialCount>)>,
) -> Result<Vec<PartialCount>, MapError> {
    let mut partials = Vec::with_capacity(handles.len());

    for (chunk, handle) in handles {
        match handle.await {
            Ok(partial) => {
                tracing::trace!("Chunk {} produced {} distinct tokens", chunk, partial.counts.len());
                partials.push(partial);
            }
            Err(e) => {
                return Err(MapError::Worker {
                    chunk,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(partials)
}
