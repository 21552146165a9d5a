//! Map Worker Module
//!
//! The parallel counting stage. Each worker receives exactly one chunk and
//! counts token occurrences in its own private map; workers never share
//! mutable state with each other.
//!
//! ## Responsibilities
//! - **Counting**: turning a `WorkChunk` into a `PartialCount` (pure, local).
//! - **Dispatch**: running one worker per chunk under a pluggable execution
//!   strategy (blocking thread pool for CPU-bound counting, cooperative
//!   tasks when the work is I/O-dominated).
//! - **Barrier**: awaiting every dispatched worker before handing the
//!   partial counts to the reducer. A failed worker fails the run — its
//!   tokens are never silently dropped.
//!
//! ## Submodules
//! - **`counter`**: the per-chunk counting function and `PartialCount` type.
//! - **`pool`**: the `MapStrategy` trait, both backends, and abort handling.

pub mod counter;
pub mod pool;

pub use counter::{count_chunk, PartialCount, TokenTally};
pub use pool::{AbortHandle, MapBackend, MapError, MapStrategy, TaskPool, ThreadPool};
