//! Parallel Map/Reduce Word-Frequency Engine
//!
//! Fetches a text document over HTTP, tokenizes it, counts word occurrences
//! across a pool of concurrent map workers, and aggregates the partial
//! counts into a single ranked frequency table.
//!
//! ## Architecture Modules
//! The pipeline is composed of five loosely coupled stages, orchestrated by
//! the engine:
//!
//! - **`fetch`**: The acquisition stage. Retrieves the raw document from a
//!   remote source behind the `TextSource` trait, with timeouts and bounded
//!   retries.
//! - **`tokenize`**: Decodes the payload and splits it into a lazy sequence
//!   of normalized (lower-cased) word tokens.
//! - **`partition`**: Splits the token sequence into contiguous, balanced
//!   chunks of work, one per map worker.
//! - **`mapper`**: The parallel counting stage. One worker per chunk, each
//!   with private state, running on a pluggable execution backend (blocking
//!   threads or cooperative tasks).
//! - **`reduce`**: Merges all partial counts into one frequency table and
//!   ranks it (descending count, ties broken by first occurrence).
//! - **`engine`**: Drives the stage machine, owns configuration and the
//!   degree of parallelism, and reports per-phase timings.

pub mod engine;
pub mod fetch;
pub mod mapper;
pub mod partition;
pub mod reduce;
pub mod tokenize;
