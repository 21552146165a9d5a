//! Engine Module
//!
//! Orchestrates the full pipeline: fetch → tokenize → partition → map
//! (parallel) → reduce → ranked output.
//!
//! ## Overview
//! The engine is the only component that decides the degree of parallelism
//! and the chunking granularity; every other stage is pure given its
//! declared inputs. A run walks a fixed stage machine
//! (`Idle → Fetching → Tokenizing → Mapping → Reducing → Ranked`) and fails
//! fast: the first stage error aborts the run and nothing downstream
//! executes.
//!
//! ## Responsibilities
//! - **Orchestration**: driving the stages in order, with a barrier after
//!   fetch and after mapping.
//! - **Configuration**: source URL, worker count, backend, and top-N all
//!   come in through `EngineConfig`; defaults are documented constants.
//! - **Observability**: stage transitions and per-phase durations are
//!   logged and optionally forwarded to a `StageObserver`.
//! - **Cancellation**: an `AbortHandle` stops chunk dispatch mid-mapping;
//!   the reducer is never invoked for an aborted run.
//!
//! ## Submodules
//! - **`config`**: `EngineConfig` and its defaults.
//! - **`engine`**: the orchestrator itself.
//! - **`error`**: the per-stage error taxonomy.
//! - **`types`**: stage machine, observer events, and the final report.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::{EngineConfig, DEFAULT_SOURCE_URL, DEFAULT_TOP_N};
pub use engine::Engine;
pub use error::PipelineError;
pub use types::{FrequencyReport, PhaseTimings, PipelineStage, RunId, StageEvent, StageObserver};
