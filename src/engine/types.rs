use crate::reduce::RankedEntry;

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for one pipeline run, carried through the run's
/// tracing span.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// The stage machine for one run. Success walks every stage in order and
/// ends in `Ranked`; `Failed` is terminal and reachable from `Fetching`,
/// `Tokenizing`, or `Mapping`. No stage is revisited within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStage {
    Idle,
    Fetching,
    Tokenizing,
    Mapping,
    Reducing,
    Ranked,
    Failed,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Fetching => "fetching",
            PipelineStage::Tokenizing => "tokenizing",
            PipelineStage::Mapping => "mapping",
            PipelineStage::Reducing => "reducing",
            PipelineStage::Ranked => "ranked",
            PipelineStage::Failed => "failed",
        }
    }
}

/// Emitted when a run enters a stage. `elapsed` is the duration of the
/// stage just left (zero for the first transition).
#[derive(Debug, Clone)]
pub struct StageEvent {
    pub stage: PipelineStage,
    pub elapsed: Duration,
}

/// Hook invoked at every stage boundary. Advisory only: observers receive
/// read-only events and cannot influence the run.
pub type StageObserver = Arc<dyn Fn(StageEvent) + Send + Sync>;

/// Per-phase wall-clock durations for one run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PhaseTimings {
    pub fetch_ms: u128,
    pub tokenize_ms: u128,
    pub map_ms: u128,
    pub reduce_ms: u128,
}

/// The final result of a run, handed off read-only to any consumer.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyReport {
    pub run_id: RunId,
    pub source_url: String,
    pub workers: usize,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    /// Top-N tokens, descending by count, ties broken by first occurrence.
    pub entries: Vec<RankedEntry>,
    pub timings: PhaseTimings,
}
