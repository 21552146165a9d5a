//! Pipeline Orchestrator
//!
//! Drives one document through fetch, tokenize, partition, map, and reduce,
//! and assembles the ranked report. Stage transitions are logged and
//! forwarded to the optional observer; the first failure ends the run with
//! the stage that caused it.

use super::config::EngineConfig;
use super::error::PipelineError;
use super::types::{
    FrequencyReport, PhaseTimings, PipelineStage, RunId, StageEvent, StageObserver,
};
use crate::fetch::{HttpSource, TextSource};
use crate::mapper::AbortHandle;
use crate::partition::split;
use crate::reduce::reduce;
use crate::tokenize::{decode, Token, Tokenizer};

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Instrument;

pub struct Engine {
    config: EngineConfig,
    source: Arc<dyn TextSource>,
    tokenizer: Tokenizer,
    observer: Option<StageObserver>,
    abort: AbortHandle,
}

impl Engine {
    /// Creates an engine backed by an HTTP source built from the config.
    pub fn new(config: EngineConfig) -> Self {
        let source = Arc::new(HttpSource::new(
            config.fetch_timeout,
            config.fetch_attempts,
        ));
        Self::with_source(config, source)
    }

    /// Creates an engine with an explicit text source. Used by tests to
    /// substitute canned or failing sources.
    pub fn with_source(config: EngineConfig, source: Arc<dyn TextSource>) -> Self {
        Self {
            config,
            source,
            tokenizer: Tokenizer::new(),
            observer: None,
            abort: AbortHandle::new(),
        }
    }

    /// Installs a stage observer receiving one event per transition.
    pub fn with_observer(mut self, observer: StageObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Handle for aborting a run mid-mapping. In-flight workers finish,
    /// no new chunks are dispatched, and the reducer is not invoked.
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the full pipeline once and returns the ranked report, or the
    /// error of the first stage that failed.
    pub async fn run(&self) -> Result<FrequencyReport, PipelineError> {
        let run_id = RunId::new();
        let span = tracing::info_span!("pipeline_run", run = %run_id.0);
        self.run_stages(run_id).instrument(span).await
    }

    async fn run_stages(&self, run_id: RunId) -> Result<FrequencyReport, PipelineError> {
        // Fetching: the whole document must arrive before tokenization.
        self.transition(PipelineStage::Fetching, Duration::ZERO);
        let phase = Instant::now();
        let raw = match self.source.fetch(&self.config.source_url).await {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(e.into())),
        };
        let fetch_elapsed = phase.elapsed();
        tracing::info!(
            "Fetched {} bytes from {} in {} ms",
            raw.len(),
            self.config.source_url,
            fetch_elapsed.as_millis()
        );

        // Tokenizing: RawText is dropped once the token sequence exists.
        self.transition(PipelineStage::Tokenizing, fetch_elapsed);
        let phase = Instant::now();
        let tokens: Vec<Token> = match decode(&raw) {
            Ok(text) => self.tokenizer.scan(text).collect(),
            Err(e) => return Err(self.fail(e.into())),
        };
        let total_tokens = tokens.len();
        let tokenize_elapsed = phase.elapsed();
        tracing::info!(
            "Tokenized {} tokens in {} ms",
            total_tokens,
            tokenize_elapsed.as_millis()
        );

        // Mapping: partition into at most `workers` chunks, dispatch, and
        // wait for every partial count (the reduction barrier).
        self.transition(PipelineStage::Mapping, tokenize_elapsed);
        let phase = Instant::now();
        let chunks = split(tokens, self.config.workers);
        let strategy = self.config.backend.strategy();
        tracing::info!(
            "Dispatching {} chunks across {} workers ({} backend)",
            chunks.len(),
            self.config.workers,
            strategy.name()
        );
        let partials = match strategy.run(chunks, &self.abort).await {
            Ok(partials) => partials,
            Err(e) => return Err(self.fail(e.into())),
        };
        let map_elapsed = phase.elapsed();

        // Reducing: merge all partials and check conservation.
        self.transition(PipelineStage::Reducing, map_elapsed);
        let phase = Instant::now();
        let table = match reduce(partials, total_tokens) {
            Ok(table) => table,
            Err(e) => return Err(self.fail(e.into())),
        };
        let reduce_elapsed = phase.elapsed();

        self.transition(PipelineStage::Ranked, reduce_elapsed);
        let entries = table.rank(self.config.top_n);
        tracing::info!(
            "Run complete: {} total tokens, {} distinct, reporting top {}",
            table.total_tokens(),
            table.distinct_tokens(),
            entries.len()
        );

        Ok(FrequencyReport {
            run_id,
            source_url: self.config.source_url.clone(),
            workers: self.config.workers,
            total_tokens: table.total_tokens(),
            distinct_tokens: table.distinct_tokens(),
            entries,
            timings: PhaseTimings {
                fetch_ms: fetch_elapsed.as_millis(),
                tokenize_ms: tokenize_elapsed.as_millis(),
                map_ms: map_elapsed.as_millis(),
                reduce_ms: reduce_elapsed.as_millis(),
            },
        })
    }

    fn transition(&self, stage: PipelineStage, elapsed: Duration) {
        tracing::debug!("Entering stage {}", stage.name());
        if let Some(observer) = &self.observer {
            observer(StageEvent { stage, elapsed });
        }
    }

    fn fail(&self, error: PipelineError) -> PipelineError {
        tracing::error!(
            "Pipeline failed during {}: {}",
            error.stage().name(),
            error
        );
        self.transition(PipelineStage::Failed, Duration::ZERO);
        error
    }
}
