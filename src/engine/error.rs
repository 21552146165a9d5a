use super::types::PipelineStage;
use crate::fetch::FetchError;
use crate::mapper::MapError;
use crate::reduce::ReduceError;
use crate::tokenize::TokenizeError;

use thiserror::Error;

/// Everything that can end a run short of `Ranked`. Each variant names the
/// failing stage; no stage swallows an error and substitutes a default.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch stage failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("tokenize stage failed: {0}")]
    Tokenize(#[from] TokenizeError),
    #[error("map stage failed: {0}")]
    Map(MapError),
    #[error("run aborted during mapping")]
    Aborted,
    #[error("reduce stage failed: {0}")]
    Reduce(#[from] ReduceError),
}

impl From<MapError> for PipelineError {
    fn from(e: MapError) -> Self {
        match e {
            MapError::Aborted => PipelineError::Aborted,
            other => PipelineError::Map(other),
        }
    }
}

impl PipelineError {
    /// The stage the run was in when it failed.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Fetch(_) => PipelineStage::Fetching,
            PipelineError::Tokenize(_) => PipelineStage::Tokenizing,
            PipelineError::Map(_) | PipelineError::Aborted => PipelineStage::Mapping,
            PipelineError::Reduce(_) => PipelineStage::Reducing,
        }
    }
}
