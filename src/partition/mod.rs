//! Partitioning Module
//!
//! Splits the full token sequence into contiguous, equally sized chunks of
//! work, one per map worker. Chunk order follows source order so that the
//! first-occurrence tie-break stays well defined downstream.

pub mod chunker;

pub use chunker::{split, WorkChunk};
