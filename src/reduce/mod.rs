//! Reduction Module
//!
//! Merges the per-chunk partial counts into one frequency table and ranks
//! it. The merge is commutative and associative, so worker completion order
//! and worker count never change the result.

pub mod aggregator;

pub use aggregator::{reduce, FrequencyTable, RankedEntry, ReduceError};

#[cfg(test)]
mod tests;
