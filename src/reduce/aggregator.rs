use crate::mapper::{PartialCount, TokenTally};
use crate::tokenize::Token;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    /// The merged totals do not add up to the tokenizer's token count.
    /// This cannot happen with well-formed partials; if it does, a chunk
    /// was lost or corrupted and the run must not report a table.
    #[error("aggregated count {aggregated} does not match tokenizer total {expected}")]
    CountMismatch { aggregated: usize, expected: usize },
}

/// One row of the ranked output: a token and its total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: Token,
    pub count: usize,
}

/// The fully aggregated token-to-count mapping for a document.
/// Immutable once produced by `reduce`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    totals: HashMap<Token, TokenTally>,
    total_tokens: usize,
}

impl FrequencyTable {
    /// Total count for a token, zero if the token never occurred.
    pub fn count(&self, token: &str) -> usize {
        self.totals.get(token).map(|t| t.count).unwrap_or(0)
    }

    /// Sum of all counts; equals the tokenizer's token count.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    pub fn distinct_tokens(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Ranks the table: descending count, ties broken by first occurrence
    /// in the original text. Returns at most `top_n` entries.
    pub fn rank(&self, top_n: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<(&Token, &TokenTally)> = self.totals.iter().collect();

        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });

        entries
            .into_iter()
            .take(top_n)
            .map(|(token, tally)| RankedEntry {
                token: token.clone(),
                count: tally.count,
            })
            .collect()
    }
}

/// Merges all partial counts into one frequency table.
///
/// Counts are summed per token and `first_seen` takes the minimum, so the
/// result is identical for any arrival order and any chunking. Verifies the
/// conservation invariant against `expected_total` before handing the table
/// back.
pub fn reduce(
    partials: Vec<PartialCount>,
    expected_total: usize,
) -> Result<FrequencyTable, ReduceError> {
    let mut totals: HashMap<Token, TokenTally> = HashMap::new();
    let mut aggregated = 0usize;

    for partial in partials {
        for (token, tally) in partial.counts {
            aggregated += tally.count;
            totals
                .entry(token)
                .and_modify(|total| {
                    total.count += tally.count;
                    total.first_seen = total.first_seen.min(tally.first_seen);
                })
                .or_insert(tally);
        }
    }

    if aggregated != expected_total {
        return Err(ReduceError::CountMismatch {
            aggregated,
            expected: expected_total,
        });
    }

    tracing::debug!(
        "Reduced {} tokens into {} distinct entries",
        aggregated,
        totals.len()
    );

    Ok(FrequencyTable {
        totals,
        total_tokens: aggregated,
    })
}
