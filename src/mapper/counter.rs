use crate::partition::WorkChunk;
use crate::tokenize::Token;
use std::collections::HashMap;

/// Per-token bookkeeping inside one partial count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTally {
    /// Occurrences of the token within the chunk.
    pub count: usize,
    /// Global index of the token's first appearance in the chunk.
    /// The reducer takes the minimum across chunks, which recovers the
    /// first occurrence in the whole document.
    pub first_seen: usize,
}

/// The output of one map worker: token counts for exactly one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialCount {
    pub chunk_index: usize,
    pub counts: HashMap<Token, TokenTally>,
}

/// Counts token occurrences within a single chunk.
///
/// Pure and allocation-local: the worker writes only into its own map, so
/// concurrent workers need no synchronization.
pub fn count_chunk(chunk: &WorkChunk) -> PartialCount {
    let mut counts: HashMap<Token, TokenTally> = HashMap::with_capacity(chunk.tokens.len() / 2);

    for (i, token) in chunk.tokens.iter().enumerate() {
        let position = chunk.offset + i;
        counts
            .entry(token.clone())
            .and_modify(|tally| tally.count += 1)
            .or_insert(TokenTally {
                count: 1,
                first_seen: position,
            });
    }

    PartialCount {
        chunk_index: chunk.index,
        counts,
    }
}
