use crate::tokenize::Token;

/// A contiguous slice of the token sequence assigned to exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkChunk {
    /// Position of this chunk in source order.
    pub index: usize,
    /// Global index of the chunk's first token within the document.
    pub offset: usize,
    pub tokens: Vec<Token>,
}

/// Splits `tokens` into at most `workers` contiguous chunks of `⌈N/W⌉`
/// tokens each (last chunk possibly shorter). Every token lands in exactly
/// one chunk and chunk `i` precedes chunk `i + 1` in source order.
pub fn split(tokens: Vec<Token>, workers: usize) -> Vec<WorkChunk> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let workers = workers.max(1);
    let chunk_size = tokens.len().div_ceil(workers);

    tokens
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, window)| WorkChunk {
            index,
            offset: index * chunk_size,
            tokens: window.to_vec(),
        })
        .collect()
}
