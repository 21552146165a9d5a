use crate::fetch::RawText;
use regex::Regex;
use thiserror::Error;

/// A normalized word: lower-cased, stripped of surrounding delimiters.
pub type Token = String;

#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The fetched payload is not valid UTF-8 and cannot be tokenized.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Decodes a raw payload into text. Undecodable input is a hard error:
/// tokenizing a partially decoded document would undercount it.
pub fn decode(raw: &RawText) -> Result<&str, TokenizeError> {
    std::str::from_utf8(raw.as_bytes()).map_err(|e| TokenizeError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

/// Splits text into word tokens.
///
/// A token is a maximal run of word characters (`\b\w+\b`, Unicode-aware);
/// everything else is a delimiter and discarded. Matching happens on the
/// original text and each match is lower-cased individually, which keeps
/// `scan` lazy and restartable.
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            word: Regex::new(r"\b\w+\b").unwrap(),
        }
    }

    /// Returns a lazy iterator over the tokens of `text`, in source order.
    /// Empty input yields an empty iterator, not an error.
    pub fn scan<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        self.word.find_iter(text).map(|m| m.as_str().to_lowercase())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
