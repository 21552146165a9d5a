//! Tokenization Module
//!
//! Turns the raw bytes returned by the fetcher into a normalized token
//! stream. Decoding and word splitting live here so that the rest of the
//! pipeline only ever sees clean, lower-cased tokens.

pub mod tokenizer;

pub use tokenizer::{decode, Token, TokenizeError, Tokenizer};

#[cfg(test)]
mod tests;
