//! Tokenizer Tests
//!
//! Validates decoding, normalization, laziness, and the word-boundary rule.

#[cfg(test)]
mod tests {
    use crate::fetch::RawText;
    use crate::tokenize::{decode, Token, Tokenizer};

    fn scan_all(text: &str) -> Vec<Token> {
        let tokenizer = Tokenizer::new();
        tokenizer.scan(text).collect()
    }

    // ============================================================
    // TOKENIZATION RULE
    // ============================================================

    #[test]
    fn test_scan_basic() {
        let tokens = scan_all("Hello World");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_scan_lowercases() {
        let tokens = scan_all("RUST Programming LANGUAGE");
        assert_eq!(tokens, vec!["rust", "programming", "language"]);
    }

    #[test]
    fn test_scan_strips_punctuation() {
        let tokens = scan_all("The cat sat. The cat ran.");
        assert_eq!(tokens, vec!["the", "cat", "sat", "the", "cat", "ran"]);
    }

    #[test]
    fn test_scan_keeps_digits_and_underscores() {
        // \w covers alphanumerics and underscore
        let tokens = scan_all("Rust 2024 snake_case");
        assert_eq!(tokens, vec!["rust", "2024", "snake_case"]);
    }

    #[test]
    fn test_scan_unicode_words() {
        let tokens = scan_all("Книжка про слова");
        assert_eq!(tokens, vec!["книжка", "про", "слова"]);
    }

    #[test]
    fn test_scan_preserves_source_order_and_duplicates() {
        let tokens = scan_all("a b a b");
        assert_eq!(tokens, vec!["a", "b", "a", "b"]);
    }

    // ============================================================
    // EDGE CASES
    // ============================================================

    #[test]
    fn test_scan_empty_input() {
        let tokens = scan_all("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_scan_delimiters_only() {
        let tokens = scan_all("... --- !!! \n\t");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_scan_is_restartable_and_idempotent() {
        let tokenizer = Tokenizer::new();
        let text = "one two three one";

        let first: Vec<Token> = tokenizer.scan(text).collect();
        let second: Vec<Token> = tokenizer.scan(text).collect();

        assert_eq!(first, second);
    }

    // ============================================================
    // DECODING
    // ============================================================

    #[test]
    fn test_decode_utf8() {
        let raw = RawText::new("héllo".as_bytes().to_vec());
        assert_eq!(decode(&raw).unwrap(), "héllo");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let raw = RawText::new(vec![0x68, 0x69, 0xff, 0xfe]);
        let err = decode(&raw).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
