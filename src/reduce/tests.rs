//! Reducer Tests
//!
//! Validates commutative merging, the conservation invariant, and ranking
//! with the first-occurrence tie-break.

#[cfg(test)]
mod tests {
    use crate::mapper::count_chunk;
    use crate::partition::{split, WorkChunk};
    use crate::reduce::{reduce, RankedEntry, ReduceError};
    use crate::tokenize::Token;

    fn chunk(index: usize, offset: usize, words: &[&str]) -> WorkChunk {
        WorkChunk {
            index,
            offset,
            tokens: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    // ============================================================
    // MERGING
    // ============================================================

    #[test]
    fn test_reduce_sums_counts_across_chunks() {
        let a = count_chunk(&chunk(0, 0, &["the", "cat", "the"]));
        let b = count_chunk(&chunk(1, 3, &["cat", "ran"]));

        let table = reduce(vec![a, b], 5).unwrap();

        assert_eq!(table.count("the"), 2);
        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("ran"), 1);
        assert_eq!(table.count("dog"), 0);
        assert_eq!(table.total_tokens(), 5);
        assert_eq!(table.distinct_tokens(), 3);
    }

    #[test]
    fn test_reduce_is_order_insensitive() {
        let a = count_chunk(&chunk(0, 0, &["x", "y"]));
        let b = count_chunk(&chunk(1, 2, &["y", "z"]));

        let forward = reduce(vec![a.clone(), b.clone()], 4).unwrap();
        let reversed = reduce(vec![b, a], 4).unwrap();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_reduce_result_independent_of_worker_count() {
        let tokens: Vec<Token> = "to be or not to be that is the question"
            .split(' ')
            .map(String::from)
            .collect();
        let total = tokens.len();

        let one_chunk: Vec<_> = split(tokens.clone(), 1).iter().map(count_chunk).collect();
        let four_chunks: Vec<_> = split(tokens, 4).iter().map(count_chunk).collect();

        let w1 = reduce(one_chunk, total).unwrap();
        let w4 = reduce(four_chunks, total).unwrap();

        assert_eq!(w1, w4);
    }

    #[test]
    fn test_reduce_empty_partials() {
        let table = reduce(Vec::new(), 0).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.total_tokens(), 0);
        assert!(table.rank(10).is_empty());
    }

    // ============================================================
    // CONSERVATION INVARIANT
    // ============================================================

    #[test]
    fn test_reduce_detects_lost_tokens() {
        let a = count_chunk(&chunk(0, 0, &["one", "two"]));

        // Tokenizer saw 5 tokens but only one 2-token chunk arrived
        let err = reduce(vec![a], 5).unwrap_err();

        assert_eq!(
            err,
            ReduceError::CountMismatch {
                aggregated: 2,
                expected: 5
            }
        );
    }

    // ============================================================
    // RANKING
    // ============================================================

    #[test]
    fn test_rank_descending_by_count() {
        let a = count_chunk(&chunk(0, 0, &["b", "a", "a", "c", "a", "b"]));
        let table = reduce(vec![a], 6).unwrap();

        let ranked = table.rank(10);

        assert_eq!(ranked[0], RankedEntry { token: "a".into(), count: 3 });
        assert_eq!(ranked[1], RankedEntry { token: "b".into(), count: 2 });
        assert_eq!(ranked[2], RankedEntry { token: "c".into(), count: 1 });
    }

    #[test]
    fn test_rank_tie_broken_by_first_occurrence() {
        // "a" and "b" both have count 2; "a" appears first
        let partials: Vec<_> = split(
            vec!["a".into(), "b".into(), "a".into(), "b".into()],
            2,
        )
        .iter()
        .map(count_chunk)
        .collect();

        let table = reduce(partials, 4).unwrap();
        let ranked = table.rank(2);

        assert_eq!(ranked[0].token, "a");
        assert_eq!(ranked[1].token, "b");
    }

    #[test]
    fn test_rank_tie_break_survives_chunk_boundaries() {
        // First occurrence of "b" sits in a later chunk than "a"
        let a = count_chunk(&chunk(1, 2, &["b", "a"]));
        let b = count_chunk(&chunk(0, 0, &["a", "b"]));

        // Partials arrive out of chunk order
        let table = reduce(vec![a, b], 4).unwrap();
        let ranked = table.rank(2);

        assert_eq!(ranked[0].token, "a");
        assert_eq!(ranked[1].token, "b");
    }

    #[test]
    fn test_rank_truncates_to_top_n() {
        let a = count_chunk(&chunk(0, 0, &["a", "b", "c", "d", "e"]));
        let table = reduce(vec![a], 5).unwrap();

        assert_eq!(table.rank(3).len(), 3);
        assert_eq!(table.rank(0).len(), 0);
        assert_eq!(table.rank(100).len(), 5);
    }

    #[test]
    fn test_ranked_entry_serialization() {
        let entry = RankedEntry {
            token: "the".to_string(),
            count: 42,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let restored: RankedEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, entry);
    }
}
