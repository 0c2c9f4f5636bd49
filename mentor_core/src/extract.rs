//! Fallback concept extraction.
//!
//! Runs only when the intent classifier produced no candidate phrases.
//! Two passes over the index key set, both emitting keys in index
//! iteration order:
//!
//! 1. exact pass: every key that appears as a substring of the query;
//! 2. word-overlap pass (only when pass 1 found nothing): a key is added
//!    as soon as one of its words longer than 3 characters appears as a
//!    whole token of the query.
//!
//! The whole-token rule means "quicksort" in a query will not match the
//! key word "quick". That is a known limitation of the matching model,
//! not a bug; no stemming is applied.

use crate::index::ConceptIndex;

/// Minimum word length for the overlap pass. Shorter words ("of", "to",
/// "for") would match almost any query.
const MIN_OVERLAP_WORD_LEN: usize = 4;

/// Scans the query for known concept names.
pub fn extract_concepts(index: &ConceptIndex, query: &str) -> Vec<String> {
    let mut extracted: Vec<String> = index
        .keys()
        .filter(|key| query.contains(*key))
        .map(str::to_string)
        .collect();

    if extracted.is_empty() {
        let query_words: Vec<&str> = query.split_whitespace().collect();
        for key in index.keys() {
            let hit = key
                .split_whitespace()
                .any(|word| {
                    word.chars().count() >= MIN_OVERLAP_WORD_LEN
                        && query_words.contains(&word)
                });
            if hit {
                extracted.push(key.to_string());
            }
        }
    }

    extracted
}
