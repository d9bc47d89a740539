//! Stop-word filtering for query construction.
//!
//! Stop words are excluded from match constraints: an exact-phrase query
//! skips them (while still counting their positions) and an AND query
//! drops them entirely. The index itself keeps stop words so that corpus
//! positions stay aligned with query offsets.

use std::collections::HashSet;

/// The classic English analyzer stop set.
///
/// Matching semantics depend on this list staying small: every entry here
/// is invisible to phrase constraints, so a broad list would stop quoted
/// queries from matching ordinary words.
static ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A stop-word filter with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stop words.
    words: HashSet<&'static str>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter over the standard English stop set.
    pub fn new() -> Self {
        Self {
            words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Checks if a term is a stop word. Case-insensitive.
    pub fn contains(&self, term: &str) -> bool {
        let lower = term.to_ascii_lowercase();
        self.words.contains(lower.as_str())
    }

    /// Returns the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stop words are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
