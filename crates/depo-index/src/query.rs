//! Query model: raw user text parsed into match constraints.
//!
//! A query string becomes a [`SearchQuery`] in one of two modes:
//! - **Exact**: input wrapped in double quotes. Terms must appear at the
//!   same relative positions in a passage. Stop words are skipped but the
//!   position counter still advances past them, so `"fox and hound"`
//!   requires `fox` and `hound` two positions apart.
//! - **Phrase**: anything unquoted. Every non-stop term must appear
//!   somewhere in the passage, in any order.
//!
//! All raw tokens (stop words included) are kept as keywords for result
//! highlighting.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::stopwords::Stopwords;

/// How a query's terms constrain a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchMode {
    /// Position-sensitive phrase constraint.
    Exact,
    /// Unordered conjunctive (AND) constraint.
    Phrase,
}

/// A parsed search query, derived per-request from raw user text.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// The match mode.
    mode: SearchMode,
    /// Non-stop terms with their original token index preserved.
    terms: Vec<(usize, String)>,
    /// All raw tokens, for highlighting.
    keywords: Vec<String>,
}

impl SearchQuery {
    /// Parses raw input, selecting the mode from surrounding quotes.
    ///
    /// Returns `None` for blank input.
    pub fn parse(input: &str, stopwords: &Stopwords) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            Self::exact(input, stopwords)
        } else {
            Self::phrase(input, stopwords)
        }
    }

    /// Parses input as an exact-phrase query, stripping surrounding quotes.
    ///
    /// Returns `None` for blank input.
    pub fn exact(input: &str, stopwords: &Stopwords) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        let lower = input.to_lowercase();
        let stripped = lower.trim().trim_matches('"');
        Some(Self::build(SearchMode::Exact, stripped, stopwords))
    }

    /// Parses input as an unordered-AND query.
    ///
    /// Returns `None` for blank input.
    pub fn phrase(input: &str, stopwords: &Stopwords) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        let lower = input.to_lowercase();
        Some(Self::build(SearchMode::Phrase, lower.trim(), stopwords))
    }

    /// Tokenizes lowercased text into positional terms and keywords.
    fn build(mode: SearchMode, text: &str, stopwords: &Stopwords) -> Self {
        let mut terms = Vec::new();
        let mut keywords = Vec::new();

        for (position, token) in text.split_whitespace().enumerate() {
            // Stop words never enter the constraint, but they still consume
            // a position so surrounding terms keep their original offsets.
            if !stopwords.contains(token) {
                terms.push((position, token.to_string()));
            }
            keywords.push(token.to_string());
        }

        Self {
            mode,
            terms,
            keywords,
        }
    }

    /// Returns the match mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Returns the non-stop terms with their original token positions.
    pub fn terms(&self) -> &[(usize, String)] {
        &self.terms
    }

    /// Returns all raw query tokens, stop words included.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the keywords joined into a loose multi-gap pattern.
    pub fn wildcard_pattern(&self) -> String {
        self.keywords.join(".*?")
    }

    /// Builds the combined case-insensitive highlight pattern over all
    /// keywords, or `None` if there are no keywords.
    pub fn highlight_regex(&self) -> Option<Regex> {
        if self.keywords.is_empty() {
            return None;
        }
        let pattern = self
            .keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        RegexBuilder::new(&pattern).case_insensitive(true).build().ok()
    }
}
