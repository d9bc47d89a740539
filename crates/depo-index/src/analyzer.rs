//! Text analysis pipeline for the testimony search index.
//!
//! Implements a three-stage pipeline:
//! 1. `SimpleTokenizer` - splits on whitespace and punctuation
//! 2. `LowerCaser` - converts tokens to lowercase
//! 3. `RemoveLongFilter` - removes tokens longer than 40 bytes
//!
//! There is no stemmer and no stop-word stage: queries match exact terms,
//! and stop words keep their token positions so that phrase constraints
//! with skipped stop words still line up. Stop words are handled at
//! query-construction time instead (see [`Stopwords`](crate::Stopwords)).

use tantivy::tokenizer::{LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer};

/// Name of the custom tokenizer registered with Tantivy.
pub const DEPO_TOKENIZER: &str = "depo_text";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Builds the depo text analyzer.
pub fn build_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .build()
}
