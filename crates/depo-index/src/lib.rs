//! Tantivy-based testimony search index for depo.
//!
//! This crate covers the full offline-and-online index lifecycle:
//! - Schema and text analysis (numeric-token normalization, lower-casing)
//! - Index construction from extracted [`IndexItem`](depo_document::IndexItem)s
//!   with create semantics
//! - Packing the built index into a single compressed blob and unpacking it
//!   for querying
//! - Exact-phrase and unordered-AND query evaluation with stop-word
//!   filtering
//! - Formatting raw hits into display-ready, highlighted matches
//!
//! # Example
//!
//! ```no_run
//! use depo_document::IndexItem;
//! use depo_index::{SearchIndex, SearchQuery, Stopwords, build_index, format_matches};
//!
//! let items = vec![IndexItem {
//!     witness: "Jane Roe".to_string(),
//!     witness_number: 1,
//!     text: "The quick brown fox".to_string(),
//!     question: 4,
//!     location: "/deposition[1]/question-answer[1]".to_string(),
//! }];
//! build_index(&items, "./index".as_ref()).unwrap();
//!
//! let index = SearchIndex::open("./index".as_ref()).unwrap();
//! let stopwords = Stopwords::new();
//! let query = SearchQuery::exact("\"quick brown\"", &stopwords).unwrap();
//! let hits = index.search(&query, 5000).unwrap();
//! let matches = format_matches(hits, &query);
//! assert_eq!(matches.len(), 1);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod archive;
mod error;
mod format;
mod normalize;
mod query;
mod result;
mod schema;
mod search;
mod stopwords;
mod writer;

pub use analyzer::{DEPO_TOKENIZER, build_analyzer};
pub use archive::{pack, unpack};
pub use error::IndexError;
pub use format::{MAX_DISPLAY_CHARS, format_matches, limit_to};
pub use normalize::space_digit_runs;
pub use query::{SearchMode, SearchQuery};
pub use result::SearchMatch;
pub use schema::SearchSchema;
pub use search::{DEFAULT_RESULT_CAP, Hit, SearchIndex};
pub use stopwords::Stopwords;
pub use writer::{IndexWriter, build_index};
