//! Query execution against an unpacked index.
//!
//! [`SearchIndex`] owns the open index, its reader, and the registered
//! analyzer for the lifetime of the process; callers borrow it per query.
//! Both query modes compile to a Tantivy query and run through the same
//! top-docs execution path:
//! - Exact ⇒ a position-sensitive [`PhraseQuery`] built from the query's
//!   offset-preserving terms (a single surviving term degrades to a plain
//!   term query, since a phrase needs at least two)
//! - Phrase ⇒ a [`BooleanQuery`] requiring every term somewhere in the
//!   passage
//!
//! Scores are the retrieval layer's BM25 values: term-frequency based,
//! higher for better-matching passages, used only for ranking.

use std::path::Path;

use tantivy::{
    Index, IndexReader, TantivyDocument, Term,
    collector::TopDocs,
    directory::MmapDirectory,
    query::{BooleanQuery, Occur, PhraseQuery, Query, TermQuery},
    schema::{IndexRecordOption, Value},
};

use crate::{
    IndexError,
    analyzer::{DEPO_TOKENIZER, build_analyzer},
    query::{SearchMode, SearchQuery},
    schema::SearchSchema,
};

/// Default maximum number of candidates retrieved per query.
pub const DEFAULT_RESULT_CAP: usize = 5000;

/// A raw hit: the stored fields of one matching passage plus its score.
#[derive(Debug, Clone)]
pub struct Hit {
    /// Relevance score assigned by the retrieval layer.
    pub score: f32,
    /// Stored passage text (normalized form).
    pub text: String,
    /// Structural path of the source node.
    pub location: String,
    /// Witness display name.
    pub witness: String,
    /// 1-based witness number.
    pub witness_number: u32,
    /// Question number in effect at the passage.
    pub question: u32,
}

/// An open, read-only search index.
pub struct SearchIndex {
    /// The Tantivy index handle.
    index: Index,
    /// Long-lived reader bound to the index directory.
    reader: IndexReader,
    /// Schema with field handles.
    schema: SearchSchema,
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("index", &self.index)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl SearchIndex {
    /// Opens an existing index directory for searching.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        if !path.exists() {
            return Err(IndexError::OpenIndex {
                path: path.to_path_buf(),
                message: "index directory does not exist".to_string(),
            });
        }

        let schema = SearchSchema::new();

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::open(dir).map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;
        index.tokenizers().register(DEPO_TOKENIZER, build_analyzer());

        let reader = index
            .reader()
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        Ok(Self {
            index,
            reader,
            schema,
        })
    }

    /// Executes a query, returning at most `cap` hits in descending score
    /// order.
    ///
    /// A query whose constraint is empty (every term was a stop word)
    /// returns no hits without touching the index.
    pub fn search(&self, query: &SearchQuery, cap: usize) -> Result<Vec<Hit>, IndexError> {
        let Some(compiled) = self.compile(query) else {
            return Ok(Vec::new());
        };
        if cap == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let top_docs = searcher
            .search(&compiled, &TopDocs::with_limit(cap))
            .map_err(|e| IndexError::search(&e))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| IndexError::search(&e))?;
            hits.push(self.read_hit(&doc, score));
        }

        Ok(hits)
    }

    /// Compiles a query's constraint, or `None` if it has no terms.
    fn compile(&self, query: &SearchQuery) -> Option<Box<dyn Query>> {
        let mut terms: Vec<(usize, Term)> = query
            .terms()
            .iter()
            .map(|(position, term)| (*position, Term::from_field_text(self.schema.text, term)))
            .collect();

        match query.mode() {
            SearchMode::Exact => match terms.len() {
                0 => None,
                1 => {
                    let (_, term) = terms.pop()?;
                    Some(Box::new(TermQuery::new(
                        term,
                        IndexRecordOption::WithFreqs,
                    )))
                }
                _ => Some(Box::new(PhraseQuery::new_with_offset(terms))),
            },
            SearchMode::Phrase => {
                if terms.is_empty() {
                    return None;
                }
                let clauses: Vec<(Occur, Box<dyn Query>)> = terms
                    .into_iter()
                    .map(|(_, term)| {
                        let query: Box<dyn Query> =
                            Box::new(TermQuery::new(term, IndexRecordOption::WithFreqs));
                        (Occur::Must, query)
                    })
                    .collect();
                Some(Box::new(BooleanQuery::new(clauses)))
            }
        }
    }

    /// Decodes a stored document into a hit.
    ///
    /// Missing or mistyped stored fields decode as empty/zero rather than
    /// failing the whole result set.
    fn read_hit(&self, doc: &TantivyDocument, score: f32) -> Hit {
        let text_of = |field| {
            doc.get_first(field)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        let int_of = |field| {
            doc.get_first(field)
                .and_then(|v| v.as_i64())
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0)
        };

        Hit {
            score,
            text: text_of(self.schema.text),
            location: text_of(self.schema.location),
            witness: text_of(self.schema.witness),
            witness_number: int_of(self.schema.witness_number),
            question: int_of(self.schema.question),
        }
    }

    /// Returns the number of documents in the index.
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Returns a reference to the underlying Tantivy index.
    pub fn index(&self) -> &Index {
        &self.index
    }
}
