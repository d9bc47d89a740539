//! Index construction from extracted testimony items.
//!
//! Building always has create semantics: the destination directory is
//! replaced wholesale and all items are committed in a single batch.
//! Either the full set lands or the operation fails with nothing
//! committed; a partial index is never a valid output.

use std::{fs, path::Path};

use depo_document::IndexItem;
use tantivy::{
    Index, IndexSettings, IndexWriter as TantivyIndexWriter, TantivyDocument,
    directory::MmapDirectory,
};
use tracing::info;

use crate::{
    analyzer::{DEPO_TOKENIZER, build_analyzer},
    error::IndexError,
    normalize::space_digit_runs,
    schema::SearchSchema,
};

/// Default heap size for the index writer (50 MB).
const DEFAULT_HEAP_SIZE: usize = 50_000_000;

/// Writes testimony items to a fresh Tantivy index.
pub struct IndexWriter {
    /// The Tantivy index.
    index: Index,
    /// The underlying Tantivy writer.
    writer: TantivyIndexWriter,
    /// Schema with field handles.
    schema: SearchSchema,
}

impl IndexWriter {
    /// Creates a new index at the given path, replacing any existing one.
    pub fn create(path: &Path) -> Result<Self, IndexError> {
        let schema = SearchSchema::new();

        if path.exists() {
            fs::remove_dir_all(path)?;
        }
        fs::create_dir_all(path)?;

        let dir = MmapDirectory::open(path).map_err(|e| {
            let err: tantivy::TantivyError = e.into();
            IndexError::open_index(path.to_path_buf(), &err)
        })?;

        let index = Index::create(dir, schema.schema().clone(), IndexSettings::default())
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        index.tokenizers().register(DEPO_TOKENIZER, build_analyzer());

        let writer = index
            .writer(DEFAULT_HEAP_SIZE)
            .map_err(|e| IndexError::open_index(path.to_path_buf(), &e))?;

        Ok(Self {
            index,
            writer,
            schema,
        })
    }

    /// Adds one testimony item to the index.
    ///
    /// The item text is normalized (digit runs spaced out) before being
    /// stored and tokenized. The document is staged but not visible until
    /// [`commit`](Self::commit).
    pub fn add_item(&mut self, item: &IndexItem) -> Result<(), IndexError> {
        let text = space_digit_runs(&item.text);

        let mut doc = TantivyDocument::new();
        doc.add_text(self.schema.text, &text);
        doc.add_text(self.schema.location, &item.location);
        doc.add_text(self.schema.witness, &item.witness);
        doc.add_i64(self.schema.witness_number, i64::from(item.witness_number));
        doc.add_i64(self.schema.question, i64::from(item.question));

        self.writer
            .add_document(doc)
            .map_err(|e| IndexError::write(&e))?;
        Ok(())
    }

    /// Commits all staged items, making them visible to readers.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        self.writer.commit().map_err(|e| IndexError::commit(&e))?;
        Ok(())
    }

    /// Returns the number of committed documents in the index.
    pub fn num_docs(&self) -> Result<u64, IndexError> {
        let reader = self
            .index
            .reader()
            .map_err(|e| IndexError::Write(e.to_string()))?;
        Ok(reader.searcher().num_docs())
    }
}

/// Builds a complete index from a collection of items.
///
/// Returns the number of documents indexed.
pub fn build_index(items: &[IndexItem], dest: &Path) -> Result<usize, IndexError> {
    let mut writer = IndexWriter::create(dest)?;
    for item in items {
        writer.add_item(item)?;
    }
    writer.commit()?;

    info!(documents = items.len(), path = %dest.display(), "index committed");
    Ok(items.len())
}
