//! Index schema definition for the testimony search index.
//!
//! Defines the Tantivy schema with the fields each indexed passage carries:
//! - `text`: normalized passage text (tokenized with positions, stored)
//! - `location`: structural path of the source node (stored, exact)
//! - `witness`: witness display name (stored, exact)
//! - `witness_number`: 1-based witness number (stored integer)
//! - `question`: question number in effect at the passage (stored integer)

use tantivy::schema::{
    Field, INDEXED, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions,
};

use crate::analyzer::DEPO_TOKENIZER;

/// Handles to all fields in the index schema.
#[derive(Debug, Clone)]
pub struct SearchSchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Normalized passage text, tokenized with positions for phrase matching.
    pub text: Field,
    /// Structural path of the source node.
    pub location: Field,
    /// Witness display name.
    pub witness: Field,
    /// 1-based witness number.
    pub witness_number: Field,
    /// Question number in effect at the passage.
    pub question: Field,
}

impl SearchSchema {
    /// Creates a new index schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        // Text field: positions are required for exact-phrase constraints
        let text_options = TextOptions::default()
            .set_indexing_options(
                TextFieldIndexing::default()
                    .set_tokenizer(DEPO_TOKENIZER)
                    .set_index_option(IndexRecordOption::WithFreqsAndPositions),
            )
            .set_stored();
        let text = builder.add_text_field("text", text_options);

        // Location and witness: stored verbatim, single raw token
        let location = builder.add_text_field("location", STRING | STORED);
        let witness = builder.add_text_field("witness", STRING | STORED);

        let witness_number = builder.add_i64_field("witness_number", INDEXED | STORED);
        let question = builder.add_i64_field("question", INDEXED | STORED);

        let schema = builder.build();

        Self {
            schema,
            text,
            location,
            witness,
            witness_number,
            question,
        }
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for SearchSchema {
    fn default() -> Self {
        Self::new()
    }
}
