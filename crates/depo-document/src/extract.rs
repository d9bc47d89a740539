//! Testimony extraction.
//!
//! One depth-first pass over a witness document tree produces the flat
//! [`IndexItem`] records the index builder consumes. The current question
//! number is ambient state: a `question-number` node updates it, and every
//! question/answer node emitted afterwards inherits it until the next one.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    DocNode, DocumentTree, ExtractError, NodeKind,
    path::child_path,
};

/// Identity of the witness a document belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    /// 1-based witness number.
    pub number: u32,
    /// Witness display name.
    pub name: String,
}

impl Witness {
    /// Creates a witness identity.
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }

    /// Derives a witness identity from a corpus file stem.
    ///
    /// Corpus files are named `NN_Name` with a zero-based ordinal prefix;
    /// the witness number is the ordinal plus one. Anything that does not
    /// split into an integer prefix and a non-empty name is rejected.
    pub fn from_file_stem(stem: &str) -> Result<Self, ExtractError> {
        let bad_stem = || ExtractError::WitnessStem {
            stem: stem.to_string(),
        };

        let (ordinal, name) = stem.split_once('_').ok_or_else(bad_stem)?;
        if name.is_empty() {
            return Err(bad_stem());
        }
        let ordinal: u32 = ordinal.parse().map_err(|_| bad_stem())?;

        Ok(Self::new(ordinal + 1, name))
    }
}

/// A single extracted testimony passage, ready for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexItem {
    /// Witness display name.
    pub witness: String,
    /// 1-based witness number.
    pub witness_number: u32,
    /// Trimmed passage text. Never empty.
    pub text: String,
    /// Question number in effect at the passage, 0 if none preceded it.
    pub question: u32,
    /// Structural path of the source node.
    pub location: String,
}

/// Extracts all testimony items from one witness document.
///
/// Question and question-answer nodes with non-empty text each emit one
/// item; their children are not descended further. A question/answer node
/// appearing before any question-number node carries question 0.
pub fn extract(tree: &DocumentTree, witness: &Witness) -> Result<Vec<IndexItem>, ExtractError> {
    let mut items = Vec::new();
    let mut question = 0u32;
    walk(
        tree.root(),
        &tree.root_path(),
        witness,
        &mut question,
        &mut items,
    )?;
    Ok(items)
}

/// Recursive descent carrying the ambient question number.
fn walk(
    node: &DocNode,
    path: &str,
    witness: &Witness,
    question: &mut u32,
    items: &mut Vec<IndexItem>,
) -> Result<(), ExtractError> {
    match node.kind() {
        NodeKind::QuestionNumber => {
            let text = node.inner_text();
            *question = text
                .trim()
                .parse()
                .map_err(|source| ExtractError::QuestionNumber {
                    location: path.to_string(),
                    source,
                })?;
        }
        NodeKind::Question | NodeKind::QuestionAnswer => {
            let text = node.inner_text();
            let text = text.trim();
            if !text.is_empty() {
                items.push(IndexItem {
                    witness: witness.name.clone(),
                    witness_number: witness.number,
                    text: text.to_string(),
                    question: *question,
                    location: path.to_string(),
                });
            }
        }
        NodeKind::Other => {
            let mut sibling_counts: HashMap<&str, usize> = HashMap::new();
            for child in &node.children {
                let index = sibling_counts
                    .entry(child.name.as_str())
                    .and_modify(|n| *n += 1)
                    .or_insert(1);
                let child_path = child_path(path, &child.name, *index);
                walk(child, &child_path, witness, question, items)?;
            }
        }
    }
    Ok(())
}
