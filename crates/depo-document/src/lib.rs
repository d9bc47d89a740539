//! Witness document model and testimony extraction for depo.
//!
//! This crate handles the structural side of the search pipeline:
//! - A parsed-document tree of named nodes ([`DocNode`] / [`DocumentTree`]),
//!   deserialized from JSON; producing the tree from raw markup is an
//!   upstream concern
//! - Structural node paths that address a passage and resolve back to it
//! - Extraction of flat [`IndexItem`] records from a tree, tracking the
//!   ambient question number while descending
//!
//! # Example
//!
//! ```
//! use depo_document::{DocNode, DocumentTree, Witness, extract};
//!
//! let root = DocNode::branch(
//!     "deposition",
//!     vec![
//!         DocNode::leaf("question-number", "4"),
//!         DocNode::leaf("question", "Where were you on the day in question?"),
//!         DocNode::leaf("question-answer", "At the mill, all afternoon."),
//!     ],
//! );
//! let tree = DocumentTree::new(root);
//! let witness = Witness::new(2, "Jane Roe");
//!
//! let items = extract(&tree, &witness).unwrap();
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].question, 4);
//! assert_eq!(items[1].question, 4);
//! ```

#![warn(missing_docs)]

mod error;
mod extract;
mod node;
mod path;

pub use error::ExtractError;
pub use extract::{IndexItem, Witness, extract};
pub use node::{DocNode, DocumentTree, NodeKind};
pub use path::{child_path, root_path};
