//! Named-node document tree.
//!
//! A [`DocumentTree`] is the parsed form of one witness document: a tree of
//! [`DocNode`]s, each carrying a markup name, optional direct text, and
//! children. Trees arrive as JSON; the crate never sees raw markup.

use serde::{Deserialize, Serialize};

use crate::path::{child_path, root_path};

/// A single named node in a witness document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocNode {
    /// Markup element name, e.g. `question-answer`.
    pub name: String,
    /// Text directly contained by this node (not its descendants).
    #[serde(default)]
    pub text: String,
    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<DocNode>,
}

impl DocNode {
    /// Creates a leaf node with direct text and no children.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Creates a branch node with children and no direct text.
    pub fn branch(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children,
        }
    }

    /// Returns the concatenated text of this node and all its descendants,
    /// in document order.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Appends this node's text and descendant text to `out`.
    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Returns the kind this node's name classifies as.
    pub fn kind(&self) -> NodeKind {
        NodeKind::of(&self.name)
    }
}

/// The node kinds the extractor distinguishes.
///
/// Resolved once per node from its markup name, so the traversal dispatches
/// on an enum rather than repeated string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `question-number`: updates the ambient question context, never emitted.
    QuestionNumber,
    /// `question`: emitted as one testimony item.
    Question,
    /// `question-answer`: emitted as one testimony item.
    QuestionAnswer,
    /// Any other element: recursed into.
    Other,
}

impl NodeKind {
    /// Classifies a markup element name.
    pub fn of(name: &str) -> Self {
        match name {
            "question-number" => Self::QuestionNumber,
            "question" => Self::Question,
            "question-answer" => Self::QuestionAnswer,
            _ => Self::Other,
        }
    }
}

/// A parsed witness document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTree {
    /// The root document node.
    root: DocNode,
}

impl DocumentTree {
    /// Creates a tree with the given root node.
    pub fn new(root: DocNode) -> Self {
        Self { root }
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &DocNode {
        &self.root
    }

    /// Returns the structural path of the root node.
    pub fn root_path(&self) -> String {
        root_path(&self.root.name)
    }

    /// Resolves a structural path back to the node it addresses.
    ///
    /// Paths are the ones produced during extraction: `/name[i]` segments
    /// with 1-based indexes counted among same-named siblings. Returns
    /// `None` if any segment does not match.
    pub fn resolve(&self, path: &str) -> Option<&DocNode> {
        let mut segments = path.strip_prefix('/')?.split('/');

        let (name, index) = parse_segment(segments.next()?)?;
        if name != self.root.name || index != 1 {
            return None;
        }

        let mut node = &self.root;
        for segment in segments {
            let (name, index) = parse_segment(segment)?;
            node = node
                .children
                .iter()
                .filter(|child| child.name == name)
                .nth(index.checked_sub(1)?)?;
        }
        Some(node)
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        fn count(node: &DocNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }
}

/// Splits a `name[index]` path segment into its parts.
fn parse_segment(segment: &str) -> Option<(&str, usize)> {
    let (name, rest) = segment.split_once('[')?;
    let index = rest.strip_suffix(']')?.parse().ok()?;
    Some((name, index))
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_tree() -> DocumentTree {
        DocumentTree::new(DocNode::branch(
            "deposition",
            vec![
                DocNode::leaf("heading", "Direct examination"),
                DocNode::branch(
                    "section",
                    vec![
                        DocNode::leaf("question", "First?"),
                        DocNode::leaf("question", "Second?"),
                    ],
                ),
                DocNode::branch("section", vec![DocNode::leaf("question-answer", "Yes.")]),
            ],
        ))
    }

    #[test]
    fn inner_text_concatenates_descendants() {
        let node = DocNode::branch(
            "p",
            vec![
                DocNode::leaf("span", "The mill "),
                DocNode::branch("em", vec![DocNode::leaf("span", "was ")]),
                DocNode::leaf("span", "closed."),
            ],
        );
        assert_eq!(node.inner_text(), "The mill was closed.");
    }

    #[test]
    fn kind_classification() {
        assert_eq!(NodeKind::of("question-number"), NodeKind::QuestionNumber);
        assert_eq!(NodeKind::of("question"), NodeKind::Question);
        assert_eq!(NodeKind::of("question-answer"), NodeKind::QuestionAnswer);
        assert_eq!(NodeKind::of("div"), NodeKind::Other);
        // Names are exact; near-misses fall through to Other.
        assert_eq!(NodeKind::of("Question"), NodeKind::Other);
    }

    #[test]
    fn resolve_addresses_same_named_siblings() {
        let tree = sample_tree();

        let first = tree.resolve("/deposition[1]/section[1]/question[1]").unwrap();
        assert_eq!(first.text, "First?");

        let second = tree.resolve("/deposition[1]/section[1]/question[2]").unwrap();
        assert_eq!(second.text, "Second?");

        let answer = tree
            .resolve("/deposition[1]/section[2]/question-answer[1]")
            .unwrap();
        assert_eq!(answer.text, "Yes.");
    }

    #[test]
    fn resolve_rejects_bad_paths() {
        let tree = sample_tree();

        assert!(tree.resolve("").is_none());
        assert!(tree.resolve("/other[1]").is_none());
        assert!(tree.resolve("/deposition[2]").is_none());
        assert!(tree.resolve("/deposition[1]/section[3]").is_none());
        assert!(tree.resolve("/deposition[1]/section[0]").is_none());
        assert!(tree.resolve("/deposition[1]/section").is_none());
    }

    #[test]
    fn node_count_covers_all_nodes() {
        assert_eq!(sample_tree().node_count(), 7);
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "name": "deposition",
            "children": [
                {"name": "question-number", "text": "12"},
                {"name": "question", "text": "And then?"}
            ]
        }"#;

        let tree: DocumentTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.root().name, "deposition");
        assert_eq!(tree.root().children.len(), 2);
        assert_eq!(tree.root().children[0].kind(), NodeKind::QuestionNumber);
    }
}
