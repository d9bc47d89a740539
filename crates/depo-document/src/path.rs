//! Structural node paths.
//!
//! A path is a `/name[index]` segment chain from the root, with 1-based
//! indexes counted among same-named siblings. Paths are stable for a given
//! tree and are stored verbatim in the index so a hit can be traced back to
//! its source passage via [`DocumentTree::resolve`](crate::DocumentTree::resolve).

/// Returns the path of a root node.
pub fn root_path(name: &str) -> String {
    format!("/{name}[1]")
}

/// Returns the path of a child node under `parent`.
///
/// `index` is the 1-based position of the child among siblings with the
/// same name.
pub fn child_path(parent: &str, name: &str, index: usize) -> String {
    format!("{parent}/{name}[{index}]")
}
