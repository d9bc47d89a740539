//! Display-ready search match records.

use serde::Serialize;

use crate::query::SearchMode;

/// One formatted search match, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMatch {
    /// Witness display name.
    pub witness: String,
    /// 1-based witness number.
    pub witness_number: u32,
    /// Question number in effect at the passage.
    pub question: u32,
    /// Passage text, whitespace-collapsed and truncated for display.
    pub text: String,
    /// Passage text with query keywords wrapped in `<b>` markers,
    /// truncated independently of `text`.
    pub formatted_text: String,
    /// The raw query tokens that produced this match.
    pub keywords: Vec<String>,
    /// The query mode that produced this match.
    pub mode: SearchMode,
    /// Relevance score, used only for ordering.
    pub score: f32,
    /// Structural path of the source passage.
    pub location: String,
}
