//! Raw hit to display-match conversion.
//!
//! For each hit: collapse internal whitespace, wrap every case-insensitive
//! keyword occurrence in `<b>` markers, then truncate the plain and
//! highlighted texts independently at a word boundary. Matches are ordered
//! by descending score with a stable sort, so equal scores keep their
//! retrieval order.

use std::cmp::Ordering;

use crate::{
    query::SearchQuery,
    result::SearchMatch,
    search::Hit,
};

/// Maximum display length for match text, in characters.
pub const MAX_DISPLAY_CHARS: usize = 100;

/// Converts raw hits into display-ready matches.
pub fn format_matches(hits: Vec<Hit>, query: &SearchQuery) -> Vec<SearchMatch> {
    let highlighter = query.highlight_regex();

    let mut matches: Vec<SearchMatch> = hits
        .into_iter()
        .map(|hit| {
            let text = collapse_whitespace(&hit.text);
            let formatted = match &highlighter {
                Some(re) => re.replace_all(&text, "<b>$0</b>").into_owned(),
                None => text.clone(),
            };

            SearchMatch {
                witness: hit.witness,
                witness_number: hit.witness_number,
                question: hit.question,
                text: limit_to(&text, MAX_DISPLAY_CHARS),
                formatted_text: limit_to(&formatted, MAX_DISPLAY_CHARS),
                keywords: query.keywords().to_vec(),
                mode: query.mode(),
                score: hit.score,
                location: hit.location,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches
}

/// Collapses newlines and doubled spaces in stored passage text.
fn collapse_whitespace(text: &str) -> String {
    text.trim().replace('\n', " ").replace("  ", " ")
}

/// Truncates text to the closest word boundary within `limit` characters.
///
/// Text of at most `limit` characters passes through unchanged. Otherwise
/// the cut lands on the last space at or before the limit; if the leading
/// `limit` characters contain no space at all, the text is returned
/// unmodified rather than cut mid-word.
pub fn limit_to(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut cut = None;
    for (position, (byte_index, ch)) in text.char_indices().enumerate() {
        if position > limit {
            break;
        }
        if ch == ' ' {
            cut = Some(byte_index);
        }
    }

    match cut {
        Some(byte_index) => text[..byte_index].trim_end().to_string(),
        None => text.to_string(),
    }
}
