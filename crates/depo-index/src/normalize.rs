//! Numeric-token normalization.
//!
//! Passage text often glues numbers to words ("chapter12", "lot7"). The
//! tokenizer splits on whitespace and punctuation only, so digit runs are
//! surrounded with spaces before indexing; numbers then tokenize as
//! standalone terms. The normalized text is also what gets stored and
//! displayed.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a maximal run of ASCII digits.
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid pattern"));

/// Inserts single spaces around every digit run, collapsing the doubled
/// spaces the insertion produces.
pub fn space_digit_runs(text: &str) -> String {
    DIGIT_RUN.replace_all(text, " $0 ").replace("  ", " ")
}
