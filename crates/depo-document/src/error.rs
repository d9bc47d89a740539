//! Error types for testimony extraction.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when extracting testimony items from a document tree.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A question-number node whose text does not parse as an integer.
    #[error("invalid question number at {location}: {source}")]
    QuestionNumber {
        /// Structural path of the offending node.
        location: String,
        /// Underlying parse error.
        source: ParseIntError,
    },

    /// A witness file stem that does not follow the `NN_Name` convention.
    #[error("invalid witness file stem: {stem:?}")]
    WitnessStem {
        /// The malformed file stem.
        stem: String,
    },
}
