//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors from parsing one LLM response into vocabulary entries
///
/// The framing of a response is treated leniently (fence lines are stripped
/// before decoding), but the decoded shape is validated strictly: any
/// violation rejects the whole response. Isolation happens per sentence in
/// the orchestrator, not per entry here.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Text is not valid JSON even after stripping fences
    #[error("Invalid JSON after stripping fences: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded value is not a top-level array
    #[error("Expected top-level JSON array of entries")]
    NotArray,

    /// An array element is not an object
    #[error("Entry {index} is not an object")]
    NotObject {
        /// Index of the offending element
        index: usize,
    },

    /// An object is missing a required field (or its value is not a string)
    #[error("Entry {index} missing required field '{field}'")]
    MissingField {
        /// Index of the offending element
        index: usize,
        /// Name of the absent field
        field: &'static str,
    },
}

/// Errors that can occur around a single LLM call
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM call exceeded the configured timeout
    #[error("LLM call timed out")]
    Timeout,

    /// LLM response failed to parse
    #[error(transparent)]
    Parse(#[from] ParseError),
}
