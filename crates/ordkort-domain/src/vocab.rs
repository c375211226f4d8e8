//! Vocab module - the fundamental unit of Ordkort's flashcard pipeline

use serde::{Deserialize, Serialize};

/// The field names a vocabulary object must carry, in canonical order.
///
/// Shared between the response parser (shape validation) and the prompt
/// (output format instructions) so the wire contract has a single source.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "term",
    "part_of_speech",
    "definition",
    "example",
    "extra_note",
];

/// One extracted vocabulary item
///
/// All five fields must be present in an LLM response for an entry to be
/// constructed at all; there is no defaulting and no partial construction.
///
/// # Examples
///
/// ```
/// use ordkort_domain::VocabEntry;
///
/// let entry = VocabEntry {
///     term: "till synes".to_string(),
///     part_of_speech: "idiom".to_string(),
///     definition: "som det verkar, skenbart".to_string(),
///     example: "Till synes var allt lugnt.".to_string(),
///     extra_note: "formellt, vanligt i skriftspråk".to_string(),
/// };
/// assert!(entry.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The vocabulary item itself (word or multi-word phrase)
    pub term: String,

    /// Coarse category (noun/verb/adjective/idiom), free-form
    pub part_of_speech: String,

    /// Target-language definition
    pub definition: String,

    /// Sentence (ideally from the source article) showing usage
    pub example: String,

    /// Register/formality/collocation commentary, may be empty
    pub extra_note: String,
}

impl VocabEntry {
    /// Validate that the entry carries usable content
    ///
    /// `extra_note` is allowed to be empty; the fields a learner actually
    /// studies from are not.
    pub fn validate(&self) -> Result<(), String> {
        if self.term.trim().is_empty() {
            return Err("term is empty".to_string());
        }
        if self.definition.trim().is_empty() {
            return Err("definition is empty".to_string());
        }
        Ok(())
    }
}
