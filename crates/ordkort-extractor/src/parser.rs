//! Parse LLM output into vocabulary entries
//!
//! Two independent stages: sanitize the framing (markdown fences), then
//! decode and validate the shape strictly.

use crate::error::ParseError;
use ordkort_domain::{VocabEntry, REQUIRED_FIELDS};
use serde_json::Value;

/// Remove every line whose trimmed content starts with a markdown code fence
///
/// The prompt forbids fencing, but models wrap JSON in ```` ```json ````
/// blocks anyway. Fence lines are dropped wherever they appear; all other
/// lines keep their relative order.
pub fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse one LLM response into vocabulary entries
///
/// Accepts either raw JSON or a markdown-fenced JSON block. After fence
/// stripping the text must decode to a top-level array of objects, each
/// carrying all five required fields as strings. Any violation rejects the
/// whole response; extra keys are ignored.
pub fn parse_vocab_entries(text: &str) -> Result<Vec<VocabEntry>, ParseError> {
    let cleaned = strip_code_fences(text);

    let raw: Value = serde_json::from_str(&cleaned)?;

    let items = raw.as_array().ok_or(ParseError::NotArray)?;

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(ParseError::NotObject { index })?;

        let mut fields = [""; 5];
        for (slot, &field) in fields.iter_mut().zip(REQUIRED_FIELDS.iter()) {
            *slot = obj
                .get(field)
                .and_then(Value::as_str)
                .ok_or(ParseError::MissingField { index, field })?;
        }

        let [term, part_of_speech, definition, example, extra_note] = fields;
        entries.push(VocabEntry {
            term: term.to_string(),
            part_of_speech: part_of_speech.to_string(),
            definition: definition.to_string(),
            example: example.to_string(),
            extra_note: extra_note.to_string(),
        });
    }

    Ok(entries)
}
