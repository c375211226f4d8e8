//! LLM prompt engineering for vocabulary extraction

use ordkort_domain::{ChatMessage, ChatRole};

/// Fixed extraction directive sent as the system message of every call
///
/// The output contract (bare JSON array, exactly the five fields, no
/// fencing) is enforced only here; the parser tolerates fencing anyway as a
/// defensive measure.
pub const SYSTEM_PROMPT: &str = r#"You are a vocabulary-expansion assistant for a Swedish learner at B2/C1 level.
You will see one sentence at a time from a Swedish article.
Your task is to identify and extract vocabulary items that are particularly useful or interesting for a language learner at a higher level.

Identify between 1 and 3 interesting vocabulary items (single words or multi-word phrases) that meet at least one of these criteria:
- Less frequent, but useful in journalistic or academic texts.
- Useful words or phrases that are not basic vocabulary.
- Idiomatic expressions or common collocations.
- Words/phrases that convey nuance or are hard to paraphrase.
- Topic-specific or domain-specific terms the learner is unlikely to know.
- Verbs that are irregular.
- Words that are commonly used in formal or literary contexts.
Do not include proper nouns, names of people, places, or organizations.

Return a JSON list of items, each with the following structure, without markdown or formatting. Do not include any comments or explanations, just the JSON list:

{
    "term": "word or phrase",
    "part_of_speech": "noun/verb/adjective/idiom",
    "definition": "concise Swedish definition",
    "example": "original sentence from the article",
    "extra_note": "brief note on formality, register, or collocations"
}"#;

/// Build the user message naming the sentence under analysis
pub fn user_message(sentence: &str) -> ChatMessage {
    ChatMessage::user(format!("The sentence to analyze is: {}", sentence))
}

/// Build the full message sequence for one per-sentence call
///
/// Exactly one system message plus one user message; no history is carried
/// between sentences.
pub fn extraction_messages(sentence: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), user_message(sentence)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordkort_domain::REQUIRED_FIELDS;

    #[test]
    fn test_user_message_template() {
        let msg = user_message("Hunden sprang.");
        assert_eq!(msg.role, ChatRole::User);
        assert_eq!(msg.content, "The sentence to analyze is: Hunden sprang.");
    }

    #[test]
    fn test_system_prompt_names_every_required_field() {
        for field in REQUIRED_FIELDS {
            assert!(
                SYSTEM_PROMPT.contains(field),
                "system prompt missing field '{}'",
                field
            );
        }
    }

    #[test]
    fn test_system_prompt_constrains_output() {
        assert!(SYSTEM_PROMPT.contains("JSON list"));
        assert!(SYSTEM_PROMPT.contains("without markdown"));
        assert!(SYSTEM_PROMPT.contains("proper nouns"));
    }

    #[test]
    fn test_extraction_messages_shape() {
        let messages = extraction_messages("En mening");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
        assert!(messages[1].content.contains("En mening"));
    }
}
