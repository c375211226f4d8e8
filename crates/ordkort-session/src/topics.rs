//! Topic suggestion for picking what to read about

use ordkort_domain::traits::ChatModel;
use ordkort_domain::ChatMessage;
use std::sync::Arc;
use tracing::warn;

/// Topics offered when the LLM cannot provide any
pub const FALLBACK_TOPICS: [&str; 5] = [
    "AI i samhället",
    "Svensk folktro",
    "Rymdfart",
    "Kvantfysik",
    "Vikingatiden",
];

const TOPICS_PROMPT: &str = "You are a helpful assistant that provides a list of random topics \
that will be used as search terms on Wikipedia to generate learning content for an advanced \
Swedish adult student. Keep them rather general. Prioritize topics related to technology, \
literature, science, history, or culture. Include a variety of topics; they can be a bit weird, \
niche or even funny. Return a list of 10 interesting topics, separated by commas only. \
Return in Swedish.";

/// Ask the LLM for article topics to offer the learner
///
/// Any failure (provider error, empty reply) falls back to a fixed list so
/// the UI always has something to offer.
pub async fn suggest_topics<L>(llm: Arc<L>) -> Vec<String>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display + Send,
{
    let reply = tokio::task::spawn_blocking(move || {
        llm.invoke(&[
            ChatMessage::system(TOPICS_PROMPT),
            ChatMessage::user("Provide a list of 10 random topics."),
        ])
    })
    .await;

    let topics = match reply {
        Ok(Ok(text)) => text
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>(),
        Ok(Err(e)) => {
            warn!("Topic suggestion failed: {}", e);
            Vec::new()
        }
        Err(e) => {
            warn!("Topic suggestion task failed: {}", e);
            Vec::new()
        }
    };

    if topics.is_empty() {
        FALLBACK_TOPICS.iter().map(|t| t.to_string()).collect()
    } else {
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordkort_llm::MockChatModel;

    #[tokio::test]
    async fn test_topics_parsed_from_comma_list() {
        let mut llm = MockChatModel::default();
        llm.add_reply(
            "Provide a list of 10 random topics.",
            "Rymdfart, Svensk folktro , Kvantdatorer",
        );

        let topics = suggest_topics(Arc::new(llm)).await;
        assert_eq!(topics, vec!["Rymdfart", "Svensk folktro", "Kvantdatorer"]);
    }

    #[tokio::test]
    async fn test_fallback_on_llm_error() {
        let mut llm = MockChatModel::default();
        llm.add_error("Provide a list of 10 random topics.");

        let topics = suggest_topics(Arc::new(llm)).await;
        assert_eq!(topics.len(), FALLBACK_TOPICS.len());
        assert_eq!(topics[0], "AI i samhället");
    }

    #[tokio::test]
    async fn test_fallback_on_blank_reply() {
        let mut llm = MockChatModel::default();
        llm.add_reply("Provide a list of 10 random topics.", " , , ");

        let topics = suggest_topics(Arc::new(llm)).await;
        assert_eq!(topics.len(), FALLBACK_TOPICS.len());
    }
}
