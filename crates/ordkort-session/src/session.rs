//! The AI teacher session: article lifecycle, discussion, feedback

use crate::flashcards::FlashcardSet;
use ordkort_domain::traits::ChatModel;
use ordkort_domain::{ChatMessage, ChatRole};
use ordkort_extractor::{ExtractionReport, ExtractorConfig, FlashcardExtractor};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from session operations that reach the LLM
#[derive(Error, Debug)]
pub enum SessionError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),
}

/// System prompt for the discussion chat
const DISCUSSION_PROMPT: &str = "You are a teacher who helps a Swedish learner at B2/C1 level \
to discuss articles and practice their Swedish. You will see a text that is a summary of an \
article. Your task is to help them discuss the article, ask questions about the article, and \
help them practice their Swedish. Do not provide any explanations or summaries, just ask \
questions and help them practice their Swedish.";

/// Instruction prefix for per-message feedback
const FEEDBACK_PROMPT: &str =
    "Please provide feedback on the following message in terms of how correct it is: ";

/// Separator between feedback blocks
const FEEDBACK_SEPARATOR: &str = "\n\n***********\n\n";

/// One learner's sitting: article, flashcards, and discussion history
///
/// Created per session and mutated from two paths only: the extraction run
/// (on article load) and the user-facing filter action. Loading a new
/// article clears everything derived from the previous one.
pub struct TeacherSession<L: ChatModel> {
    llm: Arc<L>,
    article: String,
    flashcards: FlashcardSet,
    history: Vec<ChatMessage>,
}

impl<L> TeacherSession<L>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a session around an LLM provider
    pub fn new(llm: L) -> Self {
        Self::from_arc(Arc::new(llm))
    }

    /// Create a session sharing an already-wrapped provider
    pub fn from_arc(llm: Arc<L>) -> Self {
        Self {
            llm,
            article: String::new(),
            flashcards: FlashcardSet::new(),
            history: Vec::new(),
        }
    }

    /// The current article text
    pub fn article(&self) -> &str {
        &self.article
    }

    /// The current flashcard set
    pub fn flashcards(&self) -> &FlashcardSet {
        &self.flashcards
    }

    /// Mutable access for the filter action
    pub fn flashcards_mut(&mut self) -> &mut FlashcardSet {
        &mut self.flashcards
    }

    /// Load a new article, discarding flashcards and discussion history
    /// derived from the previous one
    pub fn set_article(&mut self, text: impl Into<String>) {
        self.article = text.into();
        self.flashcards = FlashcardSet::new();
        self.history.clear();
        info!("New article loaded, {} chars", self.article.len());
    }

    /// Run vocabulary extraction over the stored article
    ///
    /// The resulting entries replace the flashcard set wholesale; the report
    /// (including per-sentence failures) is returned to the caller.
    pub async fn process_article(&mut self, config: &ExtractorConfig) -> ExtractionReport {
        let extractor = FlashcardExtractor::from_arc(Arc::clone(&self.llm), config.clone());
        let report = extractor.extract(&self.article).await;
        self.flashcards.set_all(report.entries.clone());
        report
    }

    /// Send one discussion message and get the teacher's reply
    ///
    /// The full discussion history rides along on every call; the article
    /// text is framed once, right after the system prompt.
    pub async fn discuss(&mut self, message: &str) -> Result<String, SessionError> {
        self.history.push(ChatMessage::user(message));

        let mut messages = vec![
            ChatMessage::system(DISCUSSION_PROMPT),
            ChatMessage::user(format!("Here is the text to discuss: {}", self.article)),
        ];
        messages.extend(self.history.iter().cloned());

        let reply = self.call_llm(messages).await?;
        let reply = reply.trim();
        let reply = if reply.is_empty() {
            "No response from AI teacher.".to_string()
        } else {
            reply.to_string()
        };

        self.history.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    /// Ask the LLM to critique each of the learner's discussion messages
    pub async fn feedback(&self) -> Result<String, SessionError> {
        let user_messages: Vec<String> = self
            .history
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .map(|m| m.content.clone())
            .collect();

        debug!("Generating feedback for {} messages", user_messages.len());

        let mut blocks = Vec::with_capacity(user_messages.len());
        for content in user_messages {
            let messages = vec![ChatMessage::user(format!("{}{}", FEEDBACK_PROMPT, content))];
            blocks.push(self.call_llm(messages).await?);
        }

        Ok(blocks.join(FEEDBACK_SEPARATOR))
    }

    /// Call the LLM provider in a blocking context
    async fn call_llm(&self, messages: Vec<ChatMessage>) -> Result<String, SessionError> {
        let llm = Arc::clone(&self.llm);

        tokio::task::spawn_blocking(move || {
            llm.invoke(&messages).map_err(|e| SessionError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| SessionError::Llm(format!("Task join error: {}", e)))?
    }
}
