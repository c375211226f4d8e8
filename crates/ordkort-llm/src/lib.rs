//! Ordkort LLM Provider Layer
//!
//! Pluggable implementations of the `ChatModel` trait from `ordkort-domain`.
//!
//! # Providers
//!
//! - `MockChatModel`: Deterministic mock for testing
//! - `OllamaChatProvider`: Local Ollama chat API integration
//!
//! # Examples
//!
//! ```
//! use ordkort_llm::MockChatModel;
//! use ordkort_domain::{ChatMessage, traits::ChatModel};
//!
//! let provider = MockChatModel::new("Hej från modellen!");
//! let reply = provider.invoke(&[ChatMessage::user("test")]).unwrap();
//! assert_eq!(reply, "Hej från modellen!");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use ordkort_domain::traits::ChatModel;
use ordkort_domain::{ChatMessage, ChatRole};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaChatProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock chat model for deterministic testing
///
/// Returns pre-configured replies without making any network calls. Replies
/// are keyed on the content of the last user message in the conversation,
/// which is how the extractor and the discussion session address the model.
///
/// # Examples
///
/// ```
/// use ordkort_llm::MockChatModel;
/// use ordkort_domain::{ChatMessage, traits::ChatModel};
///
/// let mut provider = MockChatModel::new("default");
/// provider.add_reply("The sentence to analyze is: Hej.", "[]");
/// let messages = [ChatMessage::user("The sentence to analyze is: Hej.")];
/// assert_eq!(provider.invoke(&messages).unwrap(), "[]");
/// ```
#[derive(Debug, Clone)]
pub struct MockChatModel {
    default_reply: String,
    replies: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatModel {
    /// Create a new mock with a fixed reply for all conversations
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific reply for a given last-user-message content
    pub fn add_reply(&mut self, user_content: impl Into<String>, reply: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(user_content.into(), reply.into());
    }

    /// Configure an error for a given last-user-message content
    pub fn add_error(&mut self, user_content: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(user_content.into(), "ERROR".to_string());
    }

    /// Number of times `invoke` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockChatModel {
    fn default() -> Self {
        Self::new("Default mock reply")
    }
}

impl ChatModel for MockChatModel {
    type Error = LlmError;

    fn invoke(&self, messages: &[ChatMessage]) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or("");

        let replies = self.replies.lock().unwrap();
        if let Some(reply) = replies.get(last_user) {
            if reply == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(reply.clone());
        }

        Ok(self.default_reply.clone())
    }
}
