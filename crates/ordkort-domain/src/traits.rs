//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Provider implementations live in other crates.

use crate::chat::ChatMessage;

/// Trait for LLM chat operations
///
/// Implemented by the infrastructure layer (ordkort-llm). Each call is
/// independent; conversation memory is the caller's responsibility (the
/// extractor deliberately carries none, the discussion session carries its
/// own history).
pub trait ChatModel {
    /// Error type for chat operations
    type Error;

    /// Send an ordered message sequence, return the model's reply text
    fn invoke(&self, messages: &[ChatMessage]) -> Result<String, Self::Error>;
}
