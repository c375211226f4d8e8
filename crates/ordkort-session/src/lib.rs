//! Ordkort Session Layer
//!
//! Holds everything one learner's sitting accumulates: the current article,
//! the extracted flashcard set, and the discussion history with the AI
//! teacher. State lives per session and is discarded when a new article is
//! loaded; nothing is persisted.

#![warn(missing_docs)]

pub mod flashcards;
pub mod session;
pub mod topics;

pub use flashcards::FlashcardSet;
pub use session::{SessionError, TeacherSession};
pub use topics::suggest_topics;
