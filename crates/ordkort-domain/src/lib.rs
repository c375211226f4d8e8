//! Ordkort Domain Layer
//!
//! This crate contains the core domain model for Ordkort: the vocabulary
//! entry, the chat message types spoken over the LLM boundary, and the trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **VocabEntry**: one extracted vocabulary item with definition, example
//!   sentence, and register/collocation notes
//! - **ChatMessage**: a role-tagged message in an LLM conversation
//! - **ChatModel**: the boundary trait behind which providers live
//!
//! ## Architecture
//!
//! This crate stays dependency-light:
//! - serde only (entries and messages are wire types)
//! - Pure domain logic, no I/O
//! - Provider implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod traits;
pub mod vocab;

// Re-exports for convenience
pub use chat::{ChatMessage, ChatRole};
pub use vocab::{VocabEntry, REQUIRED_FIELDS};
