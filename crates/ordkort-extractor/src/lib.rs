//! Ordkort Extractor
//!
//! Converts a reference article into vocabulary flashcards using an LLM,
//! one sentence at a time.
//!
//! # Architecture
//!
//! ```text
//! Article → Segmenter → per-sentence prompt → ChatModel → Parser → VocabEntry
//! ```
//!
//! # Key Features
//!
//! - **Sentence-at-a-time extraction**: each sentence gets an independent
//!   LLM call with a fixed instruction prompt and no conversation history
//! - **Strict parsing, tolerant framing**: markdown fences are stripped
//!   defensively, but the decoded shape is validated field by field
//! - **Failure isolation**: one malformed response skips one sentence,
//!   never the run; every failure is recorded alongside the results
//! - **Cancellation**: a run can be stopped between sentences, keeping the
//!   entries accumulated so far
//!
//! # Example Usage
//!
//! ```
//! use ordkort_extractor::{FlashcardExtractor, ExtractorConfig};
//! use ordkort_llm::MockChatModel;
//!
//! # async fn example() {
//! let llm = MockChatModel::new("[]");
//! let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
//!
//! let report = extractor.extract("En mening. En till mening.").await;
//!
//! println!("Entries: {}", report.entries.len());
//! println!("Failed sentences: {}", report.failures.len());
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod parser;
pub mod prompt;
pub mod segment;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::{ExtractorError, ParseError};
pub use extractor::FlashcardExtractor;
pub use types::{CancelFlag, ExtractionReport, SentenceFailure};
