//! Result and control types for extraction runs

use ordkort_domain::VocabEntry;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Outcome of one extraction run over an article
///
/// A run never fails as a whole: malformed responses and LLM faults are
/// recorded per sentence and the rest of the article still contributes.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Accumulated entries, in sentence order then LLM order
    pub entries: Vec<VocabEntry>,

    /// Sentences whose response could not be used
    pub failures: Vec<SentenceFailure>,

    /// Number of sentences the segmenter produced
    pub sentences_total: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,

    /// Whether the run was cut short by cancellation
    pub cancelled: bool,
}

/// One sentence whose extraction failed
#[derive(Debug, Clone, Serialize)]
pub struct SentenceFailure {
    /// The sentence that was being analyzed
    pub sentence: String,

    /// Human-readable diagnostic (parse error, LLM fault, timeout)
    pub reason: String,
}

/// Cloneable cancellation flag for an extraction run
///
/// Setting the flag stops the orchestrator from issuing further per-sentence
/// requests; entries accumulated before that point are returned intact.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a new, unset flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
