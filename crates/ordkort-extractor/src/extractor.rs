//! Core extraction orchestrator

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_vocab_entries;
use crate::prompt;
use crate::segment;
use crate::types::{CancelFlag, ExtractionReport, SentenceFailure};
use ordkort_domain::traits::ChatModel;
use ordkort_domain::{ChatMessage, VocabEntry};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Drives per-sentence LLM calls over an article and aggregates the results
pub struct FlashcardExtractor<L: ChatModel> {
    llm: Arc<L>,
    config: ExtractorConfig,
}

impl<L> FlashcardExtractor<L>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new extractor
    pub fn new(llm: L, config: ExtractorConfig) -> Self {
        Self {
            llm: Arc::new(llm),
            config,
        }
    }

    /// Create an extractor sharing an already-wrapped provider
    pub fn from_arc(llm: Arc<L>, config: ExtractorConfig) -> Self {
        Self { llm, config }
    }

    /// Extract vocabulary entries from an article
    ///
    /// Equivalent to [`extract_with_cancel`](Self::extract_with_cancel) with
    /// a flag that is never set.
    pub async fn extract(&self, article: &str) -> ExtractionReport {
        self.extract_with_cancel(article, &CancelFlag::new()).await
    }

    /// Extract vocabulary entries, honoring a cancellation flag
    ///
    /// The run never fails as a whole. Sentences are processed strictly in
    /// order, one outstanding LLM request at a time; a malformed response,
    /// an LLM fault, or a timeout skips that sentence and is recorded as a
    /// [`SentenceFailure`]. When the flag is set, no further requests are
    /// issued and the entries accumulated so far are returned.
    pub async fn extract_with_cancel(
        &self,
        article: &str,
        cancel: &CancelFlag,
    ) -> ExtractionReport {
        let start = Instant::now();
        let article = clip(article, self.config.max_article_length);

        info!("Starting extraction, article length {} chars", article.len());

        let mut report = ExtractionReport::default();
        let mut seen_terms: HashSet<String> = HashSet::new();

        for sentence in segment::sentences(article) {
            if cancel.is_cancelled() {
                info!("Extraction cancelled after {} sentences", report.sentences_total);
                report.cancelled = true;
                break;
            }
            report.sentences_total += 1;

            match self.extract_sentence(sentence).await {
                Ok(entries) => {
                    debug!("Sentence yielded {} entries", entries.len());
                    for entry in entries {
                        if self.config.dedup_terms && !seen_terms.insert(entry.term.clone()) {
                            debug!("Dropping duplicate term '{}'", entry.term);
                            continue;
                        }
                        report.entries.push(entry);
                    }
                }
                Err(e) => {
                    warn!("Failed to process sentence: {}", e);
                    report.failures.push(SentenceFailure {
                        sentence: sentence.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Extraction complete: {} entries from {} sentences, {} failed, {} ms",
            report.entries.len(),
            report.sentences_total,
            report.failures.len(),
            report.processing_time_ms
        );

        report
    }

    /// Run one sentence through prompt, LLM, and parser
    async fn extract_sentence(&self, sentence: &str) -> Result<Vec<VocabEntry>, ExtractorError> {
        let messages = prompt::extraction_messages(sentence);

        let raw = timeout(self.config.llm_timeout(), self.call_llm(messages))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        debug!("LLM response length: {} chars", raw.len());

        Ok(parse_vocab_entries(&raw)?)
    }

    /// Call the LLM provider
    async fn call_llm(&self, messages: Vec<ChatMessage>) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm);

        // Call in a blocking context since ChatModel is not async
        tokio::task::spawn_blocking(move || {
            llm.invoke(&messages)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}

/// Truncate an article to the configured budget at a char boundary
fn clip(article: &str, max_len: usize) -> &str {
    if article.len() <= max_len {
        return article;
    }
    warn!(
        "Article length {} exceeds budget {}, truncating",
        article.len(),
        max_len
    );
    let mut end = max_len;
    while !article.is_char_boundary(end) {
        end -= 1;
    }
    &article[..end]
}
