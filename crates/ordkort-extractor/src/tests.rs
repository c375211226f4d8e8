//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{CancelFlag, ExtractorConfig, FlashcardExtractor};
    use ordkort_domain::traits::ChatModel;
    use ordkort_domain::ChatMessage;
    use ordkort_llm::MockChatModel;
    use std::convert::Infallible;
    use std::time::Duration;

    fn entry_json(term: &str, example: &str) -> String {
        format!(
            r#"{{"term": "{}", "part_of_speech": "noun", "definition": "def", "example": "{}", "extra_note": ""}}"#,
            term, example
        )
    }

    fn sentence_prompt(sentence: &str) -> String {
        format!("The sentence to analyze is: {}", sentence)
    }

    #[tokio::test]
    async fn test_full_extraction_flow() {
        let mut llm = MockChatModel::new("[]");
        llm.add_reply(
            sentence_prompt("Första meningen"),
            format!("[{}]", entry_json("anseende", "Första meningen.")),
        );

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract("Första meningen. Andra meningen.").await;

        assert_eq!(report.sentences_total, 2);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].term, "anseende");
        assert!(report.failures.is_empty());
        assert!(!report.cancelled);
    }

    #[tokio::test]
    async fn test_empty_article_makes_no_calls() {
        let llm = MockChatModel::new("[]");
        let extractor = FlashcardExtractor::new(llm.clone(), ExtractorConfig::default());

        let report = extractor.extract("   \n  ").await;

        assert_eq!(report.sentences_total, 0);
        assert!(report.entries.is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_call_per_sentence() {
        let llm = MockChatModel::new("[]");
        let extractor = FlashcardExtractor::new(llm.clone(), ExtractorConfig::default());

        extractor.extract("A. B. C.").await;

        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_partial_failure_isolation() {
        // Sentence 2's response is malformed; 1 and 3 still contribute
        let mut llm = MockChatModel::new("[]");
        llm.add_reply(
            sentence_prompt("Ett"),
            format!("[{}]", entry_json("första", "Ett.")),
        );
        llm.add_reply(sentence_prompt("Två"), "detta är inte JSON");
        llm.add_reply(
            sentence_prompt("Tre."),
            format!("[{}]", entry_json("tredje", "Tre.")),
        );

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract("Ett. Två. Tre.").await;

        let terms: Vec<&str> = report.entries.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["första", "tredje"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].sentence, "Två");
        assert!(report.failures[0].reason.contains("JSON"));
    }

    #[tokio::test]
    async fn test_llm_error_is_isolated_too() {
        let mut llm = MockChatModel::new("[]");
        llm.add_error(sentence_prompt("Trasig"));
        llm.add_reply(
            sentence_prompt("Hel."),
            format!("[{}]", entry_json("ord", "Hel.")),
        );

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract("Trasig. Hel.").await;

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].sentence, "Trasig");
    }

    #[tokio::test]
    async fn test_order_preserved_across_sentences() {
        let mut llm = MockChatModel::new("[]");
        llm.add_reply(
            sentence_prompt("Ett"),
            format!(
                "[{}, {}]",
                entry_json("a1", "Ett."),
                entry_json("a2", "Ett.")
            ),
        );
        llm.add_reply(
            sentence_prompt("Två."),
            format!("[{}]", entry_json("b1", "Två.")),
        );

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract("Ett. Två.").await;

        let terms: Vec<&str> = report.entries.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["a1", "a2", "b1"]);
    }

    #[tokio::test]
    async fn test_duplicates_kept_by_default() {
        let mut llm = MockChatModel::new("[]");
        llm.add_reply(
            sentence_prompt("Ett"),
            format!("[{}]", entry_json("samma", "Ett.")),
        );
        llm.add_reply(
            sentence_prompt("Två."),
            format!("[{}]", entry_json("samma", "Två.")),
        );

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract("Ett. Två.").await;

        assert_eq!(report.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_dedup_terms_when_configured() {
        let mut llm = MockChatModel::new("[]");
        llm.add_reply(
            sentence_prompt("Ett"),
            format!("[{}]", entry_json("samma", "Ett.")),
        );
        llm.add_reply(
            sentence_prompt("Två."),
            format!("[{}]", entry_json("samma", "Två.")),
        );

        let config = ExtractorConfig {
            dedup_terms: true,
            ..ExtractorConfig::default()
        };
        let extractor = FlashcardExtractor::new(llm, config);
        let report = extractor.extract("Ett. Två.").await;

        // First occurrence wins
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].example, "Ett.");
    }

    #[tokio::test]
    async fn test_cancelled_before_start_returns_empty() {
        let llm = MockChatModel::new("[]");
        let extractor = FlashcardExtractor::new(llm.clone(), ExtractorConfig::default());

        let cancel = CancelFlag::new();
        cancel.cancel();

        let report = extractor.extract_with_cancel("Ett. Två. Tre.", &cancel).await;

        assert!(report.cancelled);
        assert_eq!(report.sentences_total, 0);
        assert_eq!(llm.call_count(), 0);
    }

    /// Model that stalls on sentences containing a marker word and answers
    /// everything else immediately.
    struct StallingModel {
        marker: &'static str,
        delay: Duration,
        reply: String,
    }

    impl ChatModel for StallingModel {
        type Error = Infallible;

        fn invoke(&self, messages: &[ChatMessage]) -> Result<String, Self::Error> {
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
            if last.contains(self.marker) {
                std::thread::sleep(self.delay);
            }
            Ok(self.reply.clone())
        }
    }

    /// Model that requests cancellation as a side effect of being invoked.
    struct CancellingModel {
        flag: CancelFlag,
        reply: String,
    }

    impl ChatModel for CancellingModel {
        type Error = Infallible;

        fn invoke(&self, _messages: &[ChatMessage]) -> Result<String, Self::Error> {
            self.flag.cancel();
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_timeout_recorded_as_failure() {
        // Sentence 1 stalls past the timeout; sentence 2 still contributes
        let llm = StallingModel {
            marker: "Långsam",
            delay: Duration::from_secs(2),
            reply: format!("[{}]", entry_json("snabb", "Snabb.")),
        };
        let config = ExtractorConfig {
            llm_timeout_secs: 1,
            ..ExtractorConfig::default()
        };

        let extractor = FlashcardExtractor::new(llm, config);
        let report = extractor.extract("Långsam mening. Snabb.").await;

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].sentence, "Långsam mening");
        assert!(report.failures[0].reason.contains("timed out"));
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].term, "snabb");
        assert!(!report.cancelled);
    }

    #[tokio::test]
    async fn test_midrun_cancel_keeps_accumulated_entries() {
        // The flag is raised during the first call; entries from that call
        // survive and no further sentences are attempted
        let cancel = CancelFlag::new();
        let llm = CancellingModel {
            flag: cancel.clone(),
            reply: format!("[{}]", entry_json("första", "Ett.")),
        };

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract_with_cancel("Ett. Två. Tre.", &cancel).await;

        assert!(report.cancelled);
        assert_eq!(report.sentences_total, 1);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].term, "första");
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_fenced_response_accepted() {
        let mut llm = MockChatModel::new("[]");
        llm.add_reply(
            sentence_prompt("Mening."),
            format!("```json\n[{}]\n```", entry_json("ord", "Mening.")),
        );

        let extractor = FlashcardExtractor::new(llm, ExtractorConfig::default());
        let report = extractor.extract("Mening.").await;

        assert_eq!(report.entries.len(), 1);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_long_article_is_clipped() {
        let llm = MockChatModel::new("[]");
        let config = ExtractorConfig {
            max_article_length: 10,
            ..ExtractorConfig::default()
        };
        let extractor = FlashcardExtractor::new(llm.clone(), config);

        // Only the clipped prefix is segmented
        let report = extractor.extract("Ett. Två. Tre. Fyra. Fem.").await;

        assert!(report.sentences_total < 5);
        assert_eq!(llm.call_count(), report.sentences_total);
    }
}
