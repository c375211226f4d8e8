//! The current flashcard set, with user-driven narrowing

use ordkort_domain::VocabEntry;
use std::collections::HashSet;

/// Session-scoped holder for the accumulated vocabulary entries
///
/// Filtering is one-directional within a session: entries dropped by
/// [`filter_keep`](Self::filter_keep) are gone until the next extraction run
/// replaces the set wholesale.
#[derive(Debug, Clone, Default)]
pub struct FlashcardSet {
    entries: Vec<VocabEntry>,
}

impl FlashcardSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current state wholesale (after a fresh extraction run)
    pub fn set_all(&mut self, entries: Vec<VocabEntry>) {
        self.entries = entries;
    }

    /// Keep only entries whose term is in `keep_terms`; drop the rest
    ///
    /// Returns the new state. Order among kept entries is preserved.
    pub fn filter_keep(&mut self, keep_terms: &HashSet<String>) -> &[VocabEntry] {
        self.entries.retain(|entry| keep_terms.contains(&entry.term));
        &self.entries
    }

    /// The present state, for rendering
    pub fn current(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// The current terms, for presentation as a selectable list
    pub fn terms(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.term.clone()).collect()
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
