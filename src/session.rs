//! Presentation-layer state.
//!
//! The reference UI keeps its corpus, selection, and in-flight flags in
//! component state. [`Session`] is the explicit equivalent: it owns the
//! corpus and the current selection and funnels every mutation through the
//! boundary operations, keeping the retrieval core itself a pure function.

use std::{thread, time::Duration};

use crate::{
    corpus::{Corpus, Document},
    ingestion::{self, FileUpload},
    search::{self, SearchParams, SearchResult},
};

#[derive(Debug, Clone, Default)]
pub struct Session {
    corpus: Corpus,
    selected: Option<u32>,
    /// Cosmetic delay applied before a search result or upload is surfaced,
    /// simulating indexing/retrieval latency. Carries no ordering or
    /// correctness guarantee.
    delay: Option<Duration>,
}

impl Session {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            selected: None,
            delay: None,
        }
    }

    /// Attach a simulated completion delay to search and upload.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn selected(&self) -> Option<&Document> {
        self.selected.and_then(|id| self.corpus.get(id))
    }

    /// Select a document for detail display. Unknown ids clear the
    /// selection.
    pub fn select(&mut self, id: u32) {
        self.selected = self.corpus.get(id).map(|d| d.id);
    }

    /// Run a retrieval pass over the current corpus.
    pub fn search(&self, params: &SearchParams) -> SearchResult {
        self.simulate_latency();
        search::retrieve(params, &self.corpus)
    }

    /// Simulate uploading and indexing a file. Returns the new document id.
    pub fn upload(&mut self, upload: &FileUpload) -> u32 {
        self.simulate_latency();
        ingestion::ingest_upload(&mut self.corpus, upload)
    }

    /// Delete a document by id, clearing the selection if it pointed at the
    /// removed document. Unknown ids are a no-op.
    pub fn delete(&mut self, id: u32) -> bool {
        let removed = ingestion::delete_document(&mut self.corpus, id);
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    fn simulate_latency(&self) {
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
    }
}
